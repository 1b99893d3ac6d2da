//! Keybinding definitions for the TUI.
//!
//! The same key means different things depending on which panel has
//! focus: in the search box every printable character is text.

use crate::nav::Focus;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextFocus,
    PrevFocus,
    FocusSearch,
    OpenHelp,
    Confirm,
    Cancel,
    Input(char),
    Backspace,
    SelectChart(usize),
    NextChart,
    PrevChart,
    SortColumn(usize),
    ColumnLeft,
    ColumnRight,
    SortAtCursor,
    MoveUp,
    MoveDown,
}

pub fn map_key(event: KeyEvent, focus: Focus) -> Option<Action> {
    let KeyEvent {
        code,
        modifiers,
        kind,
        ..
    } = event;

    if kind == KeyEventKind::Release {
        return None;
    }

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    match code {
        KeyCode::Tab => return Some(Action::NextFocus),
        KeyCode::BackTab => return Some(Action::PrevFocus),
        KeyCode::Esc => return Some(Action::Cancel),
        _ => {}
    }

    match focus {
        Focus::Search => map_search_key(code),
        Focus::Charts => map_chart_key(code),
        Focus::Table => map_table_key(code),
    }
}

fn map_search_key(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Enter => Some(Action::Confirm),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Char(c) => Some(Action::Input(c)),
        _ => None,
    }
}

fn map_chart_key(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('b') => Some(Action::SelectChart(0)),
        KeyCode::Char('l') => Some(Action::SelectChart(1)),
        KeyCode::Char('a') => Some(Action::SelectChart(2)),
        KeyCode::Char('p') => Some(Action::SelectChart(3)),
        KeyCode::Left => Some(Action::PrevChart),
        KeyCode::Right => Some(Action::NextChart),
        KeyCode::Char(c) if c.is_ascii_digit() => digit_index(c).map(Action::SelectChart),
        code => map_global_key(code),
    }
}

fn map_table_key(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::ColumnLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::ColumnRight),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::SortAtCursor),
        KeyCode::Char(c) if c.is_ascii_digit() => digit_index(c).map(Action::SortColumn),
        code => map_global_key(code),
    }
}

fn map_global_key(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('?') => Some(Action::OpenHelp),
        KeyCode::Char('/') => Some(Action::FocusSearch),
        _ => None,
    }
}

/// `1`..`9` map to indices 0..8. `0` is unbound.
fn digit_index(c: char) -> Option<usize> {
    c.to_digit(10)
        .filter(|d| *d > 0)
        .map(|d| d as usize - 1)
}
