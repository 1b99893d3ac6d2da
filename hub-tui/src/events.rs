//! Event types for the TUI event loop.

use crossterm::event::KeyEvent;
use hub_core::Record;

#[derive(Debug, Clone)]
pub enum TuiEvent {
    Input(KeyEvent),
    Resize { width: u16, height: u16 },
    /// The simulated fetch resolved with the full batch.
    Loaded(Vec<Record>),
}
