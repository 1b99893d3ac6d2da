use hub_core::{ChartKind, Variant};
use hub_test_utils::fixtures::{items, seeded_batch};
use hub_test_utils::ManualClock;
use hub_tui::config::TuiConfig;
use hub_tui::keys::Action;
use hub_tui::state::App;
use hub_tui::views::render_view;
use ratatui::{backend::TestBackend, Terminal};

fn app(variant: Variant) -> App {
    App::new(TuiConfig {
        variant,
        ..TuiConfig::default()
    })
}

fn draw(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
    terminal
        .draw(|f| render_view(f, app))
        .expect("frame renders");
    let buffer = terminal.backend().buffer();
    let mut screen = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            screen.push_str(buffer.get(x, y).symbol());
        }
        screen.push('\n');
    }
    screen
}

#[test]
fn renders_loading_state() {
    let screen = draw(&app(Variant::Cyber), 120, 40);
    assert!(screen.contains("Cyber Analytics Hub"));
    assert!(screen.contains("Loading records"));
    assert!(screen.contains("Loading data"));
}

#[test]
fn renders_loaded_cyber_dashboard() {
    let mut app = app(Variant::Cyber);
    app.on_loaded(seeded_batch(Variant::Cyber, 20, 3));
    let screen = draw(&app, 140, 48);
    assert!(screen.contains("Dataset 1"));
    assert!(screen.contains("Total Value"));
    assert!(screen.contains("Avg Engagement"));
    assert!(screen.contains("Peak Growth"));
    assert!(screen.contains("Id ↑"));
    assert!(screen.contains("7-day Trend"));
}

#[test]
fn renders_empty_result_without_panicking() {
    let mut clock = ManualClock::new();
    let mut app = app(Variant::Cyber);
    app.on_loaded(seeded_batch(Variant::Cyber, 20, 3));
    app.dashboard.set_query("zzz_no_match", clock.now());
    app.on_tick(clock.advance_ms(300));

    for kind in ChartKind::ALL {
        app.dashboard.select_chart(kind);
        let screen = draw(&app, 120, 40);
        assert!(screen.contains("No records match"));
        assert!(screen.contains("No matching records"));
        assert!(screen.contains("—"));
    }
}

#[test]
fn renders_every_chart_kind() {
    let mut app = app(Variant::Cyber);
    app.on_loaded(seeded_batch(Variant::Cyber, 20, 8));
    for kind in ChartKind::ALL {
        app.dashboard.select_chart(kind);
        let screen = draw(&app, 140, 48);
        assert!(screen.contains(&format!("{} Chart", kind.label())));
    }
}

#[test]
fn renders_pie_legend() {
    let mut app = app(Variant::Cyber);
    app.on_loaded(items(3));
    app.dashboard.select_chart(ChartKind::Pie);
    let screen = draw(&app, 140, 48);
    assert!(screen.contains("■ Item 1"));
    assert!(screen.contains("(50.0%)"));
}

#[test]
fn renders_classic_without_stats_or_selector() {
    let mut app = app(Variant::Classic);
    app.on_loaded(items(20));
    let screen = draw(&app, 120, 40);
    assert!(screen.contains("Data Analysis Dashboard"));
    assert!(screen.contains("Item 1"));
    assert!(screen.contains("Bar Chart"));
    assert!(!screen.contains("Total Value"));
    assert!(!screen.contains("Growth"));
}

#[test]
fn renders_help_modal() {
    let mut app = app(Variant::Cyber);
    app.on_loaded(items(5));
    app.apply(Action::OpenHelp, ManualClock::new().now());
    let screen = draw(&app, 120, 40);
    assert!(screen.contains("Keybindings"));
}

#[test]
fn renders_in_tiny_terminals() {
    let mut app = app(Variant::Cyber);
    draw(&app, 10, 5);
    app.on_loaded(seeded_batch(Variant::Cyber, 20, 1));
    for kind in ChartKind::ALL {
        app.dashboard.select_chart(kind);
        draw(&app, 10, 5);
        draw(&app, 30, 12);
        draw(&app, 60, 24);
    }
}
