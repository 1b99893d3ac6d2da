//! Formatting and layout helpers shared by the views.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Placeholder for an aggregate with nothing to aggregate.
pub const EMPTY_STAT: &str = "—";

/// `12345` -> `"12,345"`.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, c) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

pub fn format_optional_percent(value: Option<f64>) -> String {
    value.map(format_percent).unwrap_or_else(|| EMPTY_STAT.to_string())
}

/// A rectangle of `percent_x` by `percent_y` centred in `area`.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(12345), "12,345");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(12.345), "12.3%");
        assert_eq!(format_percent(-4.0), "-4.0%");
        assert_eq!(format_optional_percent(None), "—");
        assert_eq!(format_optional_percent(Some(50.0)), "50.0%");
    }

    #[test]
    fn test_centered_rect_is_inside() {
        let area = Rect::new(0, 0, 100, 40);
        let inner = centered_rect(60, 50, area);
        assert!(inner.x >= area.x && inner.right() <= area.right());
        assert!(inner.y >= area.y && inner.bottom() <= area.bottom());
        assert_eq!(inner.width, 60);
        assert_eq!(inner.height, 20);
    }
}
