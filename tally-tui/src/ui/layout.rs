use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Calculator layout: header, display, keypad, footer
pub fn create_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Display
            Constraint::Min(12),   // Keypad
            Constraint::Length(3), // Footer
        ])
        .split(area)
        .to_vec()
}
