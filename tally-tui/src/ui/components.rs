use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use equation_engine::Key;

/// Button grid of the calculator, row by row
const KEYPAD_ROWS: [[char; 4]; 4] = [
    ['7', '8', '9', '/'],
    ['4', '5', '6', 'x'],
    ['1', '2', '3', '−'],
    ['0', '.', '=', '+'],
];

pub fn render_header(title: &str, frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

/// Equation display. The text is shown verbatim, right aligned the way a
/// desk calculator reads; the border turns green once the equation is
/// ready to evaluate.
pub fn render_display(equation: &str, complete: bool, frame: &mut Frame, area: Rect) {
    let border_style = if complete {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let display = Paragraph::new(equation)
        .alignment(Alignment::Right)
        .style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Display")
                .border_style(border_style),
        );
    frame.render_widget(display, area);
}

/// The on-screen keypad, with the most recently pressed key highlighted
pub fn render_keypad(last_key: Option<Key>, frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for (symbols, row_area) in KEYPAD_ROWS.iter().zip(rows.iter()) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(*row_area);

        for (symbol, cell) in symbols.iter().zip(cells.iter()) {
            render_key_cell(*symbol, last_key, frame, *cell);
        }
    }
}

fn render_key_cell(symbol: char, last_key: Option<Key>, frame: &mut Frame, area: Rect) {
    let is_last = last_key.is_some_and(|k| k.symbol() == symbol);
    let style = if is_last {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let cell = Paragraph::new(symbol.to_string())
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(cell, area);
}

pub fn render_footer(text: &str, frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL).title("Help"));
    frame.render_widget(footer, area);
}
