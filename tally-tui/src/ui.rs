pub mod components;
pub mod layout;

use ratatui::Frame;

use crate::app::App;

pub fn render(app: &App, frame: &mut Frame) {
    let chunks = layout::create_layout(frame.area());

    components::render_header("tally", frame, chunks[0]);
    components::render_display(
        app.engine.equation(),
        app.engine.is_complete(),
        frame,
        chunks[1],
    );
    components::render_keypad(app.last_key, frame, chunks[2]);
    components::render_footer(
        "0-9 . + − x /: Keys | Enter or =: Evaluate (twice clears) | q/Esc: Quit",
        frame,
        chunks[3],
    );
}
