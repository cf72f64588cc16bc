mod app;
mod events;
mod ui;

use app::App;
use color_eyre::Result;

pub fn run() -> Result<()> {
    let terminal = ratatui::init();
    let result = App::new().run(terminal);
    ratatui::restore();
    result
}
