use crate::events::EventHandler;
use crate::ui;

use color_eyre::Result;
use equation_engine::{EquationEngine, Key};
use ratatui::DefaultTerminal;

// =============================================================================
// Application
// =============================================================================

pub struct App {
    pub engine: EquationEngine,
    pub last_key: Option<Key>,
    pub should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            engine: EquationEngine::new(),
            last_key: None,
            should_quit: false,
        }
    }

    pub fn run(&mut self, mut terminal: DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    /// Forward a key to the engine and remember it for the keypad highlight
    pub fn press(&mut self, key: Key) {
        self.engine.press(key);
        self.last_key = Some(key);
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
