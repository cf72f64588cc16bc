use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use equation_engine::{BinaryOp, Key};

use crate::app::App;

pub trait EventHandler {
    fn handle_events(&mut self) -> Result<()>;
    fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()>;
}

impl EventHandler for App {
    fn handle_events(&mut self) -> Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event)?
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            code => {
                if let Some(key) = calculator_key(code) {
                    self.press(key);
                }
            }
        }
        Ok(())
    }
}

/// Map a terminal key to a calculator key. Canonical keypad symbols go
/// through `Key::from_char`; the common keyboard spellings of the
/// operators are accepted as aliases. Everything else is ignored.
pub fn calculator_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Enter => Some(Key::Equals),
        KeyCode::Char('-') => Some(Key::Op(BinaryOp::Sub)),
        KeyCode::Char('*') | KeyCode::Char('×') => Some(Key::Op(BinaryOp::Mul)),
        KeyCode::Char('÷') => Some(Key::Op(BinaryOp::Div)),
        KeyCode::Char(c) => Key::from_char(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_symbols_map_through() {
        assert_eq!(calculator_key(KeyCode::Char('7')), Some(Key::Digit(7)));
        assert_eq!(calculator_key(KeyCode::Char('.')), Some(Key::Point));
        assert_eq!(
            calculator_key(KeyCode::Char('x')),
            Some(Key::Op(BinaryOp::Mul))
        );
        assert_eq!(
            calculator_key(KeyCode::Char('−')),
            Some(Key::Op(BinaryOp::Sub))
        );
        assert_eq!(calculator_key(KeyCode::Char('=')), Some(Key::Equals));
    }

    #[test]
    fn test_keyboard_aliases() {
        assert_eq!(
            calculator_key(KeyCode::Char('-')),
            Some(Key::Op(BinaryOp::Sub))
        );
        assert_eq!(
            calculator_key(KeyCode::Char('*')),
            Some(Key::Op(BinaryOp::Mul))
        );
        assert_eq!(
            calculator_key(KeyCode::Char('×')),
            Some(Key::Op(BinaryOp::Mul))
        );
        assert_eq!(
            calculator_key(KeyCode::Char('÷')),
            Some(Key::Op(BinaryOp::Div))
        );
        assert_eq!(calculator_key(KeyCode::Enter), Some(Key::Equals));
    }

    #[test]
    fn test_unrelated_keys_are_ignored() {
        assert_eq!(calculator_key(KeyCode::Char('a')), None);
        assert_eq!(calculator_key(KeyCode::Tab), None);
        assert_eq!(calculator_key(KeyCode::Backspace), None);
    }
}
