// Equation Engine
// Owns the equation text and the consecutive-equals counter; every key
// press funnels through one entry point

use crate::key::{BinaryOp, Key};
use crate::split::{parse_operation, trailing_term};

/// Single-operation calculator state machine.
///
/// The engine buffers equation text of the form `term operator term` and
/// folds each submitted key into it. Invalid keys are ignored, an operator
/// or equals on a complete equation evaluates it first, and two equals in
/// a row clear the display. Every failure mode is absorbed here; `press`
/// always returns the text a display should show.
#[derive(Debug, Clone, Default)]
pub struct EquationEngine {
    equation: String,
    equals_count: u8,
}

impl EquationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine seeded with existing equation text
    pub fn with_equation(equation: impl Into<String>) -> Self {
        Self {
            equation: equation.into(),
            equals_count: 0,
        }
    }

    /// Current equation text, exactly as a display should render it
    pub fn equation(&self) -> &str {
        &self.equation
    }

    /// True when the equation holds one operator with a numeric term on
    /// each side
    pub fn is_complete(&self) -> bool {
        parse_operation(&self.equation).is_some()
    }

    /// Submit one key and return the equation text after it is applied.
    ///
    /// Order matters here: validity first (a rejected key changes nothing,
    /// not even the equals counter), then the double-equals clear, then
    /// evaluation, then append. Equals is never appended.
    pub fn press(&mut self, key: Key) -> &str {
        if !self.is_valid(key) {
            return &self.equation;
        }

        if self.double_equals(key) {
            self.equation.clear();
            return &self.equation;
        }

        if matches!(key, Key::Op(_) | Key::Equals) {
            if let Some(operation) = parse_operation(&self.equation) {
                self.equation = operation.evaluate().to_string();
            }
        }

        if key == Key::Equals {
            return &self.equation;
        }

        self.equation.push(key.symbol());
        &self.equation
    }

    /// A key is rejected when it would stack a second operator or put a
    /// second decimal point in the current term
    fn is_valid(&self, key: Key) -> bool {
        match key {
            Key::Op(_) => !self.ends_with_operator(),
            Key::Point => !trailing_term(&self.equation).contains('.'),
            _ => true,
        }
    }

    fn ends_with_operator(&self) -> bool {
        self.equation
            .chars()
            .last()
            .and_then(BinaryOp::from_char)
            .is_some()
    }

    /// Track consecutive equals; the second in a row clears the display
    fn double_equals(&mut self, key: Key) -> bool {
        if key == Key::Equals {
            self.equals_count += 1;
        } else {
            self.equals_count = 0;
        }

        if self.equals_count >= 2 {
            self.equals_count = 0;
            true
        } else {
            false
        }
    }
}
