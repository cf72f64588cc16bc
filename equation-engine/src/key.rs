// Calculator Keys
// The closed alphabet of symbols a calculator surface can submit

use std::fmt;

/// Arithmetic operators on the four-function keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add, // +
    Sub, // − (U+2212, not the ASCII hyphen)
    Mul, // x
    Div, // /
}

impl BinaryOp {
    /// Operator for a canonical keypad symbol
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(BinaryOp::Add),
            '−' => Some(BinaryOp::Sub),
            'x' => Some(BinaryOp::Mul),
            '/' => Some(BinaryOp::Div),
            _ => None,
        }
    }

    /// Canonical keypad symbol
    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Sub => '−',
            BinaryOp::Mul => 'x',
            BinaryOp::Div => '/',
        }
    }

    /// Apply the operator to two operands
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            BinaryOp::Add => lhs + rhs,
            BinaryOp::Sub => lhs - rhs,
            BinaryOp::Mul => lhs * rhs,
            BinaryOp::Div => lhs / rhs,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Keys recognized by the equation engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Digit 0 through 9
    Digit(u8),
    /// Decimal point
    Point,
    /// One of the four arithmetic operators
    Op(BinaryOp),
    /// Equals, which evaluates and never appends
    Equals,
}

impl Key {
    /// Map a canonical keypad symbol to its key. Anything outside the
    /// alphabet maps to `None` and never reaches the engine.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Key::Digit(c as u8 - b'0')),
            '.' => Some(Key::Point),
            '=' => Some(Key::Equals),
            _ => BinaryOp::from_char(c).map(Key::Op),
        }
    }

    /// The symbol this key contributes to equation text
    pub fn symbol(self) -> char {
        match self {
            Key::Digit(d) => (b'0' + d) as char,
            Key::Point => '.',
            Key::Op(op) => op.symbol(),
            Key::Equals => '=',
        }
    }

    /// True for the four arithmetic operator keys
    pub fn is_operator(self) -> bool {
        matches!(self, Key::Op(_))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
