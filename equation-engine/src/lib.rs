// Equation Engine Library
// Core of the tally calculator: key alphabet, equation splitting, evaluation

pub mod engine;
pub mod key;
pub mod split;

// Re-export commonly used types
pub use engine::EquationEngine;
pub use key::{BinaryOp, Key};
pub use split::{parse_operation, pieces, trailing_term, Operation};
