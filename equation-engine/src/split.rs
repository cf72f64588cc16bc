// Equation Splitting
// One splitter feeds the completeness check, the evaluator, and the
// decimal-point validation so they can never disagree on term boundaries

use crate::key::BinaryOp;

/// A complete binary operation parsed out of equation text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Operation {
    pub lhs: f64,
    pub op: BinaryOp,
    pub rhs: f64,
}

impl Operation {
    /// Apply the operator to the operands
    pub fn evaluate(self) -> f64 {
        self.op.apply(self.lhs, self.rhs)
    }
}

/// Split equation text on operator symbols, keeping each operator as its
/// own piece in position and trimming whitespace from every piece. Empty
/// text yields a single empty piece.
pub fn pieces(equation: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;

    for (idx, ch) in equation.char_indices() {
        if BinaryOp::from_char(ch).is_some() {
            out.push(equation[start..idx].trim());
            out.push(&equation[idx..idx + ch.len_utf8()]);
            start = idx + ch.len_utf8();
        }
    }
    out.push(equation[start..].trim());

    out
}

/// Parse equation text into a complete operation.
///
/// Complete means exactly one operator with a numeric term on each side.
/// An empty left term counts as zero, so an operator entered against an
/// empty display still forms an operation.
pub fn parse_operation(equation: &str) -> Option<Operation> {
    let split = pieces(equation);
    let &[lhs, op, rhs] = split.as_slice() else {
        return None;
    };

    let op = op.chars().next().and_then(BinaryOp::from_char)?;
    let lhs = if lhs.is_empty() { 0.0 } else { parse_term(lhs)? };
    let rhs = parse_term(rhs)?;

    Some(Operation { lhs, op, rhs })
}

/// The text after the last operator, or the whole equation when none is
/// present
pub fn trailing_term(equation: &str) -> &str {
    pieces(equation).last().copied().unwrap_or("")
}

fn parse_term(term: &str) -> Option<f64> {
    if term.is_empty() {
        return None;
    }
    term.parse::<f64>().ok().filter(|v| !v.is_nan())
}
