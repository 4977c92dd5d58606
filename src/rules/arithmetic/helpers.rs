//! Operator semantics and result rendering, kept separate from pattern
//! matching so they stay unit-testable on their own.

/// Binary operator recognized by the extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    /// Apply the operator to two operands. Division by zero must be screened
    /// by the caller; it gets a dedicated reply, not a computed value.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            BinOp::Add => lhs + rhs,
            BinOp::Sub => lhs - rhs,
            BinOp::Mul => lhs * rhs,
            BinOp::Div => lhs / rhs,
        }
    }
}

/// Parse a captured numeric literal into `f64`. The pattern's character class
/// already guarantees a parseable shape; failure here is handled as
/// "pattern did not match" rather than an error.
pub(crate) fn parse_operand(s: &str) -> Option<f64> {
    s.parse::<f64>().ok()
}

/// Render a numeric result: integral values print without a fractional part,
/// everything else keeps its natural decimal form.
pub(crate) fn render_value(v: f64) -> String {
    if v.fract() == 0.0 {
        // whole number: print without decimal point
        format!("{}", v as i64)
    } else {
        format!("{}", v)
    }
}
