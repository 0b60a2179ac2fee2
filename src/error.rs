use std::fmt;

/// Binary arithmetic operator that rejected its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinaryOp::Add => write!(f, "add"),
            BinaryOp::Sub => write!(f, "sub"),
            BinaryOp::Mul => write!(f, "mul"),
            BinaryOp::Div => write!(f, "div"),
        }
    }
}

/// Operand pairing of a binary operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operands {
    /// Augmented number with augmented number.
    Dual,
    /// Augmented number on the left, plain scalar on the right.
    DualScalar,
    /// Plain scalar on the left, augmented number on the right.
    ScalarDual,
}

impl fmt::Display for Operands {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operands::Dual => write!(f, "dual / dual"),
            Operands::DualScalar => write!(f, "dual / scalar"),
            Operands::ScalarDual => write!(f, "scalar / dual"),
        }
    }
}

/// Precondition violations detected before any arithmetic is performed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdError {
    /// The two operands live in design spaces of different dimension.
    #[error("{op}: design space mismatch ({lhs} vs {rhs} variables)")]
    DimensionMismatch { op: BinaryOp, lhs: usize, rhs: usize },

    /// A leaf was seeded at a slot outside `[0, space_dim)`.
    #[error("leaf index {index} out of range for a {space_dim}-dimensional design space")]
    IndexOutOfRange { index: usize, space_dim: usize },

    /// The divisor's value is exactly zero.
    #[error("division by zero ({operands})")]
    DivisionByZero { operands: Operands },

    /// An objective returned a value from a design space other than the
    /// one its inputs were seeded in.
    #[error("objective output has {found} design variables, expected {expected}")]
    OutputSpaceMismatch { expected: usize, found: usize },
}
