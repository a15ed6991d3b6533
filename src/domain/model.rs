use std::fmt;

use crate::core::roman::int_to_roman;

/// How an operand was written, and how a result is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumeralSystem {
    Arabic,
    Roman,
}

impl NumeralSystem {
    /// Renders `value` in this system. Roman rendering of a non-positive
    /// value is empty; evaluation rejects those results before they get here.
    pub fn render(self, value: i64) -> String {
        match self {
            Self::Arabic => value.to_string(),
            Self::Roman => int_to_roman(value),
        }
    }
}

impl fmt::Display for NumeralSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arabic => write!(f, "arabic"),
            Self::Roman => write!(f, "roman"),
        }
    }
}

/// A parsed operand. The payload is the integer magnitude regardless of how
/// the token was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Arabic(i64),
    Roman(i64),
}

impl Operand {
    pub fn value(self) -> i64 {
        match self {
            Self::Arabic(v) | Self::Roman(v) => v,
        }
    }

    pub fn system(self) -> NumeralSystem {
        match self {
            Self::Arabic(_) => NumeralSystem::Arabic,
            Self::Roman(_) => NumeralSystem::Roman,
        }
    }

    pub fn is_roman(self) -> bool {
        matches!(self, Self::Roman(_))
    }
}

/// One scanned input line, before any of its tokens are interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionLine {
    pub left: String,
    pub operator: char,
    pub right: String,
}
