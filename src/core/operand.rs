use std::str::FromStr;

use crate::core::roman::roman_to_int;
use crate::domain::model::Operand;
use crate::utils::error::{CalcError, Result};

/// Classifies `token` as Roman or Arabic. Roman is tried first.
pub fn parse_operand(token: &str) -> Result<Operand> {
    if let Ok(value) = roman_to_int(token) {
        return Ok(Operand::Roman(value));
    }

    if let Ok(value) = token.parse::<i64>() {
        return Ok(Operand::Arabic(value));
    }

    Err(CalcError::InvalidOperand {
        token: token.to_string(),
    })
}

impl FromStr for Operand {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        parse_operand(s)
    }
}
