use crate::utils::error::{CalcError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Operator symbols a config file may enable.
pub const KNOWN_OPERATORS: [&str; 4] = ["+", "-", "*", "/"];

pub fn validate_operator_symbol(field_name: &str, symbol: &str) -> Result<char> {
    let mut chars = symbol.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: symbol.to_string(),
            reason: "Operator must be a single character".to_string(),
        });
    };

    if !KNOWN_OPERATORS.contains(&symbol) {
        return Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: symbol.to_string(),
            reason: format!(
                "Unsupported operator. Valid operators: {}",
                KNOWN_OPERATORS.join(" ")
            ),
        });
    }

    Ok(c)
}

pub fn validate_operator_list(field_name: &str, symbols: &[String]) -> Result<Vec<char>> {
    if symbols.is_empty() {
        return Err(CalcError::ConfigValidationError {
            field: field_name.to_string(),
            message: "At least one operator must be enabled".to_string(),
        });
    }

    let mut seen = HashSet::new();
    let mut operators = Vec::with_capacity(symbols.len());
    for symbol in symbols {
        let c = validate_operator_symbol(field_name, symbol)?;
        if !seen.insert(c) {
            return Err(CalcError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: symbol.clone(),
                reason: "Operator listed more than once".to_string(),
            });
        }
        operators.push(c);
    }

    Ok(operators)
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
