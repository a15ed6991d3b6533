use std::collections::HashMap;
use std::fmt;

use crate::utils::error::{CalcError, Result};
use crate::utils::validation::validate_operator_list;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Applies the operation with checked `i64` arithmetic. Division truncates
    /// toward zero.
    pub fn apply(self, x: i64, y: i64) -> Result<i64> {
        let result = match self {
            Self::Add => x.checked_add(y),
            Self::Subtract => x.checked_sub(y),
            Self::Multiply => x.checked_mul(y),
            Self::Divide => {
                if y == 0 {
                    return Err(CalcError::DivisionByZero);
                }
                x.checked_div(y)
            }
        };

        result.ok_or(CalcError::Overflow {
            left: x,
            operator: self.symbol(),
            right: y,
        })
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Symbol to operation lookup. Built once, read-only afterwards.
#[derive(Debug, Clone)]
pub struct OperationTable {
    operations: HashMap<char, Operator>,
}

impl OperationTable {
    pub fn standard() -> Self {
        Self::from_operators(Operator::ALL)
    }

    pub fn from_operators(operators: impl IntoIterator<Item = Operator>) -> Self {
        Self {
            operations: operators.into_iter().map(|op| (op.symbol(), op)).collect(),
        }
    }

    /// Builds a table restricted to the configured symbols.
    pub fn from_symbols(symbols: &[String]) -> Result<Self> {
        let operators = validate_operator_list("operations.enabled", symbols)?
            .into_iter()
            .filter_map(Operator::from_symbol);
        Ok(Self::from_operators(operators))
    }

    pub fn lookup(&self, symbol: char) -> Option<Operator> {
        self.operations.get(&symbol).copied()
    }

    pub fn symbols(&self) -> Vec<char> {
        let mut symbols: Vec<char> = self.operations.keys().copied().collect();
        symbols.sort_unstable();
        symbols
    }
}

impl Default for OperationTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table() {
        let table = OperationTable::standard();
        assert_eq!(table.lookup('+'), Some(Operator::Add));
        assert_eq!(table.lookup('-'), Some(Operator::Subtract));
        assert_eq!(table.lookup('*'), Some(Operator::Multiply));
        assert_eq!(table.lookup('/'), Some(Operator::Divide));
        assert_eq!(table.lookup('%'), None);
        assert_eq!(table.symbols(), vec!['*', '+', '-', '/']);
    }

    #[test]
    fn test_apply() {
        assert_eq!(Operator::Add.apply(2, 2).unwrap(), 4);
        assert_eq!(Operator::Subtract.apply(1, 3).unwrap(), -2);
        assert_eq!(Operator::Multiply.apply(-4, 5).unwrap(), -20);
        assert_eq!(Operator::Divide.apply(7, 2).unwrap(), 3);
        assert_eq!(Operator::Divide.apply(-7, 2).unwrap(), -3);
    }

    #[test]
    fn test_apply_failures() {
        assert!(matches!(
            Operator::Divide.apply(1, 0),
            Err(CalcError::DivisionByZero)
        ));
        assert!(matches!(
            Operator::Add.apply(i64::MAX, 1),
            Err(CalcError::Overflow { operator: '+', .. })
        ));
        assert!(matches!(
            Operator::Divide.apply(i64::MIN, -1),
            Err(CalcError::Overflow { .. })
        ));
    }

    #[test]
    fn test_from_symbols() {
        let table = OperationTable::from_symbols(&["+".to_string()]).unwrap();
        assert_eq!(table.lookup('+'), Some(Operator::Add));
        assert_eq!(table.lookup('*'), None);

        assert!(OperationTable::from_symbols(&["^".to_string()]).is_err());
        assert!(OperationTable::from_symbols(&[]).is_err());
    }
}
