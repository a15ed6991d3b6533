use crate::core::operation::{OperationTable, Operator};
use crate::domain::model::{NumeralSystem, Operand};
use crate::utils::error::{CalcError, Result};

/// A single binary operation whose operands share a numeral system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expression {
    operator: Operator,
    left: Operand,
    right: Operand,
}

impl Expression {
    /// Fails if `operator` is not registered in `table`, then if the operands
    /// were written in different numeral systems.
    pub fn new(table: &OperationTable, operator: char, left: Operand, right: Operand) -> Result<Self> {
        let operator = table
            .lookup(operator)
            .ok_or(CalcError::UnsupportedOperator { operator })?;

        if left.system() != right.system() {
            return Err(CalcError::MixedNumeralSystems);
        }

        Ok(Self {
            operator,
            left,
            right,
        })
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn system(&self) -> NumeralSystem {
        self.left.system()
    }

    pub fn is_roman(&self) -> bool {
        self.system() == NumeralSystem::Roman
    }

    /// Roman results must be at least 1; Arabic results are unrestricted.
    pub fn eval(&self) -> Result<i64> {
        let result = self.operator.apply(self.left.value(), self.right.value())?;

        if self.is_roman() && result < 1 {
            return Err(CalcError::NonRepresentableRomanResult { result });
        }

        Ok(result)
    }

    /// Evaluates and renders the result in the operands' numeral system.
    pub fn eval_to_string(&self) -> Result<String> {
        self.eval().map(|result| self.system().render(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expr(operator: char, left: Operand, right: Operand) -> Result<Expression> {
        Expression::new(&OperationTable::standard(), operator, left, right)
    }

    #[test]
    fn test_arabic_evaluation() {
        let e = expr('+', Operand::Arabic(2), Operand::Arabic(2)).unwrap();
        assert_eq!(e.eval().unwrap(), 4);
        assert_eq!(e.system(), NumeralSystem::Arabic);

        let e = expr('-', Operand::Arabic(1), Operand::Arabic(1)).unwrap();
        assert_eq!(e.eval().unwrap(), 0);

        let e = expr('-', Operand::Arabic(1), Operand::Arabic(5)).unwrap();
        assert_eq!(e.eval_to_string().unwrap(), "-4");
    }

    #[test]
    fn test_roman_evaluation() {
        let e = expr('*', Operand::Roman(10), Operand::Roman(10)).unwrap();
        assert_eq!(e.eval_to_string().unwrap(), "C");

        let e = expr('/', Operand::Roman(3), Operand::Roman(2)).unwrap();
        assert_eq!(e.eval_to_string().unwrap(), "I");
    }

    #[test]
    fn test_roman_result_must_be_positive() {
        let e = expr('-', Operand::Roman(1), Operand::Roman(1)).unwrap();
        assert!(matches!(
            e.eval(),
            Err(CalcError::NonRepresentableRomanResult { result: 0 })
        ));

        let e = expr('/', Operand::Roman(1), Operand::Roman(2)).unwrap();
        assert!(matches!(
            e.eval(),
            Err(CalcError::NonRepresentableRomanResult { result: 0 })
        ));
    }

    #[test]
    fn test_mixed_systems_rejected() {
        assert!(matches!(
            expr('+', Operand::Arabic(2), Operand::Roman(2)),
            Err(CalcError::MixedNumeralSystems)
        ));
    }

    #[test]
    fn test_unknown_operator_checked_before_systems() {
        assert!(matches!(
            expr('%', Operand::Arabic(2), Operand::Roman(2)),
            Err(CalcError::UnsupportedOperator { operator: '%' })
        ));
    }

    #[test]
    fn test_restricted_table() {
        let table = OperationTable::from_symbols(&["+".to_string()]).unwrap();
        assert!(Expression::new(&table, '+', Operand::Arabic(1), Operand::Arabic(1)).is_ok());
        assert!(matches!(
            Expression::new(&table, '*', Operand::Arabic(1), Operand::Arabic(1)),
            Err(CalcError::UnsupportedOperator { operator: '*' })
        ));
    }
}
