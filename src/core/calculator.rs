use std::io::{BufRead, Write};

use crate::core::expression::Expression;
use crate::core::operand::parse_operand;
use crate::core::operation::OperationTable;
use crate::core::scanner::scan_line;
use crate::utils::error::{CalcError, Result};

pub struct Calculator {
    operations: OperationTable,
}

impl Calculator {
    pub fn new(operations: OperationTable) -> Self {
        Self { operations }
    }

    /// Scans, parses and evaluates one input line, returning the rendered
    /// result.
    pub fn evaluate_line(&self, line: &str) -> Result<String> {
        let scanned = scan_line(line)?;
        let left = parse_operand(&scanned.left)?;
        let right = parse_operand(&scanned.right)?;
        let expression = Expression::new(&self.operations, scanned.operator, left, right)?;

        tracing::debug!(
            "Evaluating {} {} {} as {}",
            left.value(),
            expression.operator(),
            right.value(),
            expression.system()
        );

        expression.eval_to_string()
    }

    /// Reads one expression per line until end of input. The first failing
    /// line ends the session with its error.
    pub fn repl<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> Result<()> {
        let mut line = String::new();
        let mut evaluated = 0usize;

        loop {
            writeln!(output, "input:").map_err(CalcError::Write)?;
            output.flush().map_err(CalcError::Write)?;

            line.clear();
            let read = input.read_line(&mut line).map_err(CalcError::Read)?;
            if read == 0 {
                break;
            }

            let result = self.evaluate_line(&line)?;
            write!(output, "output:\n{}\n", result).map_err(CalcError::Write)?;
            evaluated += 1;
        }

        tracing::info!("End of input after {} expressions", evaluated);
        writeln!(output, "exit").map_err(CalcError::Write)?;
        output.flush().map_err(CalcError::Write)?;

        Ok(())
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(OperationTable::standard())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_line() {
        let calc = Calculator::default();
        assert_eq!(calc.evaluate_line("2 + 2\n").unwrap(), "4");
        assert_eq!(calc.evaluate_line("II + II\n").unwrap(), "IV");
        assert_eq!(calc.evaluate_line("X * X\n").unwrap(), "C");
        assert_eq!(calc.evaluate_line("1 - 1\n").unwrap(), "0");
    }

    #[test]
    fn test_evaluate_line_errors() {
        let calc = Calculator::default();
        assert!(matches!(
            calc.evaluate_line("2.5 + 2\n"),
            Err(CalcError::InvalidOperand { .. })
        ));
        assert!(matches!(
            calc.evaluate_line("2 + II\n"),
            Err(CalcError::MixedNumeralSystems)
        ));
        assert!(matches!(
            calc.evaluate_line("I - I\n"),
            Err(CalcError::NonRepresentableRomanResult { .. })
        ));
    }

    #[test]
    fn test_repl_on_empty_input() {
        let calc = Calculator::default();
        let mut output = Vec::new();
        calc.repl(std::io::Cursor::new(""), &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "input:\nexit\n");
    }
}
