use regex::Regex;
use std::sync::LazyLock;

use crate::domain::model::ExpressionLine;
use crate::utils::error::{CalcError, Result};

static TRIPLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\S+)\s+(\S+)\s+(\S+)\s*$").expect("triple pattern is valid")
});

/// Splits `<operand> <operator> <operand>` into its three parts.
pub fn scan_line(line: &str) -> Result<ExpressionLine> {
    let line = line.trim_end_matches(['\n', '\r']);

    if line.trim().is_empty() {
        return Err(CalcError::InputFormat {
            reason: "unexpected newline".to_string(),
        });
    }

    let caps = TRIPLE.captures(line).ok_or_else(|| CalcError::InputFormat {
        reason: format!(
            "expected \"<operand> <operator> <operand>\", got {:?} ({} tokens)",
            line,
            line.split_whitespace().count()
        ),
    })?;

    let mut operator = caps[2].chars();
    let (Some(op), None) = (operator.next(), operator.next()) else {
        return Err(CalcError::InputFormat {
            reason: format!("operator must be a single character, got {:?}", &caps[2]),
        });
    };

    Ok(ExpressionLine {
        left: caps[1].to_string(),
        operator: op,
        right: caps[3].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_well_formed_lines() {
        let line = scan_line("2 + 2\n").unwrap();
        assert_eq!(line.left, "2");
        assert_eq!(line.operator, '+');
        assert_eq!(line.right, "2");

        let line = scan_line("XIV   *  II\r\n").unwrap();
        assert_eq!(line.left, "XIV");
        assert_eq!(line.operator, '*');
        assert_eq!(line.right, "II");

        assert!(scan_line("2 + 2").is_ok());
    }

    #[test]
    fn test_scan_malformed_lines() {
        for input in ["\n", "   \n", "2 +\n", "2\n", "2 + 2 + 2\n", "2 ++ 2\n", "2+2\n"] {
            assert!(
                matches!(scan_line(input), Err(CalcError::InputFormat { .. })),
                "{input:?}"
            );
        }
    }
}
