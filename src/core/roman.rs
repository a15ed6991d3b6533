use crate::utils::error::{CalcError, Result};

const INT_TO_ROMAN: [(i64, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

fn digit_value(digit: char) -> Option<i64> {
    match digit {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

/// Converts a Roman numeral to its integer value.
///
/// Scans right to left: a digit smaller than the largest one seen so far is
/// subtracted, anything else is added. Well-formedness is not checked, so
/// `IIII` gives 4 and `IC` gives 99. The empty string gives 0.
pub fn roman_to_int(s: &str) -> Result<i64> {
    let mut sum: i64 = 0;
    let mut greatest: i64 = 0;

    for digit in s.chars().rev() {
        let value = digit_value(digit).ok_or(CalcError::InvalidRomanDigit { digit })?;

        if value < greatest {
            sum -= value;
            continue;
        }

        greatest = value;
        sum += value;
    }

    Ok(sum)
}

/// Greedy conversion to Roman digits. Non-positive input yields "".
pub fn int_to_roman(mut number: i64) -> String {
    let mut roman = String::new();

    for (value, digits) in INT_TO_ROMAN {
        while number >= value {
            roman.push_str(digits);
            number -= value;
        }
    }

    roman
}
