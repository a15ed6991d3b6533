use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("bad input: {reason}")]
    InputFormat { reason: String },

    #[error("bad input: {0}")]
    Read(#[source] std::io::Error),

    #[error("output failed: {0}")]
    Write(#[source] std::io::Error),

    #[error("{digit} is not a roman number")]
    InvalidRomanDigit { digit: char },

    #[error("bad operand: {token:?} is not an arabic or roman integer number")]
    InvalidOperand { token: String },

    #[error("bad expression: no such operator {operator:?}")]
    UnsupportedOperator { operator: char },

    #[error("bad expression: operands from different numeric systems")]
    MixedNumeralSystems,

    #[error("bad evaluation: result of operation {result} cannot be expressed by roman letters")]
    NonRepresentableRomanResult { result: i64 },

    #[error("bad evaluation: division by zero")]
    DivisionByZero,

    #[error("bad evaluation: integer overflow computing {left} {operator} {right}")]
    Overflow { left: i64, operator: char, right: i64 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value {value:?} for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Operand,
    Expression,
    Evaluation,
    Config,
}

impl CalcError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InputFormat { .. } | Self::Read(_) | Self::Write(_) => ErrorCategory::Input,
            Self::InvalidRomanDigit { .. } | Self::InvalidOperand { .. } => ErrorCategory::Operand,
            Self::UnsupportedOperator { .. } | Self::MixedNumeralSystems => {
                ErrorCategory::Expression
            }
            Self::NonRepresentableRomanResult { .. }
            | Self::DivisionByZero
            | Self::Overflow { .. } => ErrorCategory::Evaluation,
            Self::IoError(_)
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Config,
        }
    }

    /// Process exit code for a run that ended with this error.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Config => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
