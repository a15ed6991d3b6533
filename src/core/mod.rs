pub mod calculator;
pub mod expression;
pub mod operand;
pub mod operation;
pub mod roman;
pub mod scanner;

pub use crate::domain::model::{ExpressionLine, NumeralSystem, Operand};
pub use crate::domain::ports::ConfigProvider;
