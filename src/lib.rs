pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use core::{calculator::Calculator, operation::OperationTable};
pub use domain::model::{NumeralSystem, Operand};
pub use utils::error::{CalcError, Result};
