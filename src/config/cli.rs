use crate::core::ConfigProvider;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "roman-calc")]
#[command(about = "Line-oriented calculator for arabic and roman numerals")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

// Without a config file every setting is the default.
impl ConfigProvider for CliConfig {
    fn enabled_operators(&self) -> Option<&[String]> {
        None
    }

    fn log_directive(&self) -> Option<&str> {
        None
    }

    fn json_logs(&self) -> bool {
        false
    }
}
