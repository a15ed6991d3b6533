use clap::Parser;
use roman_calc::core::ConfigProvider;
use roman_calc::utils::{logger, validation::Validate};
use roman_calc::{CalcError, Calculator, CliConfig, OperationTable, TomlConfig};

fn load_config(cli: &CliConfig) -> Result<Option<TomlConfig>, CalcError> {
    let Some(path) = &cli.config else {
        return Ok(None);
    };

    let config = TomlConfig::from_file(path)?;
    config.validate()?;
    Ok(Some(config))
}

fn fatal(e: &CalcError) -> ! {
    tracing::error!("Fatal {:?} error: {}", e.category(), e);
    eprintln!("fatal error: {}", e);
    std::process::exit(e.exit_code());
}

fn main() {
    let cli = CliConfig::parse();

    // The logger isn't up yet, so config errors go straight to stderr.
    let file_config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("fatal error: {}", e);
            std::process::exit(e.exit_code());
        }
    };
    let provider: &dyn ConfigProvider = match &file_config {
        Some(config) => config,
        None => &cli,
    };

    if provider.json_logs() {
        logger::init_json_logger(cli.verbose, provider.log_directive());
    } else {
        logger::init_cli_logger(cli.verbose, provider.log_directive());
    }

    let operations = match provider.enabled_operators() {
        Some(symbols) => OperationTable::from_symbols(symbols).unwrap_or_else(|e| fatal(&e)),
        None => OperationTable::standard(),
    };
    tracing::debug!("Registered operators: {:?}", operations.symbols());

    let calculator = Calculator::new(operations);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    if let Err(e) = calculator.repl(stdin.lock(), stdout.lock()) {
        fatal(&e);
    }
}
