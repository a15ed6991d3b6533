/// Source of the settings the calculator binary needs at startup.
pub trait ConfigProvider {
    /// Operator symbols to register. `None` means the standard four.
    fn enabled_operators(&self) -> Option<&[String]>;

    /// `EnvFilter` directive overriding the default log filter.
    fn log_directive(&self) -> Option<&str>;

    fn json_logs(&self) -> bool;
}
