/// Config files looked up, in order, when `--config` is not given.
pub const DEFAULT_CONFIG_FILES: [&str; 2] = ["log_analyzer.toml", "log_analyzer.json"];
pub const DEFAULT_LOG_DIR: &str = "./log";
pub const DEFAULT_REPORT_DIR: &str = "./reports";
pub const DEFAULT_REPORT_SIZE: usize = 100;
