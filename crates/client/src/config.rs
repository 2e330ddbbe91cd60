//! Client configuration structures and loaders.
use std::env;
use std::path::PathBuf;

/// Configuration for a single robot client invocation.
///
/// Loaded from the environment first; command-line arguments override it in
/// `main`.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    /// Raw command string used when none is given on the command line.
    pub command: Option<String>,
    pub output: OutputConfig,
    pub logging: LogConfig,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ROBOT_COMMAND` - Command string to run (default: none)
    /// - `ROBOT_SHOW_PATH` - Print every visited position (default: false)
    /// - `ROBOT_JSON` - Emit reports as JSON (default: false)
    /// - `ROBOT_LOG_TO_FILE` - Also write logs to a session file (default: false)
    /// - `ROBOT_LOG_DIR` - Directory for session logs (default: platform cache dir)
    /// - `ROBOT_SESSION_ID` - Session identifier for log files (default: timestamp)
    pub fn from_env() -> Self {
        let mut config = Self {
            command: env::var("ROBOT_COMMAND").ok().filter(|s| !s.is_empty()),
            ..Self::default()
        };

        if let Some(show) = read_env_bool("ROBOT_SHOW_PATH") {
            config.output.show_path = show;
        }
        if let Some(json) = read_env_bool("ROBOT_JSON") {
            config.output.json = json;
        }

        if let Some(enable) = read_env_bool("ROBOT_LOG_TO_FILE") {
            config.logging.log_to_file = enable;
        } else if env::var("ROBOT_LOG_TO_FILE").is_ok() {
            // Also accept just setting the variable without value as "true"
            config.logging.log_to_file = true;
        }
        config.logging.log_dir = env::var("ROBOT_LOG_DIR").ok().map(PathBuf::from);
        config.logging.session_id = env::var("ROBOT_SESSION_ID").ok();

        config
    }
}

/// How reports are printed.
#[derive(Clone, Debug, Default)]
pub struct OutputConfig {
    pub show_path: bool,
    pub json: bool,
}

/// Where logs go besides stderr.
#[derive(Clone, Debug, Default)]
pub struct LogConfig {
    pub log_to_file: bool,
    pub log_dir: Option<PathBuf>,
    pub session_id: Option<String>,
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
