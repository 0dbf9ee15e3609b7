use std::path::PathBuf;

pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing value for {0}")]
    MissingValue(String),
}

/// Command-line settings for the terminal session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Directory that exports are written into.
    pub save_dir: PathBuf,
    /// Save to import before the first prompt.
    pub load_path: Option<PathBuf>,
    /// Tracing filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            save_dir: PathBuf::from("."),
            load_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl SessionConfig {
    /// Parse flags from argv. The first element is the program name and is
    /// skipped; unknown arguments are ignored.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut iter = args.into_iter().skip(1);
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--save-dir" => config.save_dir = PathBuf::from(value_for(&arg, iter.next())?),
                "--load" => config.load_path = Some(PathBuf::from(value_for(&arg, iter.next())?)),
                "--log" => config.log_filter = value_for(&arg, iter.next())?,
                _ => {}
            }
        }
        Ok(config)
    }
}

fn value_for(flag: &str, value: Option<String>) -> Result<String, ConfigError> {
    value.ok_or_else(|| ConfigError::MissingValue(flag.to_string()))
}
