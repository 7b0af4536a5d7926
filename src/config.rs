use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a non-negative integer, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },
    #[error("{name} is too large, got {value}")]
    OutOfRange { name: &'static str, value: u64 },
    #[error("unknown storage kind '{0}', expected 'sqlite' or 'memory'")]
    UnknownStorage(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageKind {
    Sqlite,
    Memory,
}
impl FromStr for StorageKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sqlite" => Ok(StorageKind::Sqlite),
            "memory" => Ok(StorageKind::Memory),
            other => Err(ConfigError::UnknownStorage(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: String,
    pub storage: StorageKind,
    pub idle_timeout: chrono::Duration,
    pub thinking_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: "db.sqlite".to_string(),
            storage: StorageKind::Sqlite,
            idle_timeout: chrono::Duration::seconds(60),
            thinking_delay: Duration::from_millis(1000),
        }
    }
}

impl Config {
    /// Reads the process environment. Call `dotenv()` first to pick up `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup("ENGLISHFLOW_DB") {
            config.db_path = path;
        }
        if let Some(kind) = lookup("ENGLISHFLOW_STORAGE") {
            config.storage = kind.parse()?;
        }
        if let Some(secs) = parse_number(&lookup, "ENGLISHFLOW_IDLE_TIMEOUT_SECS")? {
            // Checked here so session arithmetic can't overflow later
            config.idle_timeout = chrono::Duration::from_std(Duration::from_secs(secs))
                .map_err(|_| ConfigError::OutOfRange {
                    name: "ENGLISHFLOW_IDLE_TIMEOUT_SECS",
                    value: secs,
                })?;
        }
        if let Some(ms) = parse_number(&lookup, "ENGLISHFLOW_THINKING_DELAY_MS")? {
            config.thinking_delay = Duration::from_millis(ms);
        }

        Ok(config)
    }
}

fn parse_number<F>(lookup: &F, name: &'static str) -> Result<Option<u64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { name, value }),
    }
}
