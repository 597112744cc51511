//! Driver configuration read from environment variables.

use orderstore_core::default_log_level;
use std::env;
use std::path::PathBuf;

pub const DB_PATH_VAR: &str = "ORDERSTORE_DB_PATH";
pub const LOG_LEVEL_VAR: &str = "ORDERSTORE_LOG_LEVEL";
pub const LOG_DIR_VAR: &str = "ORDERSTORE_LOG_DIR";
pub const PROVISION_SCHEMA_VAR: &str = "ORDERSTORE_PROVISION_SCHEMA";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// SQLite file to open; an in-memory database when unset.
    pub db_path: Option<PathBuf>,
    pub log_level: String,
    /// Absolute directory for rolling log files; logging is off when unset.
    pub log_dir: Option<String>,
    /// Create the `orders` table on a file database before running.
    pub provision_schema: bool,
}

impl CliConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let provision_schema = match non_empty(PROVISION_SCHEMA_VAR) {
            Some(value) => parse_flag(&value).ok_or_else(|| {
                format!("{PROVISION_SCHEMA_VAR}: expected true|false, got `{value}`")
            })?,
            None => false,
        };

        Ok(Self {
            db_path: non_empty(DB_PATH_VAR).map(PathBuf::from),
            log_level: non_empty(LOG_LEVEL_VAR)
                .unwrap_or_else(|| default_log_level().to_string()),
            log_dir: non_empty(LOG_DIR_VAR),
            provision_schema,
        })
    }
}

impl CliConfig {
    /// `(level, log_dir)` when file logging is configured. Without a log
    /// directory the driver does not log at all.
    pub fn file_logging(&self) -> Option<(&str, &str)> {
        self.log_dir
            .as_deref()
            .map(|log_dir| (self.log_level.as_str(), log_dir))
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{CliConfig, DB_PATH_VAR, LOG_DIR_VAR, LOG_LEVEL_VAR, PROVISION_SCHEMA_VAR};
    use orderstore_core::default_log_level;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn config_from(pairs: &[(&str, &str)]) -> Result<CliConfig, String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        CliConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_to_in_memory_database_without_logging() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.db_path, None);
        assert_eq!(config.log_level, default_log_level());
        assert_eq!(config.log_dir, None);
        assert!(!config.provision_schema);
    }

    #[test]
    fn reads_every_variable() {
        let config = config_from(&[
            (DB_PATH_VAR, "/var/lib/orders.db"),
            (LOG_LEVEL_VAR, "warn"),
            (LOG_DIR_VAR, "/var/log/orderstore"),
            (PROVISION_SCHEMA_VAR, "TRUE"),
        ])
        .unwrap();
        assert_eq!(config.db_path, Some(PathBuf::from("/var/lib/orders.db")));
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir.as_deref(), Some("/var/log/orderstore"));
        assert!(config.provision_schema);
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = config_from(&[(DB_PATH_VAR, "  "), (LOG_DIR_VAR, "")]).unwrap();
        assert_eq!(config.db_path, None);
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn logging_is_off_without_log_dir() {
        let config = config_from(&[(LOG_LEVEL_VAR, "trace")]).unwrap();
        assert_eq!(config.file_logging(), None);
    }

    #[test]
    fn logging_uses_configured_dir_and_level() {
        let config = config_from(&[
            (LOG_LEVEL_VAR, "error"),
            (LOG_DIR_VAR, "/var/log/orderstore"),
        ])
        .unwrap();
        assert_eq!(
            config.file_logging(),
            Some(("error", "/var/log/orderstore"))
        );
    }

    #[test]
    fn rejects_unknown_flag_value() {
        let err = config_from(&[(PROVISION_SCHEMA_VAR, "maybe")]).unwrap_err();
        assert!(err.contains(PROVISION_SCHEMA_VAR));
    }
}
