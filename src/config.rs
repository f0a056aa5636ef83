// ==========================================
// Apiary Monitor - Configuration
// ==========================================
// Connection parameters and core tunables. Validation of
// supplied values is the integration layer's job; this module
// only resolves defaults and environment overrides.
// ==========================================

use std::env;
use std::path::PathBuf;

/// Staleness window applied when no override is configured (days).
pub const DEFAULT_ALERT_THRESHOLD_DAYS: i64 = 15;

/// Chart artifact written when no override is configured.
pub const DEFAULT_REPORT_PATH: &str = "reports/honey_production.svg";

/// Core configuration.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// SQLite database file path.
    pub db_path: String,
    /// A hive alerts when its newest inspection is strictly older than this.
    pub alert_threshold_days: i64,
    /// Output path of the production chart (overwritten on each run).
    pub report_path: PathBuf,
}

impl MonitorConfig {
    /// Configuration for an explicit database path, defaults elsewhere.
    pub fn new(db_path: impl Into<String>) -> Self {
        Self {
            db_path: db_path.into(),
            alert_threshold_days: DEFAULT_ALERT_THRESHOLD_DAYS,
            report_path: PathBuf::from(DEFAULT_REPORT_PATH),
        }
    }

    /// Resolve configuration from the environment.
    ///
    /// # Environment
    /// - APIARY_DB_PATH: database file (default: platform data dir)
    /// - APIARY_ALERT_THRESHOLD_DAYS: staleness window in days (default 15)
    /// - APIARY_REPORT_PATH: chart output path
    pub fn from_env() -> Self {
        let db_path = env::var("APIARY_DB_PATH").unwrap_or_else(|_| default_db_path());

        let alert_threshold_days = env::var("APIARY_ALERT_THRESHOLD_DAYS")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(DEFAULT_ALERT_THRESHOLD_DAYS);

        let report_path = env::var("APIARY_REPORT_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_REPORT_PATH));

        Self {
            db_path,
            alert_threshold_days,
            report_path,
        }
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self::new(default_db_path())
    }
}

/// Default database location under the platform data directory,
/// falling back to the working directory when none is available.
pub fn default_db_path() -> String {
    dirs::data_dir()
        .map(|dir| dir.join("apiary-monitor").join("apiary.db"))
        .and_then(|p| p.to_str().map(|s| s.to_string()))
        .unwrap_or_else(|| "apiary.db".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_keeps_defaults() {
        let config = MonitorConfig::new("test.db");
        assert_eq!(config.db_path, "test.db");
        assert_eq!(config.alert_threshold_days, DEFAULT_ALERT_THRESHOLD_DAYS);
        assert_eq!(config.report_path, PathBuf::from(DEFAULT_REPORT_PATH));
    }
}
