use broker_gateway::PaperConfig;
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use trading::{Credentials, RiskSettings};

/// Environment variables with this prefix override file values, using `__`
/// between path segments (e.g. `BATCH_TRADER__RISK__TRADE_SIZE=0.05`).
pub const ENV_PREFIX: &str = "BATCH_TRADER";

fn default_batch_size() -> usize {
    20
}

fn default_inter_order_delay_ms() -> u64 {
    200
}

fn default_max_attempts() -> u32 {
    4
}

fn default_retry_backoff_ms() -> u64 {
    1000
}

fn default_inter_instrument_delay_ms() -> u64 {
    1000
}

fn default_startup_delay_ms() -> u64 {
    2000
}

fn default_delimiter() -> String {
    ",".to_string()
}

fn default_campaign_tag() -> String {
    "C.O.N-IBOT-MOBILE".to_string()
}

/// Engine tunables. The defaults are the production pacing and batch
/// constants; tests shrink them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExecutionConfig {
    /// Orders per instrument batch.
    #[serde(default = "default_batch_size")]
    batch_size: usize,
    /// Pause between consecutive orders of one batch.
    #[serde(default = "default_inter_order_delay_ms")]
    inter_order_delay_ms: u64,
    /// Total attempts per instrument, first one included.
    #[serde(default = "default_max_attempts")]
    max_attempts: u32,
    /// Fixed pause before each retry.
    #[serde(default = "default_retry_backoff_ms")]
    retry_backoff_ms: u64,
    /// Pause between two instruments.
    #[serde(default = "default_inter_instrument_delay_ms")]
    inter_instrument_delay_ms: u64,
    /// Each of the two pauses in the account verification preamble.
    #[serde(default = "default_startup_delay_ms")]
    startup_delay_ms: u64,
    /// Separator of the instrument list.
    #[serde(default = "default_delimiter")]
    delimiter: String,
    /// Comment attached to every order.
    #[serde(default = "default_campaign_tag")]
    campaign_tag: String,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            inter_order_delay_ms: default_inter_order_delay_ms(),
            max_attempts: default_max_attempts(),
            retry_backoff_ms: default_retry_backoff_ms(),
            inter_instrument_delay_ms: default_inter_instrument_delay_ms(),
            startup_delay_ms: default_startup_delay_ms(),
            delimiter: default_delimiter(),
            campaign_tag: default_campaign_tag(),
        }
    }
}

impl ExecutionConfig {
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Sets every pause to zero.
    pub fn without_delays(mut self) -> Self {
        self.inter_order_delay_ms = 0;
        self.retry_backoff_ms = 0;
        self.inter_instrument_delay_ms = 0;
        self.startup_delay_ms = 0;
        self
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn inter_order_delay(&self) -> Duration {
        Duration::from_millis(self.inter_order_delay_ms)
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn retry_backoff(&self) -> Duration {
        Duration::from_millis(self.retry_backoff_ms)
    }

    pub fn inter_instrument_delay(&self) -> Duration {
        Duration::from_millis(self.inter_instrument_delay_ms)
    }

    pub fn startup_delay(&self) -> Duration {
        Duration::from_millis(self.startup_delay_ms)
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    pub fn campaign_tag(&self) -> &str {
        &self.campaign_tag
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.delimiter.is_empty() {
            return Err(ConfigError::Message(
                "execution.delimiter must not be empty".into(),
            ));
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::Message(
                "execution.max_attempts must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Everything the binary needs, as read from file and environment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub risk: RiskSettings,
    #[serde(default)]
    pub execution: ExecutionConfig,
    #[serde(default)]
    pub credentials: Credentials,
    #[serde(default)]
    pub paper: PaperConfig,
}

impl AppConfig {
    /// Loads the optional TOML file at `path`, then applies environment
    /// overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }
        let app: AppConfig = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?
            .try_deserialize()?;
        app.execution.validate()?;
        Ok(app)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_production_constants() {
        let cfg = ExecutionConfig::default();
        assert_eq!(cfg.batch_size(), 20);
        assert_eq!(cfg.inter_order_delay(), Duration::from_millis(200));
        assert_eq!(cfg.max_attempts(), 4);
        assert_eq!(cfg.retry_backoff(), Duration::from_millis(1000));
        assert_eq!(cfg.inter_instrument_delay(), Duration::from_millis(1000));
        assert_eq!(cfg.startup_delay(), Duration::from_millis(2000));
        assert_eq!(cfg.delimiter(), ",");
        assert_eq!(cfg.campaign_tag(), "C.O.N-IBOT-MOBILE");
    }

    #[test]
    fn test_validate_rejects_empty_delimiter() {
        let cfg = ExecutionConfig::default().with_delimiter("");
        assert!(cfg.validate().is_err());
        assert!(ExecutionConfig::default().with_max_attempts(0).validate().is_err());
    }

    #[test]
    fn test_load_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trader.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            r#"
[risk]
stop_loss_percent = 5.0
instrument_list = "XAUUSD, EURUSD"

[execution]
batch_size = 5

[credentials]
api_token = "tok"
account_id = "acc"
"#
        )
        .unwrap();

        let app = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(app.risk.stop_loss_percent(), 5.0);
        assert_eq!(app.risk.instrument_list(), "XAUUSD, EURUSD");
        assert_eq!(app.risk.take_profit_multiplier(), 2.0);
        assert_eq!(app.execution.batch_size(), 5);
        assert_eq!(app.execution.max_attempts(), 4);
        assert_eq!(app.credentials.account_id(), "acc");
    }

    #[test]
    fn test_unknown_risk_option_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[risk]\nleverage = 100\n").unwrap();

        assert!(AppConfig::load(Some(&path)).is_err());
    }
}
