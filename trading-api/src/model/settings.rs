//! Risk settings supplied by the operator for one campaign run.

use serde::{Deserialize, Serialize};

fn default_risk_per_trade_percent() -> f64 {
    2.0
}

fn default_stop_loss_percent() -> f64 {
    10.0
}

fn default_take_profit_multiplier() -> f64 {
    2.0
}

fn default_trade_size() -> f64 {
    0.01
}

fn default_instrument_list() -> String {
    "XAUUSD".to_string()
}

fn default_true() -> bool {
    true
}

/// Flat configuration record consumed by a campaign.
///
/// Values are validated by whoever collects them; the engine takes them as
/// given. Unknown keys are rejected at deserialization time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RiskSettings {
    /// Accepted but not used for position sizing.
    #[serde(default = "default_risk_per_trade_percent")]
    risk_per_trade_percent: f64,
    /// Stop-loss distance as a percentage of the entry price.
    #[serde(default = "default_stop_loss_percent")]
    stop_loss_percent: f64,
    /// Take-profit distance as a multiple of the stop-loss distance.
    #[serde(default = "default_take_profit_multiplier")]
    take_profit_multiplier: f64,
    /// Position size per order, in lots.
    #[serde(default = "default_trade_size")]
    trade_size: f64,
    /// Delimited instrument list, e.g. "XAUUSD, EURUSD".
    #[serde(default = "default_instrument_list")]
    instrument_list: String,
    #[serde(default = "default_true")]
    copy_all_trades: bool,
    #[serde(default = "default_true")]
    notifications_enabled: bool,
}

impl Default for RiskSettings {
    fn default() -> Self {
        Self {
            risk_per_trade_percent: default_risk_per_trade_percent(),
            stop_loss_percent: default_stop_loss_percent(),
            take_profit_multiplier: default_take_profit_multiplier(),
            trade_size: default_trade_size(),
            instrument_list: default_instrument_list(),
            copy_all_trades: true,
            notifications_enabled: true,
        }
    }
}

impl RiskSettings {
    pub fn new(
        risk_per_trade_percent: f64,
        stop_loss_percent: f64,
        take_profit_multiplier: f64,
        trade_size: f64,
        instrument_list: impl Into<String>,
    ) -> Self {
        Self {
            risk_per_trade_percent,
            stop_loss_percent,
            take_profit_multiplier,
            trade_size,
            instrument_list: instrument_list.into(),
            ..Self::default()
        }
    }

    pub fn with_instrument_list(mut self, instrument_list: impl Into<String>) -> Self {
        self.instrument_list = instrument_list.into();
        self
    }

    pub fn with_flags(mut self, copy_all_trades: bool, notifications_enabled: bool) -> Self {
        self.copy_all_trades = copy_all_trades;
        self.notifications_enabled = notifications_enabled;
        self
    }

    pub fn risk_per_trade_percent(&self) -> f64 {
        self.risk_per_trade_percent
    }

    pub fn stop_loss_percent(&self) -> f64 {
        self.stop_loss_percent
    }

    pub fn take_profit_multiplier(&self) -> f64 {
        self.take_profit_multiplier
    }

    pub fn trade_size(&self) -> f64 {
        self.trade_size
    }

    pub fn instrument_list(&self) -> &str {
        &self.instrument_list
    }

    pub fn copy_all_trades(&self) -> bool {
        self.copy_all_trades
    }

    pub fn notifications_enabled(&self) -> bool {
        self.notifications_enabled
    }

    /// One-line summary logged when the settings are saved.
    pub fn summary(&self) -> String {
        format!(
            "Risk {}%, Stop Loss {}%, TP Multiplier {}",
            self.risk_per_trade_percent, self.stop_loss_percent, self.take_profit_multiplier
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_operator_form() {
        let s = RiskSettings::default();
        assert_eq!(s.risk_per_trade_percent(), 2.0);
        assert_eq!(s.stop_loss_percent(), 10.0);
        assert_eq!(s.take_profit_multiplier(), 2.0);
        assert_eq!(s.trade_size(), 0.01);
        assert_eq!(s.instrument_list(), "XAUUSD");
        assert!(s.copy_all_trades());
        assert!(s.notifications_enabled());
    }

    #[test]
    fn test_partial_record_fills_defaults() {
        let s: RiskSettings =
            serde_json::from_str(r#"{"stop_loss_percent": 5.0, "instrument_list": "EURUSD"}"#)
                .unwrap();
        assert_eq!(s.stop_loss_percent(), 5.0);
        assert_eq!(s.instrument_list(), "EURUSD");
        assert_eq!(s.trade_size(), 0.01);
    }

    #[test]
    fn test_unknown_option_rejected() {
        let result = serde_json::from_str::<RiskSettings>(r#"{"leverage": 100}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_summary() {
        assert_eq!(
            RiskSettings::default().summary(),
            "Risk 2%, Stop Loss 10%, TP Multiplier 2"
        );
    }
}
