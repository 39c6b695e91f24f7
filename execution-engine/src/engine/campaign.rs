use crate::engine::{pause, retry::RetryController};
use crate::error::TradeError;
use crate::event_log::EventLog;
use crate::models::{CampaignReport, ExecutionConfig, InstrumentReport};
use std::time::Duration;
use trading::{RiskSettings, Symbol, TradingSession};

/// Splits an instrument list on `delimiter` and trims every entry.
///
/// Order and duplicates are kept. Empty entries are kept too.
pub fn split_instruments(list: &str, delimiter: &str) -> Vec<String> {
    list.split(delimiter).map(|e| e.trim().to_string()).collect()
}

/// Runs the retry-wrapped pipeline over every configured instrument, one
/// after the other.
#[derive(Debug, Clone)]
pub struct CampaignRunner {
    retry: RetryController,
    delimiter: String,
    inter_instrument_delay: Duration,
    startup_delay: Duration,
}

impl CampaignRunner {
    pub fn new(
        retry: RetryController,
        delimiter: impl Into<String>,
        inter_instrument_delay: Duration,
        startup_delay: Duration,
    ) -> Self {
        Self {
            retry,
            delimiter: delimiter.into(),
            inter_instrument_delay,
            startup_delay,
        }
    }

    pub fn from_config(config: &ExecutionConfig) -> Self {
        Self::new(
            RetryController::from_config(config),
            config.delimiter(),
            config.inter_instrument_delay(),
            config.startup_delay(),
        )
    }

    /// One full campaign. Never fails as a whole: instruments that exhaust
    /// their retries or cannot be parsed are recorded and skipped over.
    /// `None` means no session was ever opened: every instrument fails with
    /// `NotConnected`.
    pub async fn run<S>(
        &self,
        session: Option<&S>,
        settings: &RiskSettings,
        log: &EventLog,
    ) -> CampaignReport
    where
        S: TradingSession + ?Sized,
    {
        log.info("Verifying account....");
        pause(self.startup_delay).await;
        log.info("Account details successfully submitted.....");
        pause(self.startup_delay).await;
        log.info("Fetching trading symbols...");

        let entries = split_instruments(settings.instrument_list(), &self.delimiter);
        log.info(format!("Trading pairs: {}", entries.join(", ")));

        let mut report = CampaignReport::default();
        let mut first = true;

        for entry in entries {
            let symbol = match Symbol::parse(&entry) {
                Ok(symbol) => symbol,
                Err(e) => {
                    let err = TradeError::from(e);
                    log.error(format!("Skipping '{}': {}", entry, err));
                    report.push(InstrumentReport::skipped(entry, err.to_string()));
                    continue;
                }
            };

            if !first {
                pause(self.inter_instrument_delay).await;
            }
            first = false;

            log.info(format!("Analyzing market direction for {}", symbol));
            let outcome = self.retry.run(session, &symbol, settings, log).await;
            report.push(InstrumentReport::traded(&symbol, outcome));
        }

        log.info(format!(
            "Campaign finished: {} succeeded, {} failed, {} skipped, {} orders placed",
            report.succeeded(),
            report.failed(),
            report.skipped(),
            report.orders_placed()
        ));

        report
    }
}
