use crate::engine::{batch::BatchSubmitter, pause, plan::compute_plan, signal};
use crate::error::TradeError;
use crate::event_log::EventLog;
use crate::models::{ExecutionConfig, RetryOutcome};
use std::time::Duration;
use trading::{OrderReceipt, RiskSettings, Symbol, TradingSession};

/// Bounded-retry envelope around evaluate -> plan -> submit for one
/// instrument.
///
/// Attempt `n` (1-based) runs; on a retryable failure and `n < max_attempts`
/// it logs the retry, waits a constant backoff and starts over from the
/// quote. A missing session (`NotConnected`) ends the instrument
/// immediately. A session that was opened and later dropped goes through the
/// normal retry path.
#[derive(Debug, Clone)]
pub struct RetryController {
    submitter: BatchSubmitter,
    max_attempts: u32,
    backoff: Duration,
}

impl RetryController {
    pub fn new(submitter: BatchSubmitter, max_attempts: u32, backoff: Duration) -> Self {
        Self {
            submitter,
            max_attempts: max_attempts.max(1),
            backoff,
        }
    }

    pub fn from_config(config: &ExecutionConfig) -> Self {
        Self::new(
            BatchSubmitter::from_config(config),
            config.max_attempts(),
            config.retry_backoff(),
        )
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub async fn run<S>(
        &self,
        session: Option<&S>,
        symbol: &Symbol,
        settings: &RiskSettings,
        log: &EventLog,
    ) -> RetryOutcome
    where
        S: TradingSession + ?Sized,
    {
        // Orders left open by failed attempts.
        let mut stranded: Vec<OrderReceipt> = Vec::new();
        let mut attempt: u32 = 1;
        loop {
            let err = match self.attempt(session, symbol, settings, log).await {
                Ok(receipts) => {
                    return RetryOutcome::Succeeded {
                        attempts: attempt,
                        receipts,
                        stranded,
                    };
                }
                Err(err) => err,
            };

            if let TradeError::SubmissionFailed { placed, .. } = &err {
                stranded.extend(placed.iter().cloned());
            }

            if !err.is_retryable() {
                log.error(err.to_string());
                return RetryOutcome::ExhaustedFailure {
                    attempts: attempt,
                    last_error: err.to_string(),
                    stranded,
                };
            }

            log.error(format!("Error placing trades for {}: {}", symbol, err));

            if attempt >= self.max_attempts {
                log.error(format!(
                    "Failed to place trades for {} after {} attempts",
                    symbol, attempt
                ));
                return RetryOutcome::ExhaustedFailure {
                    attempts: attempt,
                    last_error: err.to_string(),
                    stranded,
                };
            }

            log.warn(format!("Retrying trades for {} (Attempt {})", symbol, attempt));
            pause(self.backoff).await;
            attempt += 1;
        }
    }

    async fn attempt<S>(
        &self,
        session: Option<&S>,
        symbol: &Symbol,
        settings: &RiskSettings,
        log: &EventLog,
    ) -> Result<Vec<OrderReceipt>, TradeError>
    where
        S: TradingSession + ?Sized,
    {
        let Some(session) = session else {
            return Err(TradeError::NotConnected(symbol.clone()));
        };

        let signal = signal::evaluate(session, symbol, log).await?;
        let plan = compute_plan(signal.direction(), signal.quote(), settings);
        self.submitter.submit(Some(session), symbol, &plan, log).await
    }
}
