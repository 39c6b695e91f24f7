use crate::engine::pause;
use crate::error::TradeError;
use crate::event_log::EventLog;
use crate::models::ExecutionConfig;
use std::time::Duration;
use trading::{MarketOrder, OrderPlan, OrderReceipt, Symbol, TradingSession};

/// Places a fixed-size batch of identical market orders for one instrument.
#[derive(Debug, Clone)]
pub struct BatchSubmitter {
    batch_size: usize,
    inter_order_delay: Duration,
    campaign_tag: String,
}

impl BatchSubmitter {
    pub fn new(
        batch_size: usize,
        inter_order_delay: Duration,
        campaign_tag: impl Into<String>,
    ) -> Self {
        Self {
            batch_size,
            inter_order_delay,
            campaign_tag: campaign_tag.into(),
        }
    }

    pub fn from_config(config: &ExecutionConfig) -> Self {
        Self::new(
            config.batch_size(),
            config.inter_order_delay(),
            config.campaign_tag(),
        )
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Submits `batch_size` orders built from `plan`, pausing between them.
    ///
    /// Aborts at the first rejected order. Orders already placed are reported
    /// in `TradeError::SubmissionFailed` and are not cancelled. Without a
    /// session it fails with `NotConnected` before any order is sent.
    pub async fn submit<S>(
        &self,
        session: Option<&S>,
        symbol: &Symbol,
        plan: &OrderPlan,
        log: &EventLog,
    ) -> Result<Vec<OrderReceipt>, TradeError>
    where
        S: TradingSession + ?Sized,
    {
        let Some(session) = session else {
            return Err(TradeError::NotConnected(symbol.clone()));
        };

        let side = plan.direction().side_label();
        log.info(format!(
            "Placing {} {} orders for {}",
            self.batch_size, side, symbol
        ));

        let order = MarketOrder::from_plan(symbol.clone(), plan, self.campaign_tag.as_str());
        let mut placed = Vec::with_capacity(self.batch_size);

        for index in 1..=self.batch_size {
            if index > 1 {
                pause(self.inter_order_delay).await;
            }

            match session.submit_market_order(&order).await {
                Ok(receipt) => {
                    log.info(format!(
                        "{} order {} placed for {}. Order ID: {}",
                        side,
                        index,
                        symbol,
                        receipt.order_id()
                    ));
                    placed.push(receipt);
                }
                Err(source) => {
                    return Err(TradeError::SubmissionFailed {
                        symbol: symbol.clone(),
                        direction: plan.direction(),
                        index,
                        placed,
                        source,
                    });
                }
            }
        }

        log.info(format!(
            "All {} trades placed successfully for {}",
            self.batch_size, symbol
        ));
        log.info(format!("Stop Loss: {:.5}", plan.stop_loss_price()));
        log.info(format!("Take Profit: {:.5}", plan.take_profit_price()));

        Ok(placed)
    }
}
