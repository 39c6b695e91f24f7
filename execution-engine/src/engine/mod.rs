//! The directional batch trader.
//!
//! Control flows `CampaignRunner` -> `RetryController` -> signal evaluation
//! -> order planning -> `BatchSubmitter` -> trading session. Every stage
//! reports through the shared [`EventLog`](crate::event_log::EventLog).

pub mod batch;
pub mod campaign;
pub mod desk;
pub mod plan;
pub mod retry;
pub mod signal;

pub use batch::BatchSubmitter;
pub use campaign::{split_instruments, CampaignRunner};
pub use desk::TradingDesk;
pub use plan::compute_plan;
pub use retry::RetryController;
pub use signal::{evaluate, infer_direction, Signal};

use std::time::Duration;

/// Pacing pause. A zero duration does not yield.
pub(crate) async fn pause(duration: Duration) {
    if !duration.is_zero() {
        tokio::time::sleep(duration).await;
    }
}
