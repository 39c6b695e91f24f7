pub mod engine;
pub mod error;
pub mod event_log;
pub mod exchange;
pub mod io;
pub mod models;

pub use engine::{BatchSubmitter, CampaignRunner, RetryController, TradingDesk};
pub use error::TradeError;
pub use event_log::{EventLevel, EventLog, LogEvent};
pub use models::{AppConfig, CampaignReport, ExecutionConfig, RetryOutcome};
