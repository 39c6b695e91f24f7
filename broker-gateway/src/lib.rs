//! In-process brokers implementing the `trading` session contract.

pub mod paper;

pub use paper::{PaperBroker, PaperConfig, PaperSession};
