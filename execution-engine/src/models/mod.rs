pub mod config;
pub mod report;

pub use config::*;
pub use report::*;
