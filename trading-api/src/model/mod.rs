pub mod identity;
pub mod instrument;
pub mod market_data;
pub mod order;
pub mod settings;

pub use identity::Credentials;
pub use instrument::{InstrumentSpecification, Symbol};
pub use market_data::Quote;
pub use order::{Direction, MarketOrder, OrderPlan, OrderReceipt};
pub use settings::RiskSettings;
