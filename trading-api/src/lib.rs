pub mod error;
pub mod model;
pub mod traits;

pub use error::GatewayError;
pub use model::identity::Credentials;
pub use model::instrument::{InstrumentSpecification, Symbol, SymbolError};
pub use model::market_data::Quote;
pub use model::order::{Direction, MarketOrder, OrderPlan, OrderReceipt};
pub use model::settings::RiskSettings;
pub use traits::broker::Broker;
pub use traits::session::TradingSession;

pub mod prelude {
    pub use crate::error::GatewayError;
    pub use crate::model::instrument::{InstrumentSpecification, Symbol};
    pub use crate::model::market_data::Quote;
    pub use crate::model::order::{Direction, MarketOrder, OrderPlan, OrderReceipt};
    pub use crate::model::settings::RiskSettings;
    pub use crate::traits::broker::Broker;
    pub use crate::traits::session::TradingSession;
}
