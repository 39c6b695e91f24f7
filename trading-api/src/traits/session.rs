use crate::error::GatewayError;
use crate::model::{
    instrument::{InstrumentSpecification, Symbol},
    market_data::Quote,
    order::{MarketOrder, OrderReceipt},
};
use async_trait::async_trait;
use std::sync::Arc;

/// An authenticated brokerage session.
///
/// Implementations are shared by reference across a whole campaign, so every
/// operation takes `&self`.
#[async_trait]
pub trait TradingSession: Send + Sync {
    /// Latest bid/ask for the symbol.
    async fn quote(&self, symbol: &Symbol) -> Result<Quote, GatewayError>;

    /// Tick metadata for the symbol.
    async fn instrument_specification(
        &self,
        symbol: &Symbol,
    ) -> Result<InstrumentSpecification, GatewayError>;

    /// Places a market order with attached stop-loss and take-profit.
    async fn submit_market_order(&self, order: &MarketOrder) -> Result<OrderReceipt, GatewayError>;

    /// Whether the session is still usable. Must not contact the broker.
    fn is_connected(&self) -> bool;

    /// Closes the session. Later calls fail with `GatewayError::Disconnected`.
    async fn close(&self);
}

#[async_trait]
impl<T: TradingSession + ?Sized> TradingSession for Arc<T> {
    async fn quote(&self, symbol: &Symbol) -> Result<Quote, GatewayError> {
        (**self).quote(symbol).await
    }

    async fn instrument_specification(
        &self,
        symbol: &Symbol,
    ) -> Result<InstrumentSpecification, GatewayError> {
        (**self).instrument_specification(symbol).await
    }

    async fn submit_market_order(&self, order: &MarketOrder) -> Result<OrderReceipt, GatewayError> {
        (**self).submit_market_order(order).await
    }

    fn is_connected(&self) -> bool {
        (**self).is_connected()
    }

    async fn close(&self) {
        (**self).close().await
    }
}
