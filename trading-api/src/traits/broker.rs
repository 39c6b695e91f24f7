use crate::error::GatewayError;
use crate::model::identity::Credentials;
use crate::traits::session::TradingSession;
use async_trait::async_trait;

/// Entry point to a brokerage: turns credentials into a live session.
#[async_trait]
pub trait Broker: Send + Sync {
    type Session: TradingSession;

    /// Opens and authenticates a session.
    ///
    /// # Arguments
    ///
    /// * `credentials` - Account credentials for the broker.
    ///
    /// # Returns
    ///
    /// * `Self::Session` - A session that reports `is_connected() == true`.
    async fn connect(&self, credentials: &Credentials) -> Result<Self::Session, GatewayError>;
}
