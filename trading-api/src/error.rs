use thiserror::Error;

/// Failures reported by a trading session or the broker behind it.
///
/// The message is whatever the broker said; callers only ever surface it to
/// the event log, so it stays a plain string.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GatewayError {
    /// The broker refused or could not establish a session.
    #[error("connection failed: {0}")]
    Connection(String),

    /// The session was closed or dropped by the remote side.
    #[error("session is disconnected")]
    Disconnected,

    /// No price could be obtained for the symbol.
    #[error("price lookup failed: {0}")]
    Quote(String),

    /// No instrument specification could be obtained for the symbol.
    #[error("specification lookup failed: {0}")]
    Specification(String),

    /// The broker rejected or failed to place an order.
    #[error("order rejected: {0}")]
    Order(String),
}
