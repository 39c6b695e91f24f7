use thiserror::Error;
use trading::{Direction, GatewayError, OrderReceipt, Symbol, SymbolError};

/// Everything that can go wrong while trading one instrument.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TradeError {
    /// No session was ever opened. Never retried.
    #[error("Not connected to trading session. Cannot place trade for {0}.")]
    NotConnected(Symbol),

    #[error("price unavailable for {symbol}: {source}")]
    QuoteUnavailable {
        symbol: Symbol,
        #[source]
        source: GatewayError,
    },

    #[error("specification unavailable for {symbol}: {source}")]
    SpecificationUnavailable {
        symbol: Symbol,
        #[source]
        source: GatewayError,
    },

    /// A batch aborted at order `index` (1-based). Orders in `placed` stay open.
    #[error(
        "{direction} order {index} for {symbol} failed after {} placed: {source}",
        .placed.len()
    )]
    SubmissionFailed {
        symbol: Symbol,
        direction: Direction,
        index: usize,
        placed: Vec<OrderReceipt>,
        #[source]
        source: GatewayError,
    },

    /// Malformed instrument list entry. The entry is skipped.
    #[error("invalid instrument entry: {0}")]
    Configuration(#[from] SymbolError),
}

impl TradeError {
    /// Whether the retry controller may try the instrument again.
    pub fn is_retryable(&self) -> bool {
        !matches!(
            self,
            TradeError::NotConnected(_) | TradeError::Configuration(_)
        )
    }
}
