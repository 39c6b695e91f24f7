use crate::error::TradeError;
use crate::event_log::EventLog;
use trading::{Direction, InstrumentSpecification, Quote, Symbol, TradingSession};

/// Direction inferred for one instrument, with the quote it was read from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Signal {
    direction: Direction,
    quote: Quote,
}

impl Signal {
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn quote(&self) -> &Quote {
        &self.quote
    }
}

/// Spread heuristic: a spread wider than two points reads as an uptrend.
///
/// Stateless and history-free. A spread of exactly two points is `Short`.
pub fn infer_direction(quote: &Quote, spec: &InstrumentSpecification) -> Direction {
    if quote.spread() > spec.point_size() * 2.0 {
        Direction::Long
    } else {
        Direction::Short
    }
}

/// Fetches quote and specification for `symbol` and infers its direction.
///
/// Logs the bid/ask, then the inferred direction.
pub async fn evaluate<S>(session: &S, symbol: &Symbol, log: &EventLog) -> Result<Signal, TradeError>
where
    S: TradingSession + ?Sized,
{
    let quote = session
        .quote(symbol)
        .await
        .map_err(|source| TradeError::QuoteUnavailable {
            symbol: symbol.clone(),
            source,
        })?;
    log.info(format!(
        "Fetched price for {}: Bid {}, Ask {}",
        symbol,
        quote.bid(),
        quote.ask()
    ));

    let spec = session
        .instrument_specification(symbol)
        .await
        .map_err(|source| TradeError::SpecificationUnavailable {
            symbol: symbol.clone(),
            source,
        })?;

    let direction = infer_direction(&quote, &spec);
    log.info(format!(
        "Market direction for {}: {}",
        symbol,
        direction.trend_label()
    ));

    Ok(Signal { direction, quote })
}
