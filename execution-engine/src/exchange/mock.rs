use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use trading::{
    GatewayError, InstrumentSpecification, MarketOrder, OrderReceipt, Quote, Symbol,
    TradingSession,
};

/// A session whose failures are scripted up front.
///
/// Quotes are served from a fixed book; symbols missing from the book fail.
/// Once closed, every call fails with `GatewayError::Disconnected`.
/// Every call is recorded so tests can assert on what reached the "broker".
pub struct ScriptedSession {
    book: HashMap<Symbol, Quote>,
    point_size: f64,
    connected: AtomicBool,
    /// Remaining quote failures per symbol.
    quote_failures: Mutex<HashMap<Symbol, usize>>,
    /// Remaining specification failures per symbol.
    specification_failures: Mutex<HashMap<Symbol, usize>>,
    /// 1-based indices (across the whole session) of order calls that fail.
    failing_orders: HashSet<usize>,
    order_calls: AtomicUsize,
    quote_requests: Mutex<Vec<Symbol>>,
    placed: Mutex<Vec<MarketOrder>>,
}

impl Default for ScriptedSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptedSession {
    pub fn new() -> Self {
        Self {
            book: HashMap::new(),
            point_size: 0.01,
            connected: AtomicBool::new(true),
            quote_failures: Mutex::new(HashMap::new()),
            specification_failures: Mutex::new(HashMap::new()),
            failing_orders: HashSet::new(),
            order_calls: AtomicUsize::new(0),
            quote_requests: Mutex::new(Vec::new()),
            placed: Mutex::new(Vec::new()),
        }
    }

    pub fn with_quote(mut self, symbol: &str, bid: f64, ask: f64) -> Self {
        self.book.insert(Symbol::new(symbol), Quote::new(bid, ask));
        self
    }

    pub fn with_point_size(mut self, point_size: f64) -> Self {
        self.point_size = point_size;
        self
    }

    /// The next `times` quote requests for `symbol` fail.
    pub fn failing_quotes(self, symbol: &str, times: usize) -> Self {
        self.quote_failures
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(Symbol::new(symbol), times);
        self
    }

    /// The next `times` specification requests for `symbol` fail.
    pub fn failing_specifications(self, symbol: &str, times: usize) -> Self {
        self.specification_failures
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(Symbol::new(symbol), times);
        self
    }

    /// The order calls with these 1-based session-wide indices fail.
    pub fn failing_orders(mut self, calls: impl IntoIterator<Item = usize>) -> Self {
        self.failing_orders.extend(calls);
        self
    }

    pub fn disconnected(self) -> Self {
        self.connected.store(false, Ordering::SeqCst);
        self
    }

    fn ensure_connected(&self) -> Result<(), GatewayError> {
        if self.is_connected() {
            Ok(())
        } else {
            Err(GatewayError::Disconnected)
        }
    }

    /// Symbols whose quote was requested, in call order.
    pub fn quote_requests(&self) -> Vec<Symbol> {
        self.quote_requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Orders that were accepted, in call order.
    pub fn placed_orders(&self) -> Vec<MarketOrder> {
        self.placed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Every order submission attempt, accepted or not.
    pub fn order_calls(&self) -> usize {
        self.order_calls.load(Ordering::SeqCst)
    }
}

/// Consumes one scripted failure for `symbol`, if any are left.
fn take_failure(failures: &Mutex<HashMap<Symbol, usize>>, symbol: &Symbol) -> bool {
    let mut failures = failures.lock().unwrap_or_else(PoisonError::into_inner);
    match failures.get_mut(symbol) {
        Some(remaining) if *remaining > 0 => {
            *remaining -= 1;
            true
        }
        _ => false,
    }
}

#[async_trait]
impl TradingSession for ScriptedSession {
    async fn quote(&self, symbol: &Symbol) -> Result<Quote, GatewayError> {
        self.quote_requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(symbol.clone());

        self.ensure_connected()?;
        if take_failure(&self.quote_failures, symbol) {
            return Err(GatewayError::Quote("scripted quote failure".into()));
        }

        self.book
            .get(symbol)
            .copied()
            .ok_or_else(|| GatewayError::Quote(format!("Symbol '{}' not found", symbol)))
    }

    async fn instrument_specification(
        &self,
        symbol: &Symbol,
    ) -> Result<InstrumentSpecification, GatewayError> {
        self.ensure_connected()?;
        if take_failure(&self.specification_failures, symbol) {
            return Err(GatewayError::Specification("scripted specification failure".into()));
        }
        if self.book.contains_key(symbol) {
            Ok(InstrumentSpecification::new(self.point_size))
        } else {
            Err(GatewayError::Specification(format!(
                "Symbol '{}' not found",
                symbol
            )))
        }
    }

    async fn submit_market_order(&self, order: &MarketOrder) -> Result<OrderReceipt, GatewayError> {
        let call = self.order_calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.ensure_connected()?;
        if self.failing_orders.contains(&call) {
            return Err(GatewayError::Order(format!("scripted failure on call {}", call)));
        }

        let mut placed = self.placed.lock().unwrap_or_else(PoisonError::into_inner);
        placed.push(order.clone());
        Ok(OrderReceipt::new(format!("SIM-{:04}", placed.len())))
    }

    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    async fn close(&self) {
        self.connected.store(false, Ordering::SeqCst);
    }
}
