use async_trait::async_trait;
use log::{debug, info};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use trading::{
    Broker, Credentials, GatewayError, InstrumentSpecification, MarketOrder, OrderReceipt, Quote,
    Symbol, TradingSession,
};
use uuid::Uuid;

fn default_drift() -> f64 {
    0.0002
}

/// Largest relative move per quote request the walk will take.
const MAX_DRIFT: f64 = 0.5;

/// Settings for the simulated broker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaperConfig {
    /// Simulated round-trip latency per call, in milliseconds.
    #[serde(default)]
    latency_ms: u64,
    /// Maximum relative move of the mid price per quote request.
    #[serde(default = "default_drift")]
    drift: f64,
    /// Opening bid/ask per symbol. Empty means the built-in book.
    #[serde(default)]
    book: HashMap<String, (f64, f64)>,
}

impl Default for PaperConfig {
    fn default() -> Self {
        Self {
            latency_ms: 0,
            drift: default_drift(),
            book: HashMap::new(),
        }
    }
}

impl PaperConfig {
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency_ms = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn with_drift(mut self, drift: f64) -> Self {
        self.drift = drift;
        self
    }

    pub fn with_quote(mut self, symbol: &str, bid: f64, ask: f64) -> Self {
        self.book.insert(symbol.to_string(), (bid, ask));
        self
    }

    /// Drift as used by the walk: NaN or negative values disable it, anything
    /// above `MAX_DRIFT` (including infinity) is capped.
    fn effective_drift(&self) -> f64 {
        if self.drift.is_nan() {
            return 0.0;
        }
        self.drift.clamp(0.0, MAX_DRIFT)
    }

    fn opening_book(&self) -> HashMap<Symbol, Quote> {
        // Config loaders may lowercase keys; broker symbols are uppercase.
        if !self.book.is_empty() {
            return self
                .book
                .iter()
                .map(|(s, (bid, ask))| (Symbol::new(s.to_uppercase()), Quote::new(*bid, *ask)))
                .collect();
        }

        [
            ("XAUUSD", 2000.00, 2000.35),
            ("XAGUSD", 23.10, 23.14),
            ("EURUSD", 1.08500, 1.08501),
            ("GBPUSD", 1.27000, 1.27004),
            ("USDJPY", 150.000, 150.010),
        ]
        .into_iter()
        .map(|(s, bid, ask)| (Symbol::new(s), Quote::new(bid, ask)))
        .collect()
    }
}

/// Tick size by symbol class: metals trade in cents, yen pairs in three
/// digits, everything else in five.
pub fn point_size_for(symbol: &Symbol) -> f64 {
    let s = symbol.as_str();
    if s.starts_with("XAU") || s.starts_with("XAG") {
        0.01
    } else if s.contains("JPY") {
        0.001
    } else {
        0.00001
    }
}

/// Paper-trading broker. Every successful `connect` yields a fresh book.
#[derive(Debug, Clone, Default)]
pub struct PaperBroker {
    config: PaperConfig,
}

impl PaperBroker {
    pub fn new(config: PaperConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Broker for PaperBroker {
    type Session = PaperSession;

    async fn connect(&self, credentials: &Credentials) -> Result<PaperSession, GatewayError> {
        if credentials.is_blank() {
            return Err(GatewayError::Connection(
                "API token and account id are required".into(),
            ));
        }
        tokio::time::sleep(Duration::from_millis(self.config.latency_ms)).await;
        info!(
            "[PaperBroker] Session opened for account {}",
            credentials.account_id()
        );
        Ok(PaperSession::new(credentials.account_id(), &self.config))
    }
}

/// A simulated session: quotes random-walk, orders always fill.
pub struct PaperSession {
    account_id: String,
    connected: AtomicBool,
    latency: Duration,
    drift: f64,
    book: Mutex<HashMap<Symbol, Quote>>,
    fills: Mutex<Vec<(OrderReceipt, MarketOrder)>>,
}

impl PaperSession {
    fn new(account_id: &str, config: &PaperConfig) -> Self {
        Self {
            account_id: account_id.to_string(),
            connected: AtomicBool::new(true),
            latency: Duration::from_millis(config.latency_ms),
            drift: config.effective_drift(),
            book: Mutex::new(config.opening_book()),
            fills: Mutex::new(Vec::new()),
        }
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// Orders placed so far, oldest first.
    pub fn fills(&self) -> Vec<(OrderReceipt, MarketOrder)> {
        self.fills
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    async fn round_trip(&self) -> Result<(), GatewayError> {
        if !self.is_connected() {
            return Err(GatewayError::Disconnected);
        }
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(())
    }

    fn known(&self, symbol: &Symbol) -> bool {
        self.book
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(symbol)
    }
}

#[async_trait]
impl TradingSession for PaperSession {
    async fn quote(&self, symbol: &Symbol) -> Result<Quote, GatewayError> {
        self.round_trip().await?;

        let mut book = self.book.lock().unwrap_or_else(PoisonError::into_inner);
        let quote = book
            .get_mut(symbol)
            .ok_or_else(|| GatewayError::Quote(format!("Symbol '{}' not found", symbol)))?;

        // Shift both sides by the same amount so the spread survives the walk.
        let step = if self.drift > 0.0 {
            rand::thread_rng().gen_range(-self.drift..=self.drift)
        } else {
            0.0
        };
        let shift = quote.bid() * step;
        *quote = Quote::new(quote.bid() + shift, quote.ask() + shift);
        debug!("[PaperBroker] {} bid {} ask {}", symbol, quote.bid(), quote.ask());

        Ok(*quote)
    }

    async fn instrument_specification(
        &self,
        symbol: &Symbol,
    ) -> Result<InstrumentSpecification, GatewayError> {
        self.round_trip().await?;
        if !self.known(symbol) {
            return Err(GatewayError::Specification(format!(
                "Symbol '{}' not found",
                symbol
            )));
        }
        Ok(InstrumentSpecification::new(point_size_for(symbol)))
    }

    async fn submit_market_order(&self, order: &MarketOrder) -> Result<OrderReceipt, GatewayError> {
        self.round_trip().await?;
        if !self.known(order.symbol()) {
            return Err(GatewayError::Order(format!(
                "Symbol '{}' not found",
                order.symbol()
            )));
        }
        if order.size().is_nan() || order.size() <= 0.0 {
            return Err(GatewayError::Order(format!("Invalid volume {}", order.size())));
        }

        let receipt = OrderReceipt::new(Uuid::new_v4().to_string());
        debug!(
            "[PaperBroker] {} {} {} lots -> {}",
            order.direction(),
            order.symbol(),
            order.size(),
            receipt.order_id()
        );
        self.fills
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((receipt.clone(), order.clone()));
        Ok(receipt)
    }

    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    async fn close(&self) {
        if self.connected.swap(false, Ordering::SeqCst) {
            info!("[PaperBroker] Session closed for account {}", self.account_id);
        }
    }
}
