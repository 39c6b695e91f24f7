//! Market data models.

use serde::{Deserialize, Serialize};

/// Best bid and ask for one instrument at one instant.
///
/// `ask >= bid` is expected but never checked; consumers must tolerate a
/// crossed quote.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    bid: f64,
    ask: f64,
}

impl Quote {
    pub fn new(bid: f64, ask: f64) -> Self {
        Self { bid, ask }
    }

    pub fn bid(&self) -> f64 {
        self.bid
    }

    pub fn ask(&self) -> f64 {
        self.ask
    }

    /// Ask minus bid. Negative for a crossed quote.
    pub fn spread(&self) -> f64 {
        self.ask - self.bid
    }
}
