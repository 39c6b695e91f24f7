//! Order-side models shared by the engine and the brokers.

use crate::model::instrument::Symbol;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Market direction inferred for an instrument, and therefore the side of
/// every order in its batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Long,
    Short,
}

impl Direction {
    /// Broker-facing side label.
    pub fn side_label(&self) -> &'static str {
        match self {
            Direction::Long => "BUY",
            Direction::Short => "SELL",
        }
    }

    /// Human-readable trend label used in status messages.
    pub fn trend_label(&self) -> &'static str {
        match self {
            Direction::Long => "Uptrend",
            Direction::Short => "Downtrend",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.side_label())
    }
}

/// Fully resolved parameters for one batch of orders on one instrument.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderPlan {
    direction: Direction,
    stop_loss_price: f64,
    take_profit_price: f64,
    size: f64,
}

impl OrderPlan {
    pub fn new(
        direction: Direction,
        stop_loss_price: f64,
        take_profit_price: f64,
        size: f64,
    ) -> Self {
        Self {
            direction,
            stop_loss_price,
            take_profit_price,
            size,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn stop_loss_price(&self) -> f64 {
        self.stop_loss_price
    }

    pub fn take_profit_price(&self) -> f64 {
        self.take_profit_price
    }

    pub fn size(&self) -> f64 {
        self.size
    }
}

/// A single market order request handed to a trading session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketOrder {
    symbol: Symbol,
    direction: Direction,
    size: f64,
    stop_loss: f64,
    take_profit: f64,
    /// Free-text tag the broker stores with the order.
    comment: String,
}

impl MarketOrder {
    /// Builds the order for one slot of a batch.
    pub fn from_plan(symbol: Symbol, plan: &OrderPlan, comment: impl Into<String>) -> Self {
        Self {
            symbol,
            direction: plan.direction(),
            size: plan.size(),
            stop_loss: plan.stop_loss_price(),
            take_profit: plan.take_profit_price(),
            comment: comment.into(),
        }
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn stop_loss(&self) -> f64 {
        self.stop_loss
    }

    pub fn take_profit(&self) -> f64 {
        self.take_profit
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }
}

/// Acknowledgement of a placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderReceipt {
    order_id: String,
}

impl OrderReceipt {
    pub fn new(order_id: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
        }
    }

    pub fn order_id(&self) -> &str {
        &self.order_id
    }
}
