use serde::Serialize;
use trading::{OrderReceipt, Symbol};

/// Final state of one instrument after the retry envelope.
///
/// `stranded` holds the orders that failed attempts placed before aborting.
/// They stay open at the broker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum RetryOutcome {
    Succeeded {
        attempts: u32,
        receipts: Vec<OrderReceipt>,
        stranded: Vec<OrderReceipt>,
    },
    ExhaustedFailure {
        attempts: u32,
        last_error: String,
        stranded: Vec<OrderReceipt>,
    },
}

impl RetryOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RetryOutcome::Succeeded { .. })
    }

    pub fn attempts(&self) -> u32 {
        match self {
            RetryOutcome::Succeeded { attempts, .. }
            | RetryOutcome::ExhaustedFailure { attempts, .. } => *attempts,
        }
    }

    /// Orders placed by the successful attempt.
    pub fn receipts(&self) -> &[OrderReceipt] {
        match self {
            RetryOutcome::Succeeded { receipts, .. } => receipts,
            RetryOutcome::ExhaustedFailure { .. } => &[],
        }
    }

    /// Orders placed by attempts that later failed.
    pub fn stranded(&self) -> &[OrderReceipt] {
        match self {
            RetryOutcome::Succeeded { stranded, .. }
            | RetryOutcome::ExhaustedFailure { stranded, .. } => stranded,
        }
    }

    /// Every order this instrument left at the broker.
    pub fn orders_placed(&self) -> usize {
        self.receipts().len() + self.stranded().len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum InstrumentOutcome {
    Traded(RetryOutcome),
    /// The list entry could not be parsed into a symbol.
    Skipped { reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstrumentReport {
    entry: String,
    outcome: InstrumentOutcome,
}

impl InstrumentReport {
    pub fn traded(symbol: &Symbol, outcome: RetryOutcome) -> Self {
        Self {
            entry: symbol.to_string(),
            outcome: InstrumentOutcome::Traded(outcome),
        }
    }

    pub fn skipped(entry: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            entry: entry.into(),
            outcome: InstrumentOutcome::Skipped {
                reason: reason.into(),
            },
        }
    }

    pub fn entry(&self) -> &str {
        &self.entry
    }

    pub fn outcome(&self) -> &InstrumentOutcome {
        &self.outcome
    }
}

/// Per-instrument results of one campaign run, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CampaignReport {
    instruments: Vec<InstrumentReport>,
}

impl CampaignReport {
    pub fn push(&mut self, report: InstrumentReport) {
        self.instruments.push(report);
    }

    pub fn instruments(&self) -> &[InstrumentReport] {
        &self.instruments
    }

    pub fn succeeded(&self) -> usize {
        self.count(|o| matches!(o, InstrumentOutcome::Traded(r) if r.is_success()))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, InstrumentOutcome::Traded(r) if !r.is_success()))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, InstrumentOutcome::Skipped { .. }))
    }

    pub fn orders_placed(&self) -> usize {
        self.instruments
            .iter()
            .map(|i| match &i.outcome {
                InstrumentOutcome::Traded(r) => r.orders_placed(),
                InstrumentOutcome::Skipped { .. } => 0,
            })
            .sum()
    }

    fn count(&self, pred: impl Fn(&InstrumentOutcome) -> bool) -> usize {
        self.instruments.iter().filter(|i| pred(&i.outcome)).count()
    }
}
