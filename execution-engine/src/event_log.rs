//! # Event Log
//!
//! The only thing the trading core shows to the outside world. Every stage
//! appends human-readable status lines here; the UI renders them in order.
//!
//! Events are append-only. The log is a cheap `Clone` handle, so several
//! campaign runs may write to the same log at once. Each event is also
//! broadcast to live subscribers and mirrored to the `log` facade.

use chrono::{DateTime, Utc};
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::broadcast;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventLevel {
    Info,
    Warn,
    Error,
}

/// One timestamped status line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEvent {
    timestamp: DateTime<Utc>,
    level: EventLevel,
    message: String,
}

impl LogEvent {
    pub fn new(level: EventLevel, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            message: message.into(),
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn level(&self) -> EventLevel {
        self.level
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for LogEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.timestamp.format("%H:%M:%S"), self.message)
    }
}

/// Shared, append-only event sequence.
#[derive(Clone)]
pub struct EventLog {
    events: Arc<Mutex<Vec<LogEvent>>>,
    sender: broadcast::Sender<LogEvent>,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLog {
    /// Creates an empty log.
    ///
    /// Live subscribers that fall more than 256 events behind skip ahead
    /// (see [`tokio::sync::broadcast`]); the stored history is unaffected.
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(256);
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            sender,
        }
    }

    pub fn info(&self, message: impl Into<String>) {
        self.append(EventLevel::Info, message.into());
    }

    pub fn warn(&self, message: impl Into<String>) {
        self.append(EventLevel::Warn, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.append(EventLevel::Error, message.into());
    }

    fn append(&self, level: EventLevel, message: String) {
        match level {
            EventLevel::Info => info!("{}", message),
            EventLevel::Warn => warn!("{}", message),
            EventLevel::Error => error!("{}", message),
        }

        let event = LogEvent::new(level, message);
        let mut events = self.events.lock().unwrap_or_else(PoisonError::into_inner);
        // Broadcast under the lock so subscribers see the stored order.
        let _ = self.sender.send(event.clone());
        events.push(event);
    }

    /// Copy of every event appended so far, oldest first.
    pub fn snapshot(&self) -> Vec<LogEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Messages only, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|e| e.message.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Receives every event appended after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<LogEvent> {
        self.sender.subscribe()
    }
}
