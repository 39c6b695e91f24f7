//! Credentials used to open a trading session.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    api_token: String,
    account_id: String,
}

impl Credentials {
    /// Creates a new set of credentials.
    ///
    /// # Arguments
    ///
    /// * `api_token` - The broker API token.
    /// * `account_id` - The trading account to attach to.
    pub fn new(api_token: impl Into<String>, account_id: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            account_id: account_id.into(),
        }
    }

    pub fn api_token(&self) -> &str {
        &self.api_token
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// True when either field is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.api_token.trim().is_empty() || self.account_id.trim().is_empty()
    }
}

// The token never goes to the logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_token", &"***")
            .field("account_id", &self.account_id)
            .finish()
    }
}
