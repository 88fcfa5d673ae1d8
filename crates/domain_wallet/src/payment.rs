//! Payment recipient and status types

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::WalletError;

/// Where a payment is going
///
/// At least one of the three references must be present; the original
/// request may carry any combination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    /// UPI handle (e.g. "alice@upi")
    pub upi: Option<String>,
    /// Phone number
    pub phone: Option<String>,
    /// Free-text display name
    pub name: Option<String>,
}

impl Recipient {
    /// Creates a recipient, rejecting an entirely empty reference
    pub fn new(
        upi: Option<String>,
        phone: Option<String>,
        name: Option<String>,
    ) -> Result<Self, WalletError> {
        let recipient = Self { upi, phone, name };
        if recipient.label().is_none() {
            return Err(WalletError::MissingRecipient);
        }
        Ok(recipient)
    }

    /// Best display label: name, then UPI handle, then phone
    pub fn label(&self) -> Option<&str> {
        self.name
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .or_else(|| self.upi.as_deref().filter(|s| !s.trim().is_empty()))
            .or_else(|| self.phone.as_deref().filter(|s| !s.trim().is_empty()))
    }
}

impl fmt::Display for Recipient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label().unwrap_or("unknown recipient"))
    }
}

/// Lifecycle of a payment record
///
/// Payments settle synchronously; a row only exists once the round-up
/// committed, so `Completed` is the normal terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Completed,
    Failed,
}

impl PaymentStatus {
    /// Returns the snake_case name used in persisted rows
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Completed => "completed",
            PaymentStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
