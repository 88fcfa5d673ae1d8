//! Request/response data transfer objects

pub mod auth;
pub mod wallet;
pub mod payment;
pub mod donation;
pub mod investment;
pub mod savings;

use serde::Serialize;

/// Generic acknowledgement body
#[derive(Debug, Serialize)]
pub struct AckResponse {
    pub message: String,
}

impl AckResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
