//! Request handlers, one module per resource

pub mod health;
pub mod auth;
pub mod wallet;
pub mod payment;
pub mod donation;
pub mod investment;
pub mod savings;
