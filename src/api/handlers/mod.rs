//! HTTP handlers.

pub mod export;
pub mod generate;
pub mod handles;
pub mod health;
pub mod history;
pub mod results;
pub mod session;
