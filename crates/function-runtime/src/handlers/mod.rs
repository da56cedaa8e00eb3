//! HTTP request handlers for the function runtime.

pub mod health;
pub mod invoke;

pub use health::health_check;
pub use invoke::invoke;
