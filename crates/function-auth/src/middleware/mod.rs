//! HTTP middleware.
//!
//! # Components
//!
//! - `auth` - Token authentication for function routes

pub mod auth;

pub use auth::{require_function_auth, AccessExt};
