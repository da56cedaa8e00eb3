//! Function Runtime Library
//!
//! HTTP front of a serverless function instance. Every request except the
//! health probe passes through `function_auth` before the function handler
//! runs.
//!
//! # Modules
//!
//! - `config` - Runtime configuration from environment
//! - `handlers` - HTTP request handlers
//! - `routes` - Axum router setup

pub mod config;
pub mod handlers;
pub mod routes;
