//! Webhook service that reconciles pull request labels.
//!
//! This crate provides:
//! - Environment-driven service configuration
//! - GitHub webhook signature verification
//! - The HTTP server wiring events into the reconciliation engine

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod server;
pub mod signature;

pub use config::Config;
pub use server::{build_router, AppState};
pub use signature::verify_webhook_signature;
