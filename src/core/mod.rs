//! Core components of the `equity-metrics` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`MetricsClient`] and its builder.
//! - The primary [`MetricsError`] type and its [`ErrorKind`] taxonomy.
//! - Lenient numeric coercion shared by every payload parser.

/// The main client (`MetricsClient`), builder, and defaults.
pub mod client;
/// Lenient numeric coercion (`safe_numeric`).
pub mod conversions;
/// The primary error type (`MetricsError`) for the crate.
pub mod error;

// convenient re-exports so most code can just `use crate::core::MetricsClient`
pub use client::{MetricsClient, MetricsClientBuilder};
pub use error::{ErrorKind, MetricsError, Provider};
