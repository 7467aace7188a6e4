//! # Exohost Library
//!
//! This library exposes the Exohost modules for testing and integration.
//!
//! The main binary uses these modules through the `main.rs` entry point.

pub mod api;
pub mod cli;
pub mod page;

// Re-export exohost_core for convenience
pub use exohost_core;
