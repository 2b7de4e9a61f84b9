//! Core components of the `avantage-rs` client.
//!
//! This module contains the foundational building blocks of the library:
//! - The main [`AvClient`] and its builder.
//! - The primary [`AvError`] type.
//! - The [`Clock`] seam through which all wall-clock reads go.
//! - Internal request plumbing shared by the fetchers.

/// The main client (`AvClient`), builder, and configuration.
pub mod client;
/// The clock abstraction (`Clock`, `SystemClock`).
pub mod clock;
/// The primary error type (`AvError`) for the crate.
pub mod error;
pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::AvClient`
pub use client::{AvClient, AvClientBuilder};
pub use clock::{Clock, SystemClock};
pub use error::AvError;
