//! # TrustGate Core
//!
//! Core types and address extraction for the TrustGate adapter.
//!
//! This crate provides the fundamental building blocks used across all TrustGate
//! components, with no I/O of its own:
//!
//! - **Domain Types**: TrustScore, TrustResult
//! - **Addresses**: EvmAddress (shape-checked, never checksummed) and free-text extraction
//! - **Errors**: CoreError

#![warn(missing_docs)]

pub mod address;
pub mod error;
pub mod types;

// Re-export commonly used items
pub use address::{extract_address, EvmAddress};
pub use error::{CoreError, Result};
pub use types::{TrustResult, TrustScore};
