//! HTTP client for the remote trust-scoring service.
//!
//! This crate provides:
//! - `GateConfig` - immutable adapter configuration (endpoint, credential, chain, threshold)
//! - `TrustClient` - one HTTP GET per call against `/api/v1/score/{address}`
//!
//! The adapter performs exactly one request per invocation: no retry, no
//! backoff, no timeout handling. Failure policy belongs to the callers.

#![warn(missing_docs)]

pub mod client;
pub mod config;
pub mod score;

pub use client::{ClientError, TrustClient, USER_AGENT};
pub use config::{GateConfig, DEFAULT_CHAIN, DEFAULT_MIN_SCORE};
pub use score::ScoreResponse;
