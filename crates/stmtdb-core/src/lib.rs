//! Core types and traits for StatementDB storage backends.
//!
//! This crate provides the `StatementStore` trait and all associated types,
//! enabling pluggable storage implementations in separate crates.

pub mod models;
pub mod storage;

// Re-export key types at crate root for convenience
pub use models::{InvalidIdentifier, Period, Statement, StatementId, StatementSummary};
pub use storage::{PutOutcome, ScanProjection, StatementStore, StorageError};
