//! Storage backend implementations.
//!
//! This module provides the concrete `TableClient` for the selected backend.
//! The implementation is selected at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): In-memory table from `todotable_core::storage`
//! - `dynamodb`: AWS DynamoDB table using `aws-sdk-dynamodb`
//!
//! Build with DynamoDB:
//! ```bash
//! cargo build -p todotable --no-default-features --features dynamodb
//! ```

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg(feature = "inmemory")]
pub use todotable_core::storage::InMemoryTable;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbTable;
