//! Functional core for todotable.
//!
//! Domain types, the single-table key encoding, the table client seam and
//! the user/todo stores built on top of it.

pub mod auth;
pub mod serde;
pub mod storage;
pub mod todo;
pub mod user;

#[cfg(test)]
pub(crate) mod testing;
