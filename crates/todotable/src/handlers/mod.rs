//! HTTP handlers for the todo API and health probes.

mod error;
pub mod health;
pub mod todos;

pub use error::AppError;
