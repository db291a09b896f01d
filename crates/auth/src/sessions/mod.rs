//! Session storage implementations.

mod inmemory;

pub use inmemory::SessionStore;
