//! Service layer
//!
//! This module contains the storage accessor:
//! - SQLite access, one connection per operation

pub mod store;

pub use store::{Store, StoreError};
