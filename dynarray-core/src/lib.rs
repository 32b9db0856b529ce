//! Core types for the dynarray containers.
//!
//! This crate holds the parts shared by the typed and the type-erased
//! containers: the error type, the growth law, the index checks and the
//! allocation helper. Keeping them in one place is what guarantees that both
//! containers behave identically for the same sequence of operations.

pub mod alloc;
pub mod bounds;
pub mod error;
pub mod growth;
pub mod helper;
#[cfg(feature = "logging")]
pub mod logger;

pub use error::{Error, Result};
pub use growth::next_capacity;
pub use helper::{Search, TryClone};
