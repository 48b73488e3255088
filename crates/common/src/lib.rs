//! Shared types for the café till workspace.

mod types;

pub use types::OrderId;
