//! Shared types for the MIDA admin tooling
//!
//! Data model, API DTOs, and pure order-aggregation logic shared between
//! the admin client and the storefront backend contract.

pub mod client;
pub mod models;
pub mod order;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

// Aggregation re-exports (for the to-order workflow)
pub use order::summary::{ToOrderSummary, summarize};
