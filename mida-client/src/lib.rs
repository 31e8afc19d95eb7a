//! MIDA Client - HTTP client for the storefront admin API
//!
//! Provides authenticated REST calls to the admin backend, the to-order
//! aggregation workflow, supplier batch lifecycle management, and
//! client-side CSV export for batches.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod http;
pub mod session;

pub use client::MidaClient;
pub use config::{ClientConfig, RetryPolicy};
pub use error::{ClientError, ClientResult};
pub use export::{BATCH_CSV_HEADER, batch_csv, batch_csv_filename, orders_export_filename};
pub use session::{FileSession, MemorySession, SessionStore, SessionStoreError};

// Re-export shared types for convenience
pub use shared::client::{AnalyticsResponse, LoginRequest, LoginResponse, OrdersResponse};
pub use shared::order::summary::ToOrderSummary;
