//! Batches API
//!
//! Creating a batch moves the selected orders out of the to-order backlog
//! (PAID -> ORDERED on the backend), so callers should re-fetch the
//! batches, backlog, and orders lists after a successful write; the client
//! never mutates local state optimistically.

use chrono::Utc;

use shared::models::{Batch, BatchCreate, BatchUpdate};

use crate::client::MidaClient;
use crate::error::{ClientError, ClientResult};
use crate::export::{batch_csv, batch_csv_filename};

/// Client-side CSV export of a batch's purchase rows.
#[derive(Debug, Clone)]
pub struct CsvExport {
    pub filename: String,
    pub content: String,
}

impl MidaClient {
    /// All supplier batches.
    pub async fn batches(&self) -> ClientResult<Vec<Batch>> {
        self.gateway().get("/api/admin/batches").await
    }

    /// One batch with its member orders expanded.
    pub async fn batch(&self, id: &str) -> ClientResult<Batch> {
        self.gateway().get(&format!("/api/admin/batches/{id}")).await
    }

    /// Create a batch from the selected order IDs.
    ///
    /// Rejected locally when no orders are selected; nothing reaches the
    /// network. Supplier fields are optional and passed through as-is.
    pub async fn create_batch(&self, create: &BatchCreate) -> ClientResult<Batch> {
        if create.order_ids.is_empty() {
            return Err(ClientError::Validation(
                "Select at least one order for the batch".to_string(),
            ));
        }

        let batch: Batch = self.gateway().post("/api/admin/batches", create).await?;
        tracing::info!(
            batch_number = batch.batch_number,
            orders = create.order_ids.len(),
            "Batch created"
        );
        Ok(batch)
    }

    /// Update a batch's status and supplier metadata.
    ///
    /// A requested status change is validated against the transition table
    /// before anything is sent; metadata-only updates always pass.
    pub async fn update_batch(&self, current: &Batch, update: &BatchUpdate) -> ClientResult<Batch> {
        if let Some(next) = update.status {
            if !current.status.can_transition_to(next) {
                return Err(ClientError::Validation(format!(
                    "Batch cannot move from {:?} to {next:?}",
                    current.status
                )));
            }
        }

        self.gateway()
            .put(&format!("/api/admin/batches/{}", current.id), update)
            .await
    }

    /// Render a batch's supplier purchase rows as CSV, dated today.
    pub fn export_batch_csv(&self, batch: &Batch) -> CsvExport {
        CsvExport {
            filename: batch_csv_filename(batch, Utc::now().date_naive()),
            content: batch_csv(batch),
        }
    }
}
