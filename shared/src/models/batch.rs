//! Batch Model
//!
//! A batch groups paid orders into a single supplier purchase. Aggregate
//! quantities are never stored on the batch; they are recomputed from the
//! member orders on demand.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::order::Order;

/// Supplier batch lifecycle.
///
/// Forward-only: DRAFT -> ORDERED -> RECEIVED. RECEIVED is terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BatchStatus {
    #[default]
    Draft,
    Ordered,
    Received,
}

impl BatchStatus {
    /// States reachable from this one. Does not include the self-transition,
    /// which is always legal (metadata-only edits echo the current status).
    pub fn allowed_transitions(&self) -> &'static [BatchStatus] {
        match self {
            Self::Draft => &[Self::Ordered],
            Self::Ordered => &[Self::Received],
            Self::Received => &[],
        }
    }

    /// Whether a transition to `next` may be submitted.
    pub fn can_transition_to(&self, next: BatchStatus) -> bool {
        *self == next || self.allowed_transitions().contains(&next)
    }
}

/// Supplier batch entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Batch {
    pub id: String,
    /// Sequential number assigned by the backend
    pub batch_number: u32,
    pub status: BatchStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_order_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_delivery: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Member orders, expanded by the backend on detail endpoints
    #[serde(default)]
    pub orders: Vec<Order>,
    pub created_at: DateTime<Utc>,
}

/// Create batch payload
///
/// The client never sends a status at creation; the backend decides whether
/// a new batch starts as DRAFT or ORDERED. Supplier fields are passed
/// through unvalidated.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BatchCreate {
    pub order_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_delivery: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Update batch payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BatchUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BatchStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_delivery: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
