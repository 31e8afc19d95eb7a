//! Client-related types shared between the backend contract and the client
//!
//! Request/response DTOs for the admin API endpoints.

use serde::{Deserialize, Serialize};

use crate::models::Order;

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request: the backend verifies a pre-shared admin token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub token: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

// =============================================================================
// List envelopes
// =============================================================================

/// Order list envelope (`GET /api/admin/orders` and the to-order endpoint)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrdersResponse {
    pub orders: Vec<Order>,
}

// =============================================================================
// Dashboard analytics
// =============================================================================

/// Aggregate dashboard numbers computed by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    pub total_orders: u32,
    pub paid_orders: u32,
    pub revenue: f64,
}

// =============================================================================
// Interested-user notifications
// =============================================================================

/// Result of notifying a coming-soon product's interest list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifiedResponse {
    /// Number of emails the backend dispatched
    pub notified: u32,
}
