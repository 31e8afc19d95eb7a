//! Order Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payment lifecycle of a customer order.
///
/// PENDING orders await payment confirmation; PAID orders are eligible for
/// the to-order backlog; ORDERED orders belong to a supplier batch;
/// DELIVERED orders are fulfilled. FAILED is terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Ordered,
    Delivered,
    Failed,
}

/// Minimal product snapshot carried by an order item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductRef {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

/// Order line item
///
/// Belongs to exactly one order. Immutable once the order is paid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product: ProductRef,
    pub color: String,
    pub size: String,
    pub quantity: u32,
    /// Line total computed by the backend (unit price * quantity, after discounts)
    #[serde(default)]
    pub line_total: f64,
}

/// Customer order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub order_number: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    pub customer_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<String>,
    pub payment_status: PaymentStatus,
    pub total: f64,
    #[serde(default)]
    pub discount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promo_code: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    /// Supplier batch this order belongs to, if any. At most one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Update order payload (admin status changes)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<PaymentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_id: Option<String>,
}
