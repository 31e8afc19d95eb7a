//! Orders API

use chrono::Utc;

use shared::client::OrdersResponse;
use shared::models::{Order, OrderUpdate};
use shared::order::summary::{ToOrderSummary, summarize};

use crate::client::MidaClient;
use crate::error::ClientResult;
use crate::export::orders_export_filename;

/// The to-order backlog: paid, unbatched orders plus their aggregation.
#[derive(Debug, Clone)]
pub struct ToOrderBacklog {
    pub orders: Vec<Order>,
    pub summary: ToOrderSummary,
}

/// Binary spreadsheet export produced by the backend.
#[derive(Debug, Clone)]
pub struct SpreadsheetExport {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl MidaClient {
    /// All orders, newest first (backend ordering).
    pub async fn orders(&self) -> ClientResult<Vec<Order>> {
        let response: OrdersResponse = self.gateway().get("/api/admin/orders").await?;
        Ok(response.orders)
    }

    /// Update an order (admin status changes).
    pub async fn update_order(&self, id: &str, update: &OrderUpdate) -> ClientResult<Order> {
        self.gateway()
            .put(&format!("/api/admin/orders/{id}"), update)
            .await
    }

    /// Delete an order. Explicit admin action only.
    pub async fn delete_order(&self, id: &str) -> ClientResult<()> {
        self.gateway()
            .delete(&format!("/api/admin/orders/{id}"))
            .await
    }

    /// The to-order backlog with its supplier aggregation.
    ///
    /// The backend returns the eligible set (PAID, unbatched); the summary
    /// is recomputed client-side on every call so it always reflects the
    /// orders actually listed.
    pub async fn to_order_backlog(&self) -> ClientResult<ToOrderBacklog> {
        let response: OrdersResponse = self
            .gateway()
            .get("/api/admin/orders/summary-to-order")
            .await?;

        let summary = summarize(&response.orders);
        Ok(ToOrderBacklog {
            orders: response.orders,
            summary,
        })
    }

    /// Download the backend's spreadsheet export of all orders.
    pub async fn export_orders(&self) -> ClientResult<SpreadsheetExport> {
        let bytes = self.gateway().get_bytes("/api/admin/orders/export").await?;
        Ok(SpreadsheetExport {
            filename: orders_export_filename(Utc::now().date_naive()),
            bytes,
        })
    }
}
