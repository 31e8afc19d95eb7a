//! Dashboard Analytics API

use shared::client::AnalyticsResponse;

use crate::client::MidaClient;
use crate::error::ClientResult;

impl MidaClient {
    /// Dashboard numbers: total orders, paid orders, revenue.
    pub async fn analytics(&self) -> ClientResult<AnalyticsResponse> {
        self.gateway().get("/api/admin/analytics").await
    }
}
