//! Site Config API

use shared::models::{ConfigEntry, ConfigUpdate};

use crate::client::MidaClient;
use crate::error::ClientResult;

impl MidaClient {
    /// All site configuration entries.
    pub async fn config_entries(&self) -> ClientResult<Vec<ConfigEntry>> {
        self.gateway().get("/api/admin/config").await
    }

    /// Upsert one configuration key. Values are free-form JSON; callers
    /// re-fetch the list afterwards instead of merging locally.
    pub async fn update_config(&self, update: &ConfigUpdate) -> ClientResult<ConfigEntry> {
        self.gateway().put("/api/admin/config", update).await
    }
}
