//! Promo Codes API

use shared::models::{PromoCode, PromoCodeCreate, PromoCodeUpdate};

use crate::client::MidaClient;
use crate::error::ClientResult;

impl MidaClient {
    /// All promo codes.
    pub async fn promo_codes(&self) -> ClientResult<Vec<PromoCode>> {
        self.gateway().get("/api/admin/promo-codes").await
    }

    /// Create a promo code. The code is upper-cased before sending so
    /// backend lookups stay case-insensitive.
    pub async fn create_promo_code(&self, create: &PromoCodeCreate) -> ClientResult<PromoCode> {
        let mut create = create.clone();
        create.code = create.code.trim().to_uppercase();
        self.gateway().post("/api/admin/promo-codes", &create).await
    }

    /// Update a promo code.
    pub async fn update_promo_code(
        &self,
        id: &str,
        update: &PromoCodeUpdate,
    ) -> ClientResult<PromoCode> {
        self.gateway()
            .put(&format!("/api/admin/promo-codes/{id}"), update)
            .await
    }

    /// Delete a promo code.
    pub async fn delete_promo_code(&self, id: &str) -> ClientResult<()> {
        self.gateway()
            .delete(&format!("/api/admin/promo-codes/{id}"))
            .await
    }

    /// Flip a code's active flag without touching the rest of it.
    pub async fn toggle_promo_code(&self, id: &str) -> ClientResult<PromoCode> {
        self.gateway()
            .post_empty(&format!("/api/admin/promo-codes/{id}/toggle"))
            .await
    }
}
