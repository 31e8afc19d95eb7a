//! Products API

use shared::client::NotifiedResponse;
use shared::models::{InterestedUser, Product, ProductCreate, ProductUpdate};

use crate::client::MidaClient;
use crate::error::ClientResult;

impl MidaClient {
    /// Full catalog, including inactive and coming-soon products.
    pub async fn products(&self) -> ClientResult<Vec<Product>> {
        self.gateway().get("/api/admin/products").await
    }

    /// Create a product. Slug uniqueness is enforced by the backend.
    pub async fn create_product(&self, create: &ProductCreate) -> ClientResult<Product> {
        self.gateway().post("/api/admin/products", create).await
    }

    /// Update a product. The slug is immutable and absent from the payload.
    pub async fn update_product(&self, id: &str, update: &ProductUpdate) -> ClientResult<Product> {
        self.gateway()
            .put(&format!("/api/admin/products/{id}"), update)
            .await
    }

    /// Delete a product.
    pub async fn delete_product(&self, id: &str) -> ClientResult<()> {
        self.gateway()
            .delete(&format!("/api/admin/products/{id}"))
            .await
    }

    /// Buyers who registered interest in a coming-soon product.
    pub async fn interested_users(&self, product_id: &str) -> ClientResult<Vec<InterestedUser>> {
        self.gateway()
            .get(&format!("/api/admin/products/{product_id}/interested-users"))
            .await
    }

    /// Ask the backend to email the product's interest list (typically when
    /// the product becomes purchasable).
    pub async fn notify_interested(&self, product_id: &str) -> ClientResult<NotifiedResponse> {
        self.gateway()
            .post_empty(&format!(
                "/api/admin/products/{product_id}/notify-interested"
            ))
            .await
    }
}
