//! Auth API

use shared::client::{LoginRequest, LoginResponse};

use crate::client::MidaClient;
use crate::error::ClientResult;

impl MidaClient {
    /// Verify the admin token with the backend and store it on success.
    pub async fn login(&self, token: &str) -> ClientResult<()> {
        let request = LoginRequest {
            token: token.to_string(),
        };

        let response: LoginResponse = self
            .gateway()
            .post("/api/admin/login", &request)
            .await?;

        self.gateway().session().set(&response.token)?;
        tracing::info!("Admin session established");
        Ok(())
    }

    /// Drop the stored session. Purely local; the token is a pre-shared
    /// secret the backend does not invalidate.
    pub fn logout(&self) -> ClientResult<()> {
        self.gateway().session().clear()?;
        tracing::info!("Admin session cleared");
        Ok(())
    }
}
