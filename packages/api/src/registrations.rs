//! Pending-registration moderation calls.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{ApprovalRequest, PendingUser};

impl ApiClient {
    /// `GET /pending-registrations?page=&per_page=` (bearer).
    pub async fn pending_registrations(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<PendingUser>, ApiError> {
        self.get(&format!(
            "/pending-registrations?page={page}&per_page={per_page}"
        ))
        .await
    }

    /// `POST /approve` (bearer): the full record plus the fixed token.
    pub async fn approve_registration(&self, request: &ApprovalRequest) -> Result<(), ApiError> {
        self.post_empty("/approve", request).await
    }

    /// `DELETE /pending-user/{id}` (bearer).
    pub async fn reject_registration(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/pending-user/{id}")).await
    }
}
