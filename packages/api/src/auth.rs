//! Authentication calls: login and registration.

use store::StoredSession;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{LoginRequest, LoginResponse, RegistrationForm};

impl ApiClient {
    /// `POST /login`. On success the optional client object is merged into
    /// the user record and the client's bearer token is updated, so
    /// follow-up calls on this client are already authenticated. Persisting
    /// the returned session is the caller's job.
    pub async fn login(&self, email: &str, password: &str) -> Result<StoredSession, ApiError> {
        let request = LoginRequest {
            email: email.trim().to_lowercase(),
            password: password.to_string(),
        };
        let response: LoginResponse = self.post("/login", &request).await?;
        let session = response.into_session();
        self.set_token(Some(session.token.clone()));
        Ok(session)
    }

    /// `POST /register`. The new account lands in the pending-registration
    /// queue until an administrator approves it.
    pub async fn register(&self, form: &RegistrationForm) -> Result<(), ApiError> {
        self.post_empty("/register", form).await
    }
}
