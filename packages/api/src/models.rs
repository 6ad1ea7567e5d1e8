//! # Wire models for the backend endpoints
//!
//! Request/response bodies, camelCase on the wire. The persisted user model
//! ([`store::UserInfo`]) lives in the `store` crate since it outlives the
//! HTTP exchange; everything here exists only for the duration of a call.
//!
//! | Type | Endpoint |
//! |------|----------|
//! | [`LoginRequest`] / [`LoginResponse`] | `POST /login` |
//! | [`RegistrationForm`] | `POST /register` |
//! | [`PendingUser`] | `GET /pending-registrations` |
//! | [`ApprovalRequest`] | `POST /approve` |

use serde::{Deserialize, Serialize};

use store::{StoredSession, UserInfo};

/// Fixed verification token the approval endpoint expects with every
/// approval payload.
pub const APPROVAL_CAPTCHA_TOKEN: &str = "bizledger-admin-console";

/// Credentials sent to `POST /login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Client (company) object optionally attached to a login response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClientInfo {
    pub id: i64,
    pub name: String,
}

/// Successful `POST /login` body.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
    #[serde(default)]
    pub client: Option<ClientInfo>,
}

impl LoginResponse {
    /// Fold the optional client object into the user record and pair it
    /// with the token, producing the session as it will be persisted.
    pub fn into_session(self) -> StoredSession {
        let mut user = self.user;
        if let Some(client) = self.client {
            user.cid = Some(client.id);
            user.client_name = Some(client.name);
        }
        StoredSession {
            token: self.token,
            user,
        }
    }
}

/// Payload for `POST /register`: the account fields plus the registering
/// company's details, which reappear later on the pending record.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub mobile: String,
    pub country: String,
    pub client_name: String,
    pub client_address: String,
    pub client_phone: String,
    pub gst_number: String,
    pub pan: String,
}

/// A registration awaiting administrator review, as returned by
/// `GET /pending-registrations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingUser {
    pub id: i64,
    #[serde(default)]
    pub role: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub mobile: String,
    #[serde(default)]
    pub country: String,
    pub approved: bool,
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub client_address: String,
    #[serde(default)]
    pub client_phone: String,
    #[serde(default)]
    pub gst_number: String,
    #[serde(default)]
    pub pan: String,
}

/// Body for `POST /approve`: the full pending record plus the fixed
/// verification token.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalRequest {
    pub id: i64,
    pub role: i64,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub country: String,
    pub client_name: String,
    pub client_address: String,
    pub client_phone: String,
    pub gst_number: String,
    pub pan: String,
    pub captcha_token: String,
}

impl ApprovalRequest {
    pub fn for_record(record: &PendingUser) -> Self {
        Self {
            id: record.id,
            role: record.role,
            name: record.name.clone(),
            email: record.email.clone(),
            mobile: record.mobile.clone(),
            country: record.country.clone(),
            client_name: record.client_name.clone(),
            client_address: record.client_address.clone(),
            client_phone: record.client_phone.clone(),
            gst_number: record.gst_number.clone(),
            pan: record.pan.clone(),
            captcha_token: APPROVAL_CAPTCHA_TOKEN.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_user() -> UserInfo {
        UserInfo {
            id: 3,
            role: 1,
            name: "Priya".to_string(),
            email: "priya@example.com".to_string(),
            cid: None,
            client_name: None,
        }
    }

    #[test]
    fn test_login_response_merges_client_into_user() {
        let session = LoginResponse {
            token: "tok".to_string(),
            user: base_user(),
            client: Some(ClientInfo {
                id: 42,
                name: "Priya Exports".to_string(),
            }),
        }
        .into_session();

        assert_eq!(session.token, "tok");
        assert_eq!(session.user.cid, Some(42));
        assert_eq!(session.user.client_name.as_deref(), Some("Priya Exports"));
    }

    #[test]
    fn test_login_response_without_client_leaves_user_untouched() {
        let session = LoginResponse {
            token: "tok".to_string(),
            user: base_user(),
            client: None,
        }
        .into_session();

        assert!(session.user.cid.is_none());
        assert!(session.user.client_name.is_none());
    }

    #[test]
    fn test_pending_user_decodes_camel_case() {
        let json = r#"{
            "id": 9,
            "name": "Dev",
            "email": "dev@example.com",
            "mobile": "9999999999",
            "country": "IN",
            "approved": false,
            "clientName": "Dev Stores",
            "clientAddress": "12 Market Rd",
            "clientPhone": "0401234567",
            "gstNumber": "29ABCDE1234F1Z5",
            "pan": "ABCDE1234F"
        }"#;

        let record: PendingUser = serde_json::from_str(json).unwrap();
        assert_eq!(record.client_name, "Dev Stores");
        assert_eq!(record.gst_number, "29ABCDE1234F1Z5");
        assert!(!record.approved);
        // role missing on the wire defaults
        assert_eq!(record.role, 0);
    }

    #[test]
    fn test_approval_request_carries_fixed_token() {
        let record: PendingUser = serde_json::from_str(
            r#"{"id":1,"name":"A","email":"a@b.c","approved":false}"#,
        )
        .unwrap();

        let request = ApprovalRequest::for_record(&record);
        assert_eq!(request.id, 1);
        assert_eq!(request.captcha_token, APPROVAL_CAPTCHA_TOKEN);

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["captchaToken"], APPROVAL_CAPTCHA_TOKEN);
        assert!(body.get("clientName").is_some());
    }
}
