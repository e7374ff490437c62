//! Request and response payloads for the auth API. Payloads are built from
//! form state at submit time, sent once and dropped; credentials are never
//! stored anywhere else.

use serde::{Deserialize, Serialize};

/// Account roles the product recognises.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Patient,
    Doctor,
}

impl Role {
    /// Wire values accepted at sign-up, in display order.
    pub const VALUES: &'static [&'static str] = &["patient", "doctor"];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "patient" => Some(Self::Patient),
            "doctor" => Some(Self::Doctor),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful sign-in body. The token is opaque; the client stores it and
/// never inspects it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone_number: String,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::{LoginResponse, RegisterRequest, Role};

    #[test]
    fn register_request_uses_camel_case_keys_and_lowercase_roles() {
        let request = RegisterRequest {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "variables".to_string(),
            phone_number: "+15551234567".to_string(),
            role: Role::Doctor,
        };

        let json = serde_json::to_string(&request).expect("serialize register request");

        assert!(json.contains(r#""firstName":"Ada""#));
        assert!(json.contains(r#""lastName":"Lovelace""#));
        assert!(json.contains(r#""phoneNumber":"+15551234567""#));
        assert!(json.contains(r#""role":"doctor""#));
        assert!(!json.contains("first_name"));
    }

    #[test]
    fn login_response_carries_the_token() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"token":"abc123"}"#).expect("deserialize login response");

        assert_eq!(response.token, "abc123");
    }

    #[test]
    fn role_parses_only_enumerated_values() {
        assert_eq!(Role::parse("patient"), Some(Role::Patient));
        assert_eq!(Role::parse("doctor"), Some(Role::Doctor));
        assert_eq!(Role::parse("admin"), None);
        assert_eq!(Role::parse(""), None);
    }
}
