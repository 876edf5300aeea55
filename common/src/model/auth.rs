use serde::{Deserialize, Serialize};

/// Body of `POST /api/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
}

/// Response of `POST /api/auth/verify-token`. `email` is only present when
/// the token checked out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verification {
    pub valid: bool,
    #[serde(default)]
    pub email: Option<String>,
}

impl Verification {
    /// The verdict the client synthesizes for a token the server rejected
    /// outright (401). Rejection is a normal outcome, not an error.
    pub fn invalid() -> Self {
        Verification {
            valid: false,
            email: None,
        }
    }
}

/// Error body FastAPI-style endpoints attach to non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verification_decodes_with_and_without_email() {
        let ok: Verification =
            serde_json::from_str(r#"{"valid":true,"email":"admin@example.com"}"#).unwrap();
        assert!(ok.valid);
        assert_eq!(ok.email.as_deref(), Some("admin@example.com"));

        let bare: Verification = serde_json::from_str(r#"{"valid":false}"#).unwrap();
        assert_eq!(bare, Verification::invalid());
    }

    #[test]
    fn error_body_tolerates_missing_detail() {
        let body: ErrorBody = serde_json::from_str(r#"{}"#).unwrap();
        assert!(body.detail.is_none());
        let body: ErrorBody =
            serde_json::from_str(r#"{"detail":"Incorrect email or password"}"#).unwrap();
        assert_eq!(body.detail.as_deref(), Some("Incorrect email or password"));
    }
}
