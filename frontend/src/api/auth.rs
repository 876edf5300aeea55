//! Login, token verification and logout against `/api/auth`.

use gloo_net::http::Request;

use common::model::auth::{LoginRequest, Token, Verification};

use super::{error_from_response, token_store, FetchError, API_BASE};

/// Exchanges credentials for a bearer token. On success the token is also
/// written to the token store before it is returned.
pub async fn login(email: &str, password: &str) -> Result<String, FetchError> {
    let body = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };
    let response = Request::post(&format!("{}/auth/login", API_BASE))
        .json(&body)?
        .send()
        .await?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    let token: Token = response.json().await?;
    token_store::set(&token.access_token);
    Ok(token.access_token)
}

/// Asks the server whether `token` is still good.
///
/// A 401 means the token is invalid or expired — that is a verdict, not a
/// failure, and comes back as `valid: false`. Only transport-level problems
/// (or unexpected statuses) are errors.
pub async fn verify_token(token: &str) -> Result<Verification, FetchError> {
    let response = Request::post(&format!("{}/auth/verify-token", API_BASE))
        .query([("token", token)])
        .send()
        .await?;

    if response.ok() {
        Ok(response.json().await?)
    } else if response.status() == 401 {
        Ok(Verification::invalid())
    } else {
        Err(error_from_response(response).await)
    }
}

/// Drops the stored token. Purely local, nothing to fail.
pub fn logout() {
    token_store::clear();
}
