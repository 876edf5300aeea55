//! Persisted bearer token, one string under one fixed key.
//!
//! No expiry is tracked here; whether the token is still good is only ever
//! the server's verdict (`auth::verify_token`).

use gloo_storage::{LocalStorage, Storage};

const TOKEN_KEY: &str = "glimpse_token";

pub fn get() -> Option<String> {
    LocalStorage::get(TOKEN_KEY).ok()
}

pub fn set(token: &str) {
    if let Err(err) = LocalStorage::set(TOKEN_KEY, token) {
        gloo_console::error!("failed to persist auth token", err.to_string());
    }
}

pub fn clear() {
    LocalStorage::delete(TOKEN_KEY);
}
