//! Authentication extractors.
//!
//! Access control is a literal comparison against the configured admin key.
//! When no key is configured every request is let through.

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

use crate::error::AppError;
use crate::AppState;

/// Header carrying the admin key on catalog mutations.
pub const ADMIN_KEY_HEADER: &str = "x-admin-key";

/// Compare a supplied key against the configured one.
///
/// Missing or empty keys are `Unauthorized`; a mismatch is `Forbidden`.
pub fn check_admin_key(expected: Option<&str>, supplied: Option<&str>) -> Result<(), AppError> {
    let Some(expected) = expected else {
        return Ok(());
    };

    match supplied {
        None | Some("") => Err(AppError::Unauthorized),
        Some(key) if key == expected => Ok(()),
        Some(_) => Err(AppError::Forbidden),
    }
}

/// Admin access proven by the `key` query parameter.
#[derive(Debug, Clone)]
pub struct AdminQueryKey;

#[derive(Debug, Deserialize)]
struct KeyParam {
    key: Option<String>,
}

impl FromRequestParts<AppState> for AdminQueryKey {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // An unparseable query string is treated as a missing key
        let supplied = Query::<KeyParam>::try_from_uri(&parts.uri)
            .ok()
            .and_then(|Query(param)| param.key);

        check_admin_key(state.config.admin_key.as_deref(), supplied.as_deref())?;
        Ok(AdminQueryKey)
    }
}

/// Admin access proven by the `x-admin-key` header.
#[derive(Debug, Clone)]
pub struct AdminHeaderKey;

impl FromRequestParts<AppState> for AdminHeaderKey {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let supplied = parts
            .headers
            .get(ADMIN_KEY_HEADER)
            .and_then(|value| value.to_str().ok());

        check_admin_key(state.config.admin_key.as_deref(), supplied)?;
        Ok(AdminHeaderKey)
    }
}
