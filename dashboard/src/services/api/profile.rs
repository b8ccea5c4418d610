//! # Developer Profile Endpoints
//!
//! The profile payload is owned by the backend and treated as opaque JSON.

use reqwest::Method;
use serde_json::Value;

use super::client::{ApiClient, Retry};
use crate::core::error::Result;

/// Fetch the developer profile.
pub async fn developer_profile(
    client: &ApiClient,
    token: Option<&str>,
    retry: Retry,
) -> Result<Value> {
    client
        .get_json(&client.url("/developers/profile"), token, retry)
        .await
}

/// Update the developer profile.
pub async fn update_developer_profile(
    client: &ApiClient,
    profile: &Value,
    token: Option<&str>,
) -> Result<Value> {
    client
        .request_json(
            Method::PUT,
            &client.url("/developers/profile"),
            Some(profile),
            token,
        )
        .await
}
