//! # App Management Endpoints
//!
//! Registered-application CRUD, API key regeneration, and plan upgrade.

use reqwest::Method;
use serde_json::Value;
use shared::{AppRecord, AppResponse, CreateAppRequest, UpdateAppRequest, UpgradeRequest};

use super::client::{ApiClient, Retry};
use crate::core::error::Result;

/// One-time handle on a freshly generated API key.
///
/// Creation and key regeneration are the only moments the full key may be
/// shown; [`reveal`](Self::reveal) consumes the grant, so it can be displayed
/// at most once. Every other surface works with the masked form.
#[derive(Debug)]
pub struct ApiKeyGrant {
    key: String,
}

impl ApiKeyGrant {
    pub(crate) fn new(key: String) -> Self {
        Self { key }
    }

    /// Take the full key, consuming the grant.
    pub fn reveal(self) -> String {
        self.key
    }
}

/// List the developer's registered apps.
pub async fn list_apps(
    client: &ApiClient,
    token: Option<&str>,
    retry: Retry,
) -> Result<Vec<AppRecord>> {
    client.get_json(&client.url("/apps"), token, retry).await
}

/// Register a new app. The response carries the full API key, once.
#[tracing::instrument(skip(client, token))]
pub async fn create_app(
    client: &ApiClient,
    name: &str,
    token: Option<&str>,
) -> Result<AppResponse> {
    let body = ApiClient::to_body(&CreateAppRequest {
        name: name.to_string(),
    })?;
    client
        .request_json(Method::POST, &client.url("/apps"), Some(&body), token)
        .await
}

/// Rename an app.
pub async fn update_app(
    client: &ApiClient,
    app_id: &str,
    name: &str,
    token: Option<&str>,
) -> Result<AppResponse> {
    let body = ApiClient::to_body(&UpdateAppRequest {
        name: name.to_string(),
    })?;
    let url = client.url(&format!("/apps/{}", app_id));
    client
        .request_json(Method::PUT, &url, Some(&body), token)
        .await
}

/// Delete an app.
#[tracing::instrument(skip(client, token))]
pub async fn delete_app(
    client: &ApiClient,
    app_id: &str,
    token: Option<&str>,
) -> Result<AppResponse> {
    let url = client.url(&format!("/apps/{}", app_id));
    client.request_json(Method::DELETE, &url, None, token).await
}

/// Regenerate an app's API key. The response carries the new full key, once;
/// the previous key stops being the displayable one.
#[tracing::instrument(skip(client, token))]
pub async fn regenerate_key(
    client: &ApiClient,
    app_id: &str,
    token: Option<&str>,
) -> Result<AppResponse> {
    let url = client.url(&format!("/apps/{}/regenerate-key", app_id));
    client.request_json(Method::POST, &url, None, token).await
}

/// Upgrade the developer's plan.
pub async fn upgrade_plan(
    client: &ApiClient,
    request: &UpgradeRequest,
    token: Option<&str>,
) -> Result<Value> {
    let body = ApiClient::to_body(request)?;
    // The deployed backend capitalizes this one route.
    client
        .request_json(Method::POST, &client.url("/Apps/upgrade"), Some(&body), token)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> ApiClient {
        let config = ClientConfig {
            base_url: server.uri(),
            ..ClientConfig::default()
        };
        ApiClient::new(&config)
    }

    fn app_body(api_key: &str) -> serde_json::Value {
        serde_json::json!({
            "succeeded": true,
            "message": "ok",
            "id": "a1",
            "name": "My App",
            "apiKey": api_key,
            "developerId": "d1",
            "createdAt": "2025-06-01T12:00:00Z"
        })
    }

    #[tokio::test]
    async fn test_create_app_posts_name_with_bearer() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/apps"))
            .and(header("Authorization", "Bearer tok-123"))
            .and(body_json(serde_json::json!({"name": "My App"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(app_body("prs_1a2b3c4d5e6f")))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let response = create_app(&client, "My App", Some("tok-123")).await.unwrap();

        assert_eq!(response.app.api_key, "prs_1a2b3c4d5e6f");
    }

    #[tokio::test]
    async fn test_regenerate_key_hits_nested_route() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/apps/a1/regenerate-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(app_body("prs_new99999")))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let response = regenerate_key(&client, "a1", Some("tok-123")).await.unwrap();

        assert_eq!(response.app.api_key, "prs_new99999");
    }

    #[tokio::test]
    async fn test_upgrade_plan_uses_capitalized_route() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/Apps/upgrade"))
            .and(body_json(serde_json::json!({
                "tier": "pro",
                "currency": "USD"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let request = UpgradeRequest {
            tier: "pro".to_string(),
            custom_rate_limit: None,
            currency: "USD".to_string(),
        };
        let result = upgrade_plan(&client, &request, Some("tok-123")).await.unwrap();

        assert_eq!(result["ok"], true);
    }

    #[test]
    fn test_api_key_grant_reveals_once_by_move() {
        let grant = ApiKeyGrant::new("prs_1a2b3c4d5e6f".to_string());
        let key = grant.reveal();
        assert_eq!(key, "prs_1a2b3c4d5e6f");
        // `grant` is consumed here; a second reveal does not compile.
    }
}
