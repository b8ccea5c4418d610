//! # API Client
//!
//! Main HTTP client for backend API communication.

use std::time::Duration;

use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::core::error::{AppError, Result};

/// Retry policy for read-type calls.
///
/// Mutations are never retried automatically; a read may opt into exactly one
/// retry at its call site. The retry is uniform across failure kinds, the same
/// way non-success statuses are treated uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Retry {
    #[default]
    None,
    Once,
}

/// HTTP client for communicating with the Prismon backend API.
///
/// Holds no mutable state: the inner `reqwest::Client` is a connection pool
/// that is safe to share and invoke concurrently from any number of call
/// sites without locking.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client from configuration.
    ///
    /// The client is configured with a request timeout to prevent callers
    /// hanging on an unresponsive backend.
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.base_url.clone(),
        }
    }

    /// Build an absolute URL from a path under the configured base URL.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Perform one network call.
    ///
    /// `Content-Type: application/json` is sent iff a body is present, and
    /// `Authorization: Bearer <token>` iff a token is supplied. Any non-2xx
    /// response is normalized into [`AppError::Http`] carrying the status and
    /// the body text (falling back to the canonical status reason when the
    /// body is empty).
    pub(crate) async fn execute(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
        bearer: Option<&str>,
    ) -> Result<reqwest::Response> {
        let mut request = self.client.request(method, url);

        if let Some(body) = body {
            request = request.json(body);
        }
        if let Some(token) = bearer {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body_text = response.text().await.unwrap_or_default();
        Err(http_error(status, body_text))
    }

    /// Execute and parse the response body into a typed DTO.
    ///
    /// A 2xx body that does not match `T` is a [`AppError::Schema`] failure,
    /// never a silently defaulted value.
    pub(crate) async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
        bearer: Option<&str>,
    ) -> Result<T> {
        let response = self.execute(method, url, body, bearer).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        serde_json::from_slice(&bytes)
            .map_err(|e| AppError::Schema(format!("unexpected response shape: {}", e)))
    }

    /// GET with a per-call-site retry policy.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        bearer: Option<&str>,
        retry: Retry,
    ) -> Result<T> {
        match self.request_json(Method::GET, url, None, bearer).await {
            Ok(value) => Ok(value),
            Err(err) if retry == Retry::Once => {
                tracing::debug!(url, error = %err, "read failed, retrying once");
                self.request_json(Method::GET, url, None, bearer).await
            }
            Err(err) => Err(err),
        }
    }

    /// Serialize a request DTO into a JSON body.
    pub(crate) fn to_body<B: Serialize>(body: &B) -> Result<Value> {
        serde_json::to_value(body)
            .map_err(|e| AppError::Schema(format!("request serialization: {}", e)))
    }
}

fn http_error(status: StatusCode, body_text: String) -> AppError {
    let body = if body_text.trim().is_empty() {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    } else {
        body_text
    };

    AppError::Http {
        status: status.as_u16(),
        body,
    }
}

// Implement ApiService trait for ApiClient
#[async_trait::async_trait]
impl crate::core::service::ApiService for ApiClient {
    async fn login(&self, request: shared::LoginRequest) -> Result<shared::AuthResponse> {
        crate::services::api::auth::login(self, &request).await
    }

    async fn register(&self, request: shared::RegisterRequest) -> Result<shared::AuthResponse> {
        crate::services::api::auth::register(self, &request).await
    }

    async fn list_apps(&self, token: Option<&str>) -> Result<Vec<shared::AppRecord>> {
        crate::services::api::apps::list_apps(self, token, Retry::None).await
    }

    async fn create_app(&self, name: &str, token: Option<&str>) -> Result<shared::AppResponse> {
        crate::services::api::apps::create_app(self, name, token).await
    }

    async fn update_app(
        &self,
        app_id: &str,
        name: &str,
        token: Option<&str>,
    ) -> Result<shared::AppResponse> {
        crate::services::api::apps::update_app(self, app_id, name, token).await
    }

    async fn delete_app(&self, app_id: &str, token: Option<&str>) -> Result<shared::AppResponse> {
        crate::services::api::apps::delete_app(self, app_id, token).await
    }

    async fn regenerate_key(
        &self,
        app_id: &str,
        token: Option<&str>,
    ) -> Result<shared::AppResponse> {
        crate::services::api::apps::regenerate_key(self, app_id, token).await
    }

    async fn user_analytics(
        &self,
        app_id: &str,
        token: Option<&str>,
    ) -> Result<shared::UserAnalytics> {
        crate::services::api::analytics::user_analytics(self, app_id, token, Retry::None).await
    }

    async fn solana_balance(
        &self,
        public_key: &str,
        token: Option<&str>,
    ) -> Result<shared::BalanceResponse> {
        crate::services::api::solana::balance(self, public_key, token, Retry::None).await
    }

    async fn solana_token_accounts(
        &self,
        public_key: &str,
        token: Option<&str>,
    ) -> Result<Vec<shared::TokenAccount>> {
        crate::services::api::solana::token_accounts(self, public_key, token, Retry::None).await
    }

    async fn solana_transfer(
        &self,
        request: shared::TransferRequest,
        token: Option<&str>,
    ) -> Result<shared::SignatureResponse> {
        crate::services::api::solana::transfer(self, &request, token).await
    }

    async fn solana_mint(
        &self,
        request: shared::MintRequest,
        token: Option<&str>,
    ) -> Result<shared::SignatureResponse> {
        crate::services::api::solana::mint(self, &request, token).await
    }

    async fn solana_transaction(&self, signature: &str, token: Option<&str>) -> Result<Value> {
        crate::services::api::solana::transaction(self, signature, token, Retry::None).await
    }

    async fn upgrade_plan(
        &self,
        request: shared::UpgradeRequest,
        token: Option<&str>,
    ) -> Result<Value> {
        crate::services::api::apps::upgrade_plan(self, &request, token).await
    }

    async fn developer_profile(&self, token: Option<&str>) -> Result<Value> {
        crate::services::api::profile::developer_profile(self, token, Retry::None).await
    }

    async fn update_developer_profile(
        &self,
        profile: Value,
        token: Option<&str>,
    ) -> Result<Value> {
        crate::services::api::profile::update_developer_profile(self, &profile, token).await
    }
}
