//! # Authentication Endpoints
//!
//! Login and registration. These are the only unauthenticated calls the
//! client makes; both answer with [`AuthResponse`] whether the backend
//! accepted or rejected the credentials.

use reqwest::Method;
use shared::{AuthResponse, LoginRequest, RegisterRequest};

use super::client::ApiClient;
use crate::core::error::Result;

/// Login with email and password.
#[tracing::instrument(skip(client, request), fields(email = %request.email))]
pub async fn login(client: &ApiClient, request: &LoginRequest) -> Result<AuthResponse> {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let body = ApiClient::to_body(request)?;
    let result: Result<AuthResponse> = client
        .request_json(Method::POST, &client.url("/auth/login"), Some(&body), None)
        .await;

    match &result {
        Ok(response) => {
            tracing::info!(
                succeeded = response.succeeded,
                duration_ms = start.elapsed().as_millis(),
                "Login request completed"
            );
        }
        Err(err) => {
            tracing::warn!(
                error = %err,
                duration_ms = start.elapsed().as_millis(),
                "Login request failed"
            );
        }
    }
    result
}

/// Register a new developer account.
pub async fn register(client: &ApiClient, request: &RegisterRequest) -> Result<AuthResponse> {
    let body = ApiClient::to_body(request)?;
    client
        .request_json(Method::POST, &client.url("/auth/register"), Some(&body), None)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_login_posts_credentials_and_parses_response() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .and(body_json(serde_json::json!({
                "email": "dev@example.com",
                "password": "secret1"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "succeeded": true,
                "message": "Login successful",
                "developerId": "d1",
                "token": "hdr.payload.sig",
                "isOnboardingComplete": false
            })))
            .expect(1)
            .mount(&server)
            .await;

        let config = ClientConfig {
            base_url: server.uri(),
            ..ClientConfig::default()
        };
        let client = ApiClient::new(&config);

        let response = login(
            &client,
            &LoginRequest {
                email: "dev@example.com".to_string(),
                password: "secret1".to_string(),
            },
        )
        .await
        .unwrap();

        assert!(response.succeeded);
        assert_eq!(response.token.as_deref(), Some("hdr.payload.sig"));
    }

    #[tokio::test]
    async fn test_register_sends_confirmation_field() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/register"))
            .and(body_json(serde_json::json!({
                "email": "dev@example.com",
                "password": "secret1",
                "confirmPassword": "secret1"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "succeeded": true,
                "message": "Registered",
                "developerId": "d1",
                "token": "hdr.payload.sig"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let config = ClientConfig {
            base_url: server.uri(),
            ..ClientConfig::default()
        };
        let client = ApiClient::new(&config);

        let response = register(
            &client,
            &RegisterRequest {
                email: "dev@example.com".to_string(),
                password: "secret1".to_string(),
                confirm_password: "secret1".to_string(),
            },
        )
        .await
        .unwrap();

        assert!(response.succeeded);
    }
}
