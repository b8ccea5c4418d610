//! # Analytics Endpoints
//!
//! Per-app usage analytics.

use shared::UserAnalytics;

use super::client::{ApiClient, Retry};
use crate::core::error::Result;

/// Get user analytics for an app.
pub async fn user_analytics(
    client: &ApiClient,
    app_id: &str,
    token: Option<&str>,
    retry: Retry,
) -> Result<UserAnalytics> {
    let url = client.url(&format!("/analytics/users?appId={}", app_id));
    client.get_json(&url, token, retry).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_user_analytics_queries_by_app_id() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/analytics/users"))
            .and(query_param("appId", "a1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "appId": "a1",
                "totalUsers": 120,
                "activeUsersLast24h": 34,
                "registrationsLast7d": 9
            })))
            .expect(1)
            .mount(&server)
            .await;

        let config = ClientConfig {
            base_url: server.uri(),
            ..ClientConfig::default()
        };
        let client = ApiClient::new(&config);

        let analytics = user_analytics(&client, "a1", Some("tok-123"), Retry::None)
            .await
            .unwrap();

        assert_eq!(analytics.total_users, 120);
    }
}
