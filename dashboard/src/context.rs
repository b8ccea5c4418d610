//! # Dashboard Context
//!
//! The single owning context for the client: configuration, request
//! executor, response cache, durable session store, and session controller.
//! Created once at startup and passed to whatever needs session or data
//! access — there are no ambient globals. Logout tears the session state
//! down through the controller; the context itself stays reusable.
//!
//! Data-bearing operations live here because this is where the cache and the
//! executor meet: reads go through the cache under the request's logical key,
//! and successful mutations invalidate the keys they affect.

use std::sync::Arc;

use serde_json::Value;
use shared::{
    AppRecord, BalanceResponse, MintRequest, SignatureResponse, TokenAccount, TransferRequest,
    UpgradeRequest, UserAnalytics, mask_api_key,
};

use crate::config::ClientConfig;
use crate::core::error::{AppError, Result};
use crate::services::api::apps::ApiKeyGrant;
use crate::services::api::{self, ApiClient, Retry};
use crate::services::cache::ResponseCache;
use crate::session::controller::SessionController;
use crate::session::store::SessionStore;

/// Cache key for the app list.
pub const APPS_KEY: &str = "/apps";
/// Cache key prefix for per-app analytics.
pub const ANALYTICS_KEY_PREFIX: &str = "/analytics/users";
/// Cache key for the developer profile.
pub const PROFILE_KEY: &str = "/developers/profile";

fn analytics_key(app_id: &str) -> String {
    format!("{}?appId={}", ANALYTICS_KEY_PREFIX, app_id)
}

/// Result of an app creation or key regeneration.
///
/// The record's `api_key` field is already masked; the full key lives only in
/// the one-time [`ApiKeyGrant`].
#[derive(Debug)]
pub struct CreatedApp {
    pub app: AppRecord,
    pub api_key: ApiKeyGrant,
}

/// The client's root object: executor, cache, store, and session controller.
pub struct DashboardContext {
    config: ClientConfig,
    api: Arc<ApiClient>,
    cache: Arc<ResponseCache>,
    store: Arc<SessionStore>,
    session: SessionController,
}

impl DashboardContext {
    /// Build a context from explicit configuration.
    pub fn new(config: ClientConfig) -> Self {
        let api = Arc::new(ApiClient::new(&config));
        let cache = Arc::new(ResponseCache::new());
        let store = Arc::new(SessionStore::open(&config.session_file));
        let session = SessionController::new(api.clone(), store.clone(), cache.clone());

        Self {
            config,
            api,
            cache,
            store,
            session,
        }
    }

    /// Build a context from environment variables.
    pub fn from_env() -> Result<Self> {
        let config = ClientConfig::from_env().map_err(AppError::Validation)?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionController {
        &self.session
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Session token at call time; authenticated requests attach it as a
    /// bearer header iff present.
    fn bearer(&self) -> Option<String> {
        self.store.token()
    }

    // region:    --- Apps

    /// The developer's registered apps (cached).
    pub async fn apps(&self) -> Result<Vec<AppRecord>> {
        let token = self.bearer();
        let api = Arc::clone(&self.api);
        self.cache
            .get_or_fetch(APPS_KEY, move || async move {
                api::apps::list_apps(&api, token.as_deref(), Retry::None).await
            })
            .await
    }

    /// Register a new app and hand out its key for the one-time reveal.
    pub async fn create_app(&self, name: &str) -> Result<CreatedApp> {
        lib_utils::validate_not_empty(name, "App name").map_err(AppError::Validation)?;

        let token = self.bearer();
        let response = api::apps::create_app(&self.api, name, token.as_deref()).await?;
        self.cache.invalidate(APPS_KEY);

        Ok(split_key(response.app))
    }

    /// Rename an app.
    pub async fn update_app(&self, app_id: &str, name: &str) -> Result<AppRecord> {
        lib_utils::validate_not_empty(name, "App name").map_err(AppError::Validation)?;

        let token = self.bearer();
        let response = api::apps::update_app(&self.api, app_id, name, token.as_deref()).await?;
        self.cache.invalidate(APPS_KEY);

        Ok(response.app)
    }

    /// Delete an app.
    pub async fn delete_app(&self, app_id: &str) -> Result<AppRecord> {
        let token = self.bearer();
        let response = api::apps::delete_app(&self.api, app_id, token.as_deref()).await?;
        self.cache.invalidate(APPS_KEY);
        self.cache.invalidate_prefix(&analytics_key(app_id));

        Ok(response.app)
    }

    /// Regenerate an app's API key.
    ///
    /// The previous key stops being the displayable one: the list entry is
    /// invalidated and the new key exists only in the returned grant.
    pub async fn regenerate_key(&self, app_id: &str) -> Result<CreatedApp> {
        let token = self.bearer();
        let response = api::apps::regenerate_key(&self.api, app_id, token.as_deref()).await?;
        self.cache.invalidate(APPS_KEY);

        Ok(split_key(response.app))
    }

    /// Upgrade the developer's plan.
    pub async fn upgrade_plan(&self, request: &UpgradeRequest) -> Result<Value> {
        let token = self.bearer();
        api::apps::upgrade_plan(&self.api, request, token.as_deref()).await
    }

    // endregion: --- Apps

    // region:    --- Analytics

    /// User analytics for an app (cached per app).
    pub async fn user_analytics(&self, app_id: &str) -> Result<UserAnalytics> {
        let key = analytics_key(app_id);
        let token = self.bearer();
        let api = Arc::clone(&self.api);
        let app_id = app_id.to_string();
        self.cache
            .get_or_fetch(&key, move || async move {
                api::analytics::user_analytics(&api, &app_id, token.as_deref(), Retry::None).await
            })
            .await
    }

    // endregion: --- Analytics

    // region:    --- Solana

    /// SOL balance of a wallet, in lamports. Not cached: balance views are
    /// explicitly user-triggered.
    pub async fn solana_balance(&self, public_key: &str) -> Result<BalanceResponse> {
        let token = self.bearer();
        api::solana::balance(&self.api, public_key, token.as_deref(), Retry::None).await
    }

    /// Token accounts held by a wallet.
    pub async fn solana_token_accounts(&self, public_key: &str) -> Result<Vec<TokenAccount>> {
        let token = self.bearer();
        api::solana::token_accounts(&self.api, public_key, token.as_deref(), Retry::None).await
    }

    /// Submit a transfer.
    pub async fn solana_transfer(&self, request: &TransferRequest) -> Result<SignatureResponse> {
        let token = self.bearer();
        api::solana::transfer(&self.api, request, token.as_deref()).await
    }

    /// Submit a mint.
    pub async fn solana_mint(&self, request: &MintRequest) -> Result<SignatureResponse> {
        let token = self.bearer();
        api::solana::mint(&self.api, request, token.as_deref()).await
    }

    /// Look up a transaction by signature.
    pub async fn solana_transaction(&self, signature: &str) -> Result<Value> {
        let token = self.bearer();
        api::solana::transaction(&self.api, signature, token.as_deref(), Retry::None).await
    }

    // endregion: --- Solana

    // region:    --- Profile

    /// The developer profile (cached).
    pub async fn developer_profile(&self) -> Result<Value> {
        let token = self.bearer();
        let api = Arc::clone(&self.api);
        self.cache
            .get_or_fetch(PROFILE_KEY, move || async move {
                api::profile::developer_profile(&api, token.as_deref(), Retry::None).await
            })
            .await
    }

    /// Update the developer profile and invalidate its cached copy.
    pub async fn update_developer_profile(&self, profile: &Value) -> Result<Value> {
        let token = self.bearer();
        let updated =
            api::profile::update_developer_profile(&self.api, profile, token.as_deref()).await?;
        self.cache.invalidate(PROFILE_KEY);
        Ok(updated)
    }

    // endregion: --- Profile
}

/// Move the full key out of the record into a one-time grant, leaving the
/// masked form behind.
fn split_key(mut app: AppRecord) -> CreatedApp {
    let full_key = std::mem::take(&mut app.api_key);
    app.api_key = mask_api_key(&full_key);

    CreatedApp {
        app,
        api_key: ApiKeyGrant::new(full_key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::cache::EntryState;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_context(server: &MockServer, dir: &tempfile::TempDir) -> DashboardContext {
        let config = ClientConfig {
            base_url: server.uri(),
            session_file: dir.path().join("session.json"),
            ..ClientConfig::default()
        };
        DashboardContext::new(config)
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
    async fn test_apps_read_is_cached() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();

        Mock::given(method("GET"))
            .and(path("/apps"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let context = test_context(&server, &dir);
        context.apps().await.unwrap();
        context.apps().await.unwrap();

        assert_eq!(context.cache().entry_state(APPS_KEY), Some(EntryState::Fresh));
    }

    #[tokio::test]
    async fn test_create_app_invalidates_list_and_grants_key_once() {
        // Scenario: POST /apps returns the full key; it is revealed exactly
        // once and the cached list refetches
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();

        Mock::given(method("GET"))
            .and(path("/apps"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/apps"))
            .and(body_json(serde_json::json!({"name": "My App"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(app_body("prs_1a2b3c4d5e6f")))
            .expect(1)
            .mount(&server)
            .await;

        let context = test_context(&server, &dir);
        context.apps().await.unwrap();

        let created = context.create_app("My App").await.unwrap();

        assert_eq!(
            context.cache().entry_state(APPS_KEY),
            Some(EntryState::Invalidated)
        );
        // The record only carries the masked form
        assert_eq!(created.app.api_key, "prs_1a2b...5e6f");
        // The full key is available for exactly the immediate reveal
        assert_eq!(created.api_key.reveal(), "prs_1a2b3c4d5e6f");
    }

    #[tokio::test]
    async fn test_create_app_rejects_empty_name_before_network() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();

        // No mock mounted: any request would 404 and fail the test through
        // the error variant below
        let context = test_context(&server, &dir);
        let result = context.create_app("   ").await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_regenerate_key_retires_the_old_key() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();

        Mock::given(method("GET"))
            .and(path("/apps"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/apps/a1/regenerate-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(app_body("prs_newkey9999")))
            .expect(1)
            .mount(&server)
            .await;

        let context = test_context(&server, &dir);
        context.apps().await.unwrap();

        let regenerated = context.regenerate_key("a1").await.unwrap();

        // The stale list, which still shows the old key, must refetch
        assert_eq!(
            context.cache().entry_state(APPS_KEY),
            Some(EntryState::Invalidated)
        );
        assert_eq!(regenerated.api_key.reveal(), "prs_newkey9999");
    }

    #[tokio::test]
    async fn test_delete_app_drops_its_analytics_too() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();

        Mock::given(method("GET"))
            .and(path("/apps"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/analytics/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "appId": "a1",
                "totalUsers": 1,
                "activeUsersLast24h": 0,
                "registrationsLast7d": 0
            })))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/apps/a1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(app_body("prs_1a2b3c4d5e6f")))
            .mount(&server)
            .await;

        let context = test_context(&server, &dir);
        context.apps().await.unwrap();
        context.user_analytics("a1").await.unwrap();

        context.delete_app("a1").await.unwrap();

        assert_eq!(
            context.cache().entry_state(APPS_KEY),
            Some(EntryState::Invalidated)
        );
        assert_eq!(
            context.cache().entry_state("/analytics/users?appId=a1"),
            Some(EntryState::Invalidated)
        );
    }

    #[tokio::test]
    async fn test_authenticated_reads_attach_stored_token() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();

        Mock::given(method("GET"))
            .and(path("/apps"))
            .and(header("Authorization", "Bearer stored-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let context = test_context(&server, &dir);
        context.store().set_token("stored-token");

        assert!(context.apps().await.is_ok());
    }
}
