//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.

use async_trait::async_trait;
use serde_json::Value;
use shared::{
    AppRecord, AppResponse, AuthResponse, BalanceResponse, LoginRequest, MintRequest,
    RegisterRequest, SignatureResponse, TokenAccount, TransferRequest, UpgradeRequest,
    UserAnalytics,
};

use crate::core::error::Result;

/// Trait for API service operations.
///
/// Bearer-authenticated operations take the session token as `Option<&str>`;
/// the `Authorization` header is attached iff a token is supplied, mirroring
/// whether a session exists at call time.
///
/// This trait allows for dependency injection and mocking in tests.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Login with email and password
    async fn login(&self, request: LoginRequest) -> Result<AuthResponse>;

    /// Register a new developer account
    async fn register(&self, request: RegisterRequest) -> Result<AuthResponse>;

    /// List the developer's registered apps
    async fn list_apps(&self, token: Option<&str>) -> Result<Vec<AppRecord>>;

    /// Register a new app (response carries the full API key, once)
    async fn create_app(&self, name: &str, token: Option<&str>) -> Result<AppResponse>;

    /// Rename an app
    async fn update_app(&self, app_id: &str, name: &str, token: Option<&str>)
        -> Result<AppResponse>;

    /// Delete an app
    async fn delete_app(&self, app_id: &str, token: Option<&str>) -> Result<AppResponse>;

    /// Regenerate an app's API key (response carries the new full key, once)
    async fn regenerate_key(&self, app_id: &str, token: Option<&str>) -> Result<AppResponse>;

    /// Per-app user analytics
    async fn user_analytics(&self, app_id: &str, token: Option<&str>) -> Result<UserAnalytics>;

    /// SOL balance of a wallet, in lamports
    async fn solana_balance(&self, public_key: &str, token: Option<&str>)
        -> Result<BalanceResponse>;

    /// Token accounts held by a wallet
    async fn solana_token_accounts(
        &self,
        public_key: &str,
        token: Option<&str>,
    ) -> Result<Vec<TokenAccount>>;

    /// Submit a transfer
    async fn solana_transfer(
        &self,
        request: TransferRequest,
        token: Option<&str>,
    ) -> Result<SignatureResponse>;

    /// Submit a mint
    async fn solana_mint(
        &self,
        request: MintRequest,
        token: Option<&str>,
    ) -> Result<SignatureResponse>;

    /// Look up a transaction by signature (opaque JSON)
    async fn solana_transaction(&self, signature: &str, token: Option<&str>) -> Result<Value>;

    /// Upgrade the developer's plan (opaque JSON)
    async fn upgrade_plan(&self, request: UpgradeRequest, token: Option<&str>) -> Result<Value>;

    /// Fetch the developer profile (opaque JSON)
    async fn developer_profile(&self, token: Option<&str>) -> Result<Value>;

    /// Update the developer profile (opaque JSON)
    async fn update_developer_profile(&self, profile: Value, token: Option<&str>)
        -> Result<Value>;
}
