//! # Blockchain Endpoints
//!
//! Solana read/write operations proxied through the backend. The client never
//! talks to an RPC node directly; it only knows these request/response
//! shapes.

use reqwest::Method;
use serde_json::Value;
use shared::{BalanceResponse, MintRequest, SignatureResponse, TokenAccount, TransferRequest};

use super::client::{ApiClient, Retry};
use crate::core::error::Result;

/// Get a wallet's SOL balance, in lamports.
pub async fn balance(
    client: &ApiClient,
    public_key: &str,
    token: Option<&str>,
    retry: Retry,
) -> Result<BalanceResponse> {
    let url = client.url(&format!("/solana/balance?publicKey={}", public_key));
    client.get_json(&url, token, retry).await
}

/// List a wallet's token accounts.
pub async fn token_accounts(
    client: &ApiClient,
    public_key: &str,
    token: Option<&str>,
    retry: Retry,
) -> Result<Vec<TokenAccount>> {
    let url = client.url(&format!("/solana/token-accounts?publicKey={}", public_key));
    client.get_json(&url, token, retry).await
}

/// Submit a transfer (SOL, or an SPL token when `mint` is set).
#[tracing::instrument(skip(client, request, token), fields(
    from = %shared::format_address(&request.from_public_key, 4, 4),
    to = %shared::format_address(&request.to_public_key, 4, 4),
))]
pub async fn transfer(
    client: &ApiClient,
    request: &TransferRequest,
    token: Option<&str>,
) -> Result<SignatureResponse> {
    let body = ApiClient::to_body(request)?;
    let result: Result<SignatureResponse> = client
        .request_json(Method::POST, &client.url("/solana/transfer"), Some(&body), token)
        .await;

    if let Ok(response) = &result {
        tracing::info!(
            signature = %shared::truncate_signature(&response.signature),
            "Transfer submitted"
        );
    }
    result
}

/// Submit a mint.
#[tracing::instrument(skip(client, request, token), fields(mint = %request.mint))]
pub async fn mint(
    client: &ApiClient,
    request: &MintRequest,
    token: Option<&str>,
) -> Result<SignatureResponse> {
    let body = ApiClient::to_body(request)?;
    client
        .request_json(Method::POST, &client.url("/solana/mint"), Some(&body), token)
        .await
}

/// Look up a transaction by signature. The payload is opaque JSON.
pub async fn transaction(
    client: &ApiClient,
    signature: &str,
    token: Option<&str>,
    retry: Retry,
) -> Result<Value> {
    let url = client.url(&format!("/solana/transaction?signature={}", signature));
    client.get_json(&url, token, retry).await
}
