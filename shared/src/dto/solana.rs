use serde::{Deserialize, Serialize};

/// SOL balance response, in raw lamports.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BalanceResponse {
    pub balance: u64,
}

/// A token account held by a wallet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenAccount {
    pub mint: String,
    pub amount: f64,
}

/// Transfer request (SOL when `mint` is absent, SPL token otherwise).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub from_public_key: String,
    pub to_public_key: String,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mint: Option<String>,
}

/// Mint request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MintRequest {
    pub authority_public_key: String,
    pub mint: String,
    pub amount: f64,
}

/// Signature of a submitted transaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignatureResponse {
    pub signature: String,
}
