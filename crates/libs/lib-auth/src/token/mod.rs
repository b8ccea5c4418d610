//! # Session Token Codec
//!
//! Decodes the payload of a session token issued by the backend.
//!
//! Tokens are opaque three-segment strings (`header.payload.signature`). The
//! client decodes only the payload segment to recover the developer's claims;
//! it does not verify the signature or expiry. The backend is the enforcement
//! boundary and rejects stale or tampered tokens on the next authenticated
//! call with an unauthorized status.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Claims carried in a session token payload.
///
/// Fields missing from the payload default to the empty string; only
/// structural decode failures are errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (developer email)
    #[serde(default)]
    pub sub: String,
    /// Unique developer identifier
    #[serde(default)]
    pub nameidentifier: String,
}

/// Token decoding error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Token is not three dot-separated segments with a base64url JSON payload.
    #[error("Invalid token format")]
    InvalidFormat,
}

/// Decode the claims from a session token without verifying its signature.
///
/// Pure and deterministic: the same token always yields the same claims.
/// Fails with [`TokenError::InvalidFormat`] when the token does not have
/// exactly three dot-separated segments, or when the middle segment is not
/// base64url-encoded UTF-8 JSON.
pub fn decode_claims(token: &str) -> Result<Claims, TokenError> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(TokenError::InvalidFormat);
    }

    let payload =
        lib_utils::b64u_decode_padded(segments[1]).map_err(|_| TokenError::InvalidFormat)?;

    serde_json::from_slice(&payload).map_err(|_| TokenError::InvalidFormat)
}

/// Build an unsigned three-segment token carrying the given claims.
///
/// The signature segment is a placeholder; the client never validates it.
/// Useful for fixtures and local tooling.
pub fn encode_unsigned(claims: &Claims) -> String {
    let header = lib_utils::b64u_encode(br#"{"alg":"none","typ":"JWT"}"#);
    let payload = lib_utils::b64u_encode(
        serde_json::json!({
            "sub": claims.sub,
            "nameidentifier": claims.nameidentifier,
        })
        .to_string(),
    );
    format!("{header}.{payload}.unsigned")
}
