//! # Shared Display Utilities
//!
//! Formatting helpers used wherever backend values reach a human:
//! lamports-to-SOL conversion for balance views, and truncation helpers for
//! addresses, transaction signatures, and API keys.

/// Lamports per SOL.
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Convert raw lamports to SOL.
///
/// # Examples
///
/// ```rust
/// use shared::utils::lamports_to_sol;
///
/// assert_eq!(lamports_to_sol(2_500_000_000), 2.5);
/// ```
pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}

/// Format a balance as SOL alongside the raw lamports value.
pub fn format_balance(lamports: u64) -> String {
    format!("{} SOL ({} lamports)", lamports_to_sol(lamports), lamports)
}

/// Format an address-like string by showing the first `prefix_len` and last
/// `suffix_len` characters.
///
/// If the value is shorter than `prefix_len + suffix_len`, it is returned
/// as-is. Inputs are base58/base64 strings, so byte indexing is safe.
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    if address_len <= prefix_len + suffix_len
        || prefix_len >= address_len
        || suffix_len >= address_len
    {
        return address.to_string();
    }

    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Truncate a transaction signature for notifications (first 10 characters).
pub fn truncate_signature(signature: &str) -> String {
    if signature.len() <= 10 {
        return signature.to_string();
    }
    format!("{}...", &signature[..10])
}

/// Truncate an API key for display.
///
/// Keeps the `prs_` prefix plus a few identifying characters and the tail;
/// the full key is only ever shown once, at generation time.
pub fn mask_api_key(key: &str) -> String {
    format_address(key, 8, 4)
}
