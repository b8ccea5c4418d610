//! # Utilities Library
//!
//! Shared utility functions for base64 encoding, environment variables, and validation.

pub mod b64;
pub mod envs;
pub mod validation;

// Re-export commonly used functions
pub use b64::{b64u_encode, b64u_decode, b64u_decode_padded, b64u_decode_to_string};
pub use envs::{get_env, get_env_or, get_env_parse};
pub use validation::{validate_not_empty, validate_email, validate_min_length, validate_passwords_match};
