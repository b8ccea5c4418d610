//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the dashboard client and the
//! Prismon backend API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Authentication DTOs (login, registration)
//!   - **[`dto::apps`]**: Registered application DTOs
//!   - **[`dto::analytics`]**: Usage analytics DTOs
//!   - **[`dto::solana`]**: Blockchain operation DTOs
//! - **[`utils`]**: Shared display utilities
//!   - **[`utils::lamports_to_sol`]**: Convert raw lamports to SOL
//!   - **[`utils::mask_api_key`]**: Truncate an API key for display
//!
//! ## Wire Format
//!
//! The backend speaks camelCase JSON, so every DTO carries
//! `#[serde(rename_all = "camelCase")]`. Optional fields are omitted from
//! serialized output when `None`, and tolerated when absent on input.

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
