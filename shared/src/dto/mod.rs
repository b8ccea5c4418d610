//! # Data Transfer Objects
//!
//! Request and response types for the Prismon backend API.

pub mod analytics;
pub mod apps;
pub mod auth;
pub mod solana;

pub use analytics::*;
pub use apps::*;
pub use auth::*;
pub use solana::*;
