//! # Backend API Client Module
//!
//! HTTP client for communicating with the Prismon backend API.
//! Handles authentication, app management, analytics, blockchain operations,
//! and the developer profile.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs        - Module exports and documentation
//! ├── client.rs     - ApiClient struct and the request executor
//! ├── auth.rs       - Authentication endpoints (login, register)
//! ├── apps.rs       - App management endpoints (CRUD, key regeneration, upgrade)
//! ├── analytics.rs  - Usage analytics endpoints
//! ├── solana.rs     - Blockchain read/write endpoints
//! └── profile.rs    - Developer profile endpoints
//! ```

pub mod analytics;
pub mod apps;
pub mod auth;
pub mod client;
pub mod profile;
pub mod solana;

pub use client::{ApiClient, Retry};
