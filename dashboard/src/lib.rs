//! # Prismon Dashboard Client - Library Root
//!
//! The client core of the Prismon developer-platform dashboard: session
//! lifecycle, authenticated request pipeline, and response caching. The
//! visual layer (pages, charts, modals) sits on top of this crate and is
//! deliberately absent here.
//!
//! ## Module Structure
//!
//! - **session**: Session lifecycle
//!   - `store`: durable token + onboarding-flag storage
//!   - `controller`: login/registration/logout state machine
//!
//! - **services**: External integrations
//!   - `api`: backend HTTP client (auth, apps, analytics, solana, profile)
//!   - `cache`: keyed response cache with explicit invalidation
//!
//! - **core**: Cross-cutting pieces
//!   - `error`: application-wide error taxonomy
//!   - `service`: `ApiService` trait for dependency injection
//!
//! - **config**: Environment-driven client configuration
//! - **context**: The single owning context object wiring it all together
//!
//! ## Control Flow
//!
//! The context restores session state from the store on startup, decodes the
//! token's claims, and marks the session authenticated. Views issue reads and
//! writes through the request executor; successful mutations invalidate the
//! affected cache keys; logout clears store and cache and returns an explicit
//! navigation instruction.

pub mod config;
pub mod context;
pub mod core;
pub mod services;
pub mod session;

// Re-export the types most callers need
pub use crate::config::ClientConfig;
pub use crate::context::{CreatedApp, DashboardContext};
pub use crate::core::error::{AppError, Result};
pub use crate::core::service::ApiService;
pub use crate::services::api::apps::ApiKeyGrant;
pub use crate::services::api::{ApiClient, Retry};
pub use crate::services::cache::{EntryState, ResponseCache};
pub use crate::session::controller::{LoginOutcome, Navigation, SessionController, SessionState};
pub use crate::session::store::SessionStore;
