//! # Session Controller
//!
//! The state machine orchestrating login, registration, logout, and startup
//! session restoration across the store, the token codec, and the response
//! cache.
//!
//! Side effects happen only on transition edges; there is no polling and no
//! background refresh of the session. Navigation is part of the transition
//! result ([`Navigation`]), returned to the caller instead of being triggered
//! through a watcher over shared state.

use std::sync::Arc;

use lib_auth::{Claims, decode_claims};
use lib_utils::{validate_not_empty, validate_passwords_match};
use parking_lot::RwLock;
use shared::{AuthResponse, LoginRequest, RegisterRequest};

use super::store::SessionStore;
use crate::core::error::{AppError, Result};
use crate::core::service::ApiService;
use crate::services::cache::ResponseCache;

/// Where the caller should navigate after a session transition.
///
/// Login success and logout are the only two events allowed to trigger
/// navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Dashboard,
    Login,
}

/// Session lifecycle state.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// Startup restoration has not run yet.
    Unknown,
    /// No valid token.
    Anonymous,
    /// Login or registration call in flight.
    Authenticating,
    /// Valid token present, claims resolved.
    Authenticated {
        claims: Claims,
        onboarding_complete: bool,
    },
}

/// Outcome of a login or registration attempt that reached the backend.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    /// Session established; the caller should follow `navigation`.
    Authenticated { navigation: Navigation },
    /// The backend rejected the attempt; `message` is its verdict, verbatim.
    Rejected { message: String },
}

/// Stateful orchestrator of the session lifecycle.
pub struct SessionController {
    api: Arc<dyn ApiService>,
    store: Arc<SessionStore>,
    cache: Arc<ResponseCache>,
    state: RwLock<SessionState>,
}

impl SessionController {
    pub fn new(
        api: Arc<dyn ApiService>,
        store: Arc<SessionStore>,
        cache: Arc<ResponseCache>,
    ) -> Self {
        Self {
            api,
            store,
            cache,
            state: RwLock::new(SessionState::Unknown),
        }
    }

    /// Current session state.
    pub fn state(&self) -> SessionState {
        self.state.read().clone()
    }

    /// True iff a syntactically valid token produced resolved claims.
    pub fn is_authenticated(&self) -> bool {
        matches!(*self.state.read(), SessionState::Authenticated { .. })
    }

    /// Current session token from the durable store, if any.
    pub fn token(&self) -> Option<String> {
        self.store.token()
    }

    /// Restore session state from the durable store on startup.
    ///
    /// A present token is decoded; decode failure clears the stored entry and
    /// starts the session anonymous. The failure is recovered silently — at
    /// startup there is no user-initiated action to blame.
    pub fn restore(&self) -> SessionState {
        let next = match self.store.token() {
            Some(token) => match decode_claims(&token) {
                Ok(claims) => SessionState::Authenticated {
                    claims,
                    onboarding_complete: self.store.onboarding_complete(),
                },
                Err(err) => {
                    tracing::warn!(error = %err, "Stored token failed to decode, starting anonymous");
                    self.store.clear_token();
                    SessionState::Anonymous
                }
            },
            None => SessionState::Anonymous,
        };

        *self.state.write() = next.clone();
        next
    }

    /// Submit a login.
    ///
    /// Empty fields fail with [`AppError::Validation`] before any network
    /// call. Transport and HTTP failures return the session to anonymous and
    /// propagate. A backend rejection (`succeeded == false`) also returns to
    /// anonymous, with the backend's message surfaced verbatim in
    /// [`LoginOutcome::Rejected`].
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome> {
        validate_not_empty(email, "Email").map_err(AppError::Validation)?;
        validate_not_empty(password, "Password").map_err(AppError::Validation)?;

        *self.state.write() = SessionState::Authenticating;

        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = match self.api.login(request).await {
            Ok(response) => response,
            Err(err) => {
                *self.state.write() = SessionState::Anonymous;
                return Err(err);
            }
        };

        self.conclude(response, Navigation::Dashboard)
    }

    /// Submit a registration.
    ///
    /// Same shape as [`login`](Self::login), with the password-confirmation
    /// precondition checked first. A successful registration navigates to the
    /// login page.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<LoginOutcome> {
        validate_not_empty(email, "Email").map_err(AppError::Validation)?;
        validate_not_empty(password, "Password").map_err(AppError::Validation)?;
        validate_passwords_match(password, confirm_password).map_err(AppError::Validation)?;

        *self.state.write() = SessionState::Authenticating;

        let request = RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm_password.to_string(),
        };
        let response = match self.api.register(request).await {
            Ok(response) => response,
            Err(err) => {
                *self.state.write() = SessionState::Anonymous;
                return Err(err);
            }
        };

        self.conclude(response, Navigation::Login)
    }

    /// Log out: clear the token, the onboarding flag, and the whole cache.
    ///
    /// Synchronous — no network call is made or awaited.
    pub fn logout(&self) -> Navigation {
        self.store.clear();
        self.cache.clear();
        *self.state.write() = SessionState::Anonymous;
        tracing::info!("Logged out");
        Navigation::Login
    }

    /// Apply an auth response: either establish the session or report the
    /// backend's rejection.
    fn conclude(&self, response: AuthResponse, navigation: Navigation) -> Result<LoginOutcome> {
        let token = match response.token {
            Some(token) if response.succeeded && !token.is_empty() => token,
            _ => {
                *self.state.write() = SessionState::Anonymous;
                tracing::info!("Authentication rejected by backend");
                return Ok(LoginOutcome::Rejected {
                    message: response.message,
                });
            }
        };

        self.store.set_token(&token);
        let claims = match decode_claims(&token) {
            Ok(claims) => claims,
            Err(err) => {
                // A token we cannot decode is not a session
                self.store.clear_token();
                *self.state.write() = SessionState::Anonymous;
                return Err(err.into());
            }
        };

        self.store
            .set_onboarding_complete(response.is_onboarding_complete);

        // Force authenticated views to refetch under the new credentials
        self.cache.invalidate_all();

        *self.state.write() = SessionState::Authenticated {
            claims: claims.clone(),
            onboarding_complete: response.is_onboarding_complete,
        };
        tracing::info!(developer = %claims.sub, "Session established");

        Ok(LoginOutcome::Authenticated { navigation })
    }
}
