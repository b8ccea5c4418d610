use serde::{Deserialize, Serialize};

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Authentication response (login/registration)
///
/// The backend answers both success and credential rejection with this shape;
/// `succeeded` distinguishes the two and `message` carries the backend's
/// human-readable verdict verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub succeeded: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub developer_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    // Older backend builds spell this "isOnboardingCompleted"
    #[serde(default, alias = "isOnboardingCompleted")]
    pub is_onboarding_complete: bool,
}
