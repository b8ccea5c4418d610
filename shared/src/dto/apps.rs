use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::mask_api_key;

/// Create-app request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateAppRequest {
    pub name: String,
}

/// Rename-app request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateAppRequest {
    pub name: String,
}

/// A registered application, as mirrored from the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppRecord {
    pub id: String,
    pub name: String,
    pub api_key: String,
    pub developer_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployed_endpoint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployed_at: Option<DateTime<Utc>>,
}

impl AppRecord {
    /// The API key truncated for display.
    ///
    /// Full keys are shown only once, immediately after creation or
    /// regeneration; every other surface uses this form.
    pub fn masked_key(&self) -> String {
        mask_api_key(&self.api_key)
    }
}

/// App mutation response (create, update, delete, regenerate-key).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppResponse {
    #[serde(default = "default_succeeded")]
    pub succeeded: bool,
    #[serde(default)]
    pub message: String,
    #[serde(flatten)]
    pub app: AppRecord,
}

fn default_succeeded() -> bool {
    true
}

/// Plan upgrade request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeRequest {
    pub tier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_rate_limit: Option<u32>,
    pub currency: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_response_parses_wire_shape() {
        let json = r#"{
            "succeeded": true,
            "message": "App created",
            "id": "a1",
            "name": "My App",
            "apiKey": "prs_1a2b3c4d5e6f",
            "developerId": "d1",
            "createdAt": "2025-06-01T12:00:00Z"
        }"#;

        let response: AppResponse = serde_json::from_str(json).unwrap();
        assert!(response.succeeded);
        assert_eq!(response.app.id, "a1");
        assert_eq!(response.app.api_key, "prs_1a2b3c4d5e6f");
        assert!(response.app.organization_id.is_none());
    }

    #[test]
    fn test_app_record_array_parses() {
        let json = r#"[{
            "id": "a1",
            "name": "My App",
            "apiKey": "prs_1a2b3c4d5e6f",
            "developerId": "d1",
            "createdAt": "2025-06-01T12:00:00Z",
            "programId": "Prog111",
            "deployedEndpoint": "https://apps.prismon.dev/a1",
            "deployedAt": "2025-06-02T08:30:00Z"
        }]"#;

        let apps: Vec<AppRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(apps.len(), 1);
        assert_eq!(apps[0].program_id.as_deref(), Some("Prog111"));
    }
}
