//! Configuration handling for the profile editor

use crate::interceptor::{
    EndpointMode, EndpointPolicy, FeedbackMode, FeedbackPolicy, DEFAULT_ENDPOINT_PATH,
};
use crate::state::PROFILE_FORM_ID;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Default server address
pub const DEFAULT_SERVER_ADDRESS: &str = "http://127.0.0.1:8000";

/// Environment variable overriding the server address
pub const SERVER_ADDRESS_ENV: &str = "PROFILE_SERVER_ADDRESS";

/// User configuration, every key optional
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProfileConfig {
    /// Server base URL
    pub server_address: Option<String>,
    /// Post to a fixed path or to the form's action
    pub endpoint: Option<EndpointMode>,
    /// Path used by the fixed endpoint
    pub endpoint_path: Option<String>,
    /// Banner or popup feedback
    pub feedback: Option<FeedbackMode>,
    /// Selector the interceptor binds to
    pub form_selector: Option<String>,
    /// Path of the profile page
    pub page_path: Option<String>,
    /// Request timeout in seconds
    pub request_timeout_secs: Option<u64>,
}

impl ProfileConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "referralshare", "profile-form")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: ProfileConfig = serde_json::from_str(&content)
                    .with_context(|| format!("Invalid config file {}", path.display()))?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Server URL: `PROFILE_SERVER_ADDRESS`, then the config file, then the default
    pub fn server_url(&self) -> Result<Url> {
        let address = std::env::var(SERVER_ADDRESS_ENV)
            .ok()
            .or_else(|| self.server_address.clone())
            .unwrap_or_else(|| DEFAULT_SERVER_ADDRESS.to_string());
        Url::parse(&address).with_context(|| format!("Invalid server address `{address}`"))
    }

    pub fn endpoint_policy(&self) -> EndpointPolicy {
        match self.endpoint.unwrap_or_default() {
            EndpointMode::Fixed => EndpointPolicy::Fixed(
                self.endpoint_path
                    .clone()
                    .unwrap_or_else(|| DEFAULT_ENDPOINT_PATH.to_string()),
            ),
            EndpointMode::FormAction => EndpointPolicy::FormAction,
        }
    }

    pub fn feedback_policy(&self) -> FeedbackPolicy {
        self.feedback.unwrap_or_default().into()
    }

    pub fn form_selector(&self) -> String {
        self.form_selector
            .clone()
            .unwrap_or_else(|| format!("#{PROFILE_FORM_ID}"))
    }

    pub fn page_path(&self) -> &str {
        self.page_path.as_deref().unwrap_or("/profile")
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(crate::client::DEFAULT_TIMEOUT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ProfileConfig::default();
        assert!(config.server_address.is_none());
        assert!(config.endpoint.is_none());
        assert!(config.endpoint_path.is_none());
        assert!(config.feedback.is_none());
        assert!(config.form_selector.is_none());
        assert!(config.page_path.is_none());
        assert!(config.request_timeout_secs.is_none());
    }

    #[test]
    fn test_defaults_resolve_to_profile_form() {
        let config = ProfileConfig::default();
        assert_eq!(
            config.endpoint_policy(),
            EndpointPolicy::Fixed("/updateuser".to_string())
        );
        assert_eq!(config.feedback_policy(), FeedbackPolicy::inline_banner());
        assert_eq!(config.form_selector(), "#profileform");
        assert_eq!(config.page_path(), "/profile");
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_serialization() {
        let config = ProfileConfig {
            server_address: Some("http://localhost:9000".to_string()),
            endpoint: Some(EndpointMode::FormAction),
            endpoint_path: None,
            feedback: Some(FeedbackMode::Popup),
            form_selector: Some("#editform".to_string()),
            page_path: Some("/me".to_string()),
            request_timeout_secs: Some(5),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: ProfileConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(
            parsed.server_address,
            Some("http://localhost:9000".to_string())
        );
        assert_eq!(parsed.endpoint, Some(EndpointMode::FormAction));
        assert_eq!(parsed.feedback, Some(FeedbackMode::Popup));
        assert_eq!(parsed.form_selector, Some("#editform".to_string()));
        assert_eq!(parsed.page_path, Some("/me".to_string()));
        assert_eq!(parsed.request_timeout(), Duration::from_secs(5));
        assert_eq!(parsed.endpoint_policy(), EndpointPolicy::FormAction);
        assert_eq!(parsed.feedback_policy(), FeedbackPolicy::popup());
    }

    #[test]
    fn test_custom_fixed_path() {
        let config = ProfileConfig {
            endpoint_path: Some("/api/profile".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.endpoint_policy(),
            EndpointPolicy::Fixed("/api/profile".to_string())
        );
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: ProfileConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.server_address.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"feedback": "popup", "unknown_field": "value"}"#;
        let parsed: ProfileConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.feedback, Some(FeedbackMode::Popup));
    }

    #[test]
    fn test_rejects_unknown_feedback_mode() {
        let json = r#"{"feedback": "toast"}"#;
        assert!(serde_json::from_str::<ProfileConfig>(json).is_err());
    }

    #[test]
    fn test_server_url_from_config() {
        if std::env::var(SERVER_ADDRESS_ENV).is_ok() {
            return;
        }
        let config = ProfileConfig {
            server_address: Some("http://example.com:8080".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.server_url().unwrap().as_str(),
            "http://example.com:8080/"
        );
    }

    #[test]
    fn test_invalid_server_address() {
        if std::env::var(SERVER_ADDRESS_ENV).is_ok() {
            return;
        }
        let config = ProfileConfig {
            server_address: Some("not a url".to_string()),
            ..Default::default()
        };
        assert!(config.server_url().is_err());
    }

    #[test]
    fn test_config_path_returns_option() {
        // Just test that the function doesn't panic
        let _path = ProfileConfig::config_path();
    }
}
