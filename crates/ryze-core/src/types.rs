//! Request and response types
//!
//! Field names follow the JSON wire format (`currentCode`, `downloadUrl`,
//! `processing_time_ms`).

use ryze_artifact::ContentHash;
use ryze_intent::Archetype;
use serde::{Deserialize, Serialize};

/// Generation request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Natural-language description of the screen
    #[serde(default)]
    pub prompt: String,
}

/// Generation metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationMeta {
    /// Classified archetype
    pub intent: Archetype,
    /// Wall time in milliseconds, two decimals
    pub processing_time_ms: f64,
}

/// Generation result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Numbered plan of the generation steps
    pub plan: String,
    /// Component source
    pub code: String,
    /// Human-readable summary of the decisions taken
    pub explanation: String,
    /// Intent and timing
    pub meta: GenerationMeta,
}

/// Modification request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifyRequest {
    /// Follow-up instruction
    #[serde(default)]
    pub prompt: String,
    /// Artifact to modify
    #[serde(default, rename = "currentCode")]
    pub current_code: String,
}

/// Modification result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifyResponse {
    /// Numbered plan, one line per applied rule
    pub plan: String,
    /// Modified component source
    pub code: String,
    /// Bulleted explanation of the applied rules
    pub explanation: String,
}

/// Packaging request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRequest {
    /// Component source to package
    #[serde(default)]
    pub code: String,
    /// Prompt the component came from (used as page title)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

/// Packaging result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageResponse {
    /// Always true on success
    pub success: bool,
    /// Deployment identifier
    pub id: String,
    /// Page URL
    pub url: String,
    /// Attachment URL
    #[serde(rename = "downloadUrl")]
    pub download_url: String,
}

/// A stored standalone document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployment {
    /// Deployment identifier
    pub id: String,
    /// Page title (HTML-unescaped)
    pub title: String,
    /// Prompt the component came from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    /// Component source as submitted
    pub original_code: String,
    /// Complete standalone HTML
    #[serde(skip)]
    pub html: String,
    /// Hash of `original_code`
    pub content_hash: ContentHash,
    /// Creation time
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modify_request_uses_camel_case_code() {
        let req: ModifyRequest =
            serde_json::from_str(r#"{"prompt":"make it red","currentCode":"<div/>"}"#).unwrap();
        assert_eq!(req.current_code, "<div/>");
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let req: ModifyRequest = serde_json::from_str("{}").unwrap();
        assert!(req.prompt.is_empty() && req.current_code.is_empty());
        let req: GenerateRequest = serde_json::from_str("{}").unwrap();
        assert!(req.prompt.is_empty());
    }

    #[test]
    fn generate_response_shape() {
        let resp = GenerateResponse {
            plan: "p".into(),
            code: "c".into(),
            explanation: "e".into(),
            meta: GenerationMeta {
                intent: Archetype::Login,
                processing_time_ms: 0.12,
            },
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["meta"]["intent"], "login");
        assert_eq!(json["meta"]["processing_time_ms"], 0.12);
    }

    #[test]
    fn package_response_uses_download_url() {
        let resp = PackageResponse {
            success: true,
            id: "abc".into(),
            url: "http://x/view/abc".into(),
            download_url: "http://x/download/abc".into(),
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["downloadUrl"], "http://x/download/abc");
    }
}
