/// Configuration for the Block Kit builder
use serde::{Deserialize, Serialize};

use crate::utils::PREVIEW_BASE_URL;

/// Builder settings
///
/// Deserializes from partial JSON, missing keys take their default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockKitConfig {
    /// Block Kit Builder URL that preview links are built on
    pub preview_base_url: String,

    /// Workspace the preview opens in (default: none)
    pub team_id: Option<String>,

    /// Indentation for `to_json` output, compact when `None`
    pub json_indent: Option<usize>,
}

impl Default for BlockKitConfig {
    fn default() -> Self {
        Self {
            preview_base_url: PREVIEW_BASE_URL.to_string(),
            team_id: None,
            json_indent: None,
        }
    }
}

impl BlockKitConfig {
    pub fn with_team_id(mut self, team_id: impl Into<String>) -> Self {
        self.team_id = Some(team_id.into());
        self
    }

    pub fn with_json_indent(mut self, indent: usize) -> Self {
        self.json_indent = Some(indent);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BlockKitConfig::default();
        assert_eq!(
            config.preview_base_url,
            "https://app.slack.com/block-kit-builder/"
        );
        assert_eq!(config.team_id, None);
        assert_eq!(config.json_indent, None);
    }

    #[test]
    fn test_partial_json() {
        let config: BlockKitConfig =
            serde_json::from_str(r#"{"team_id": "T123", "json_indent": 2}"#).unwrap();
        assert_eq!(config.team_id.as_deref(), Some("T123"));
        assert_eq!(config.json_indent, Some(2));
        assert_eq!(config.preview_base_url, PREVIEW_BASE_URL);
    }
}
