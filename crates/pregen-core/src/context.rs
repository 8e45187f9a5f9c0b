//! Resolved template variables handed over by the scaffolding tool

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Sentinel for `repository_link` meaning "no repository; skip URL validation"
pub const REPOSITORY_NA: &str = "NA";

fn default_repository_link() -> String {
    REPOSITORY_NA.to_string()
}

/// The template variables the scaffolding tool resolved before invoking the
/// pre-generation hook. Values are plain strings; the hook never mutates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationContext {
    /// Project name, used for the generated app
    pub project_name: String,

    /// Android-style package identifier (e.g., com.example.app)
    pub bundle_identifier: String,

    /// Backend base URL baked into the generated project (optional)
    #[serde(default)]
    pub base_url: String,

    /// Key used by the generated project's secure storage
    pub encryption_key: String,

    /// Git repository URL, or `NA` when the project has no repository yet
    #[serde(default = "default_repository_link")]
    pub repository_link: String,
}

impl GenerationContext {
    /// Parse a handover document from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse generation context YAML")
    }

    /// Read and parse the handover file the scaffolding tool wrote
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read context file: {}", path.display()))?;
        Self::from_yaml(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_context() {
        let yaml = "\
project_name: MyApp
bundle_identifier: com.example.app
base_url: https://api.example.com
encryption_key: abc123XYZ
repository_link: https://github.com/example/myapp
";
        let ctx = GenerationContext::from_yaml(yaml).unwrap();
        assert_eq!(ctx.project_name, "MyApp");
        assert_eq!(ctx.bundle_identifier, "com.example.app");
        assert_eq!(ctx.base_url, "https://api.example.com");
        assert_eq!(ctx.encryption_key, "abc123XYZ");
        assert_eq!(ctx.repository_link, "https://github.com/example/myapp");
    }

    #[test]
    fn test_omitted_optional_fields_default() {
        let yaml = "\
project_name: MyApp
bundle_identifier: com.example.app
encryption_key: abc123XYZ
";
        let ctx = GenerationContext::from_yaml(yaml).unwrap();
        assert_eq!(ctx.base_url, "");
        assert_eq!(ctx.repository_link, REPOSITORY_NA);
    }

    #[test]
    fn test_missing_required_field_is_an_error() {
        let yaml = "\
bundle_identifier: com.example.app
encryption_key: abc123XYZ
";
        assert!(GenerationContext::from_yaml(yaml).is_err());
    }
}
