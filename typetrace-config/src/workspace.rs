use std::{collections::HashSet, path::PathBuf};

use serde::Deserialize;

use crate::{Error, Result};

/// Root schema for typetrace.toml
#[derive(Debug, Clone, Deserialize)]
pub struct WorkspaceConfig {
    /// Client language and SDK selection
    pub client: ClientConfig,

    /// Tracking plans and their output directories
    #[serde(default)]
    pub tracking_plans: Vec<TrackingPlanConfig>,

    /// Optional lifecycle scripts
    pub scripts: Option<ScriptsConfig>,
}

/// Client code generation settings
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Target language identifier (e.g. "typescript")
    pub language: String,

    /// Analytics SDK the generated client binds to
    pub sdk: String,

    /// Opaque per-language options passed through to the generator verbatim
    #[serde(default)]
    pub language_options: toml::Table,
}

/// One tracking plan and where its generated client lives
#[derive(Debug, Clone, Deserialize)]
pub struct TrackingPlanConfig {
    /// Tracking plan identifier
    pub id: String,

    /// Identifier the plan carried before a workspace migration
    pub legacy_id: Option<String>,

    /// Output directory for generated files, relative to the config file
    pub path: PathBuf,
}

/// User-configured lifecycle scripts
#[derive(Debug, Clone, Deserialize)]
pub struct ScriptsConfig {
    /// Command executed after a successful build
    pub after: Option<String>,
}

impl WorkspaceConfig {
    /// Validate the configuration after parsing
    pub fn validate(&self, src: &str, filename: &str) -> Result<()> {
        if self.client.language.trim().is_empty() {
            return Err(Error::validation(
                "client.language must not be empty",
                src,
                filename,
            ));
        }
        if self.client.sdk.trim().is_empty() {
            return Err(Error::validation("client.sdk must not be empty", src, filename));
        }

        if self.tracking_plans.is_empty() {
            return Err(Error::no_tracking_plans(src, filename));
        }

        let mut seen: HashSet<&str> = HashSet::new();
        for plan in &self.tracking_plans {
            if plan.id.trim().is_empty() {
                return Err(Error::validation(
                    "tracking plan entries must have a non-empty id",
                    src,
                    filename,
                ));
            }
            if plan.path.as_os_str().is_empty() {
                return Err(Error::validation(
                    format!("tracking plan '{}' has an empty path", plan.id),
                    src,
                    filename,
                ));
            }
            if !seen.insert(plan.id.as_str()) {
                return Err(Error::validation(
                    format!("duplicate tracking plan id '{}'", plan.id),
                    src,
                    filename,
                ));
            }
        }

        Ok(())
    }
}

/// Parse a typetrace.toml from a string (uses "typetrace.toml" as filename)
pub fn parse_str(content: &str) -> Result<WorkspaceConfig> {
    parse_str_with_filename(content, crate::CONFIG_FILE_NAME)
}

/// Parse a typetrace.toml from a string with a custom filename for error reporting
pub fn parse_str_with_filename(content: &str, filename: &str) -> Result<WorkspaceConfig> {
    let config: WorkspaceConfig =
        toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;

    config.validate(content, filename)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"
        [client]
        language = "typescript"
        sdk = "analytics-node"

        [client.language_options]
        package = "com.example.analytics"

        [[tracking_plans]]
        id = "tp_mobile"
        legacy_id = "4821"
        path = "./analytics"

        [[tracking_plans]]
        id = "tp_web"
        path = "./web/analytics"

        [scripts]
        after = "npm run lint"
    "#;

    #[test]
    fn test_parse_full_config() {
        let config = parse_str(VALID).unwrap();

        assert_eq!(config.client.language, "typescript");
        assert_eq!(config.client.sdk, "analytics-node");
        assert_eq!(
            config.client.language_options.get("package").and_then(|v| v.as_str()),
            Some("com.example.analytics")
        );

        assert_eq!(config.tracking_plans.len(), 2);
        assert_eq!(config.tracking_plans[0].id, "tp_mobile");
        assert_eq!(config.tracking_plans[0].legacy_id.as_deref(), Some("4821"));
        assert_eq!(config.tracking_plans[1].legacy_id, None);
        assert_eq!(config.tracking_plans[1].path, PathBuf::from("./web/analytics"));

        assert_eq!(
            config.scripts.and_then(|s| s.after).as_deref(),
            Some("npm run lint")
        );
    }

    #[test]
    fn test_defaults() {
        let config = parse_str(
            r#"
            [client]
            language = "kotlin"
            sdk = "analytics-kotlin"

            [[tracking_plans]]
            id = "tp_app"
            path = "./analytics"
            "#,
        )
        .unwrap();

        assert!(config.client.language_options.is_empty());
        assert!(config.scripts.is_none());
    }

    #[test]
    fn test_zero_tracking_plans_rejected() {
        let err = parse_str(
            r#"
            [client]
            language = "typescript"
            sdk = "analytics-node"
            "#,
        )
        .unwrap_err();

        assert!(matches!(*err, Error::NoTrackingPlans { .. }));
    }

    #[test]
    fn test_duplicate_plan_id_rejected() {
        let err = parse_str(
            r#"
            [client]
            language = "typescript"
            sdk = "analytics-node"

            [[tracking_plans]]
            id = "tp_app"
            path = "./a"

            [[tracking_plans]]
            id = "tp_app"
            path = "./b"
            "#,
        )
        .unwrap_err();

        assert!(err.to_string().contains("duplicate tracking plan id 'tp_app'"));
    }

    #[test]
    fn test_empty_path_rejected() {
        let err = parse_str(
            r#"
            [client]
            language = "typescript"
            sdk = "analytics-node"

            [[tracking_plans]]
            id = "tp_app"
            path = ""
            "#,
        )
        .unwrap_err();

        assert!(err.to_string().contains("empty path"));
    }

    #[test]
    fn test_invalid_toml_is_a_parse_error() {
        let err = parse_str("client = not toml").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }
}
