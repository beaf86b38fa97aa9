//! Loading tracking plans for a build run.

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use typetrace_codegen::TrackingPlan;
use typetrace_config::TrackingPlanConfig;
use typetrace_core::resolve_path;

/// Name of the cached tracking plan document inside each output directory.
pub(crate) const PLAN_FILE_NAME: &str = "plan.json";

/// A source of tracking plans for one build run.
///
/// Implementations must return plans in the order of the configured entries.
pub(crate) trait PlanSource {
    fn load(
        &self,
        plans: &[TrackingPlanConfig],
        force_refresh: bool,
    ) -> Result<Vec<TrackingPlan>>;
}

/// Loads the local `plan.json` copy stored in each plan's output directory.
pub(crate) struct LocalPlanSource {
    config_dir: PathBuf,
}

impl LocalPlanSource {
    pub fn new(config_dir: &Path) -> Self {
        Self {
            config_dir: config_dir.to_path_buf(),
        }
    }

    /// Path of the local plan document for one configured entry.
    pub fn plan_path(&self, config: &TrackingPlanConfig) -> PathBuf {
        resolve_path(
            &self.config_dir,
            [config.path.as_path(), Path::new(PLAN_FILE_NAME)],
        )
    }
}

impl PlanSource for LocalPlanSource {
    fn load(
        &self,
        plans: &[TrackingPlanConfig],
        force_refresh: bool,
    ) -> Result<Vec<TrackingPlan>> {
        if force_refresh {
            tracing::warn!("no remote plan source is configured; using local tracking plan copies");
        }

        plans
            .iter()
            .map(|config| {
                let path = self.plan_path(config);
                tracing::debug!(plan = %config.id, path = %path.display(), "loading tracking plan");

                let contents = std::fs::read_to_string(&path).wrap_err_with(|| {
                    format!(
                        "no local copy of tracking plan '{}' at {}",
                        config.id,
                        path.display()
                    )
                })?;
                let plan: TrackingPlan = serde_json::from_str(&contents).wrap_err_with(|| {
                    format!("invalid tracking plan document at {}", path.display())
                })?;
                Ok(plan)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn config(id: &str, path: &str) -> TrackingPlanConfig {
        TrackingPlanConfig {
            id: id.to_string(),
            legacy_id: None,
            path: path.into(),
        }
    }

    #[test]
    fn test_loads_plans_in_configured_order() {
        let temp = TempDir::new().unwrap();
        for (dir, id, name) in [("a", "tp_a", "Plan A"), ("b", "tp_b", "Plan B")] {
            std::fs::create_dir(temp.path().join(dir)).unwrap();
            std::fs::write(
                temp.path().join(dir).join(PLAN_FILE_NAME),
                format!(r#"{{ "id": "{id}", "name": "{name}", "rules": [] }}"#),
            )
            .unwrap();
        }

        let source = LocalPlanSource::new(temp.path());
        let plans = source
            .load(&[config("tp_b", "b"), config("tp_a", "a")], false)
            .unwrap();

        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0].name, "Plan B");
        assert_eq!(plans[1].name, "Plan A");
    }

    #[test]
    fn test_missing_plan_document_names_the_entry() {
        let temp = TempDir::new().unwrap();
        let source = LocalPlanSource::new(temp.path());

        let err = source.load(&[config("tp_a", "a")], false).unwrap_err();

        assert!(err.to_string().contains("tp_a"));
    }

    #[test]
    fn test_invalid_plan_document_is_an_error() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("a")).unwrap();
        std::fs::write(temp.path().join("a").join(PLAN_FILE_NAME), "not json").unwrap();

        let source = LocalPlanSource::new(temp.path());
        let err = source.load(&[config("tp_a", "a")], false).unwrap_err();

        assert!(err.to_string().contains("invalid tracking plan document"));
    }
}
