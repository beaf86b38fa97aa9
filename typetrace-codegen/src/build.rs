//! The build orchestrator.
//!
//! Sequences clear-then-write runs across tracking plans: skip plans without
//! rules, invoke the generator, resolve the configured destination, clear
//! stale generated files, write fresh output. Plans are processed strictly
//! one at a time, so a fatal error names exactly one plan and every earlier
//! plan keeps its rewritten output.

use std::{
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;
use typetrace_config::TrackingPlanConfig;
use typetrace_core::{PathKind, ensure_directory, ensure_extension, resolve_path, write_file};

use crate::{
    GenerationOptions, GeneratorDescriptor, RendererOptions, TrackingPlan,
    clear::clear_generated_files,
};

/// Fatal build pipeline failures.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("no output destination configured for tracking plan '{plan}'")]
    UnresolvedDestination { plan: String },

    #[error("code generation failed for tracking plan '{plan}': {detail}")]
    Generation { plan: String, detail: String },

    #[error("failed to clear generated files at '{path}'")]
    Cleanup {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write '{path}'")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl BuildError {
    pub(crate) fn cleanup(path: &Path, source: io::Error) -> Self {
        Self::Cleanup {
            path: path.to_path_buf(),
            source,
        }
    }

    fn write(path: &Path, source: io::Error) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Everything a build run needs, threaded explicitly instead of read from
/// process-wide state so that runs are repeatable in tests.
pub struct BuildContext<'a> {
    /// Absolute directory of the workspace configuration; all relative
    /// output paths resolve against it.
    pub config_dir: &'a Path,

    /// Configured output destinations, read-only.
    pub plan_configs: &'a [TrackingPlanConfig],

    /// The generator selected for this run.
    pub generator: &'a GeneratorDescriptor,

    /// Build-wide generation options.
    pub options: GenerationOptions,

    /// Renderer template shared by every plan.
    pub renderer: RendererOptions,
}

/// Outcome of one plan within a run.
#[derive(Debug)]
pub struct PlanOutcome {
    /// Plan display name.
    pub plan: String,

    pub status: PlanStatus,
}

/// What happened to a single plan.
#[derive(Debug)]
pub enum PlanStatus {
    /// The plan had no rules; nothing was generated or written.
    Skipped,

    /// Files written for the plan, in generator emission order.
    Generated { files: Vec<PathBuf> },
}

/// Per-plan outcomes in run order.
#[derive(Debug, Default)]
pub struct BuildSummary {
    pub plans: Vec<PlanOutcome>,
}

impl BuildSummary {
    /// Number of plans that produced output.
    pub fn generated(&self) -> usize {
        self.plans
            .iter()
            .filter(|outcome| matches!(outcome.status, PlanStatus::Generated { .. }))
            .count()
    }

    /// Number of plans skipped for having no rules.
    pub fn skipped(&self) -> usize {
        self.plans
            .iter()
            .filter(|outcome| matches!(outcome.status, PlanStatus::Skipped))
            .count()
    }
}

/// Resolve the configured output destination for a plan.
///
/// Matching is exact, with no partial or fuzzy fallback: first the entry
/// whose id equals the plan id, then the entry whose legacy id equals the
/// plan id.
pub fn resolve_destination<'a>(
    plan: &TrackingPlan,
    configs: &'a [TrackingPlanConfig],
) -> Result<&'a TrackingPlanConfig, BuildError> {
    configs
        .iter()
        .find(|config| config.id == plan.id)
        .or_else(|| {
            configs
                .iter()
                .find(|config| config.legacy_id.as_deref() == Some(plan.id.as_str()))
        })
        .ok_or_else(|| BuildError::UnresolvedDestination {
            plan: plan.name.clone(),
        })
}

/// Run the build pipeline over `plans` in order.
///
/// Clearing and writing happen plan by plan: aborting at plan k leaves plans
/// 1..k-1 fully cleared-and-rewritten and plans k..n untouched. There is no
/// cross-plan transaction or rollback.
pub fn build(ctx: &BuildContext<'_>, plans: &[TrackingPlan]) -> Result<BuildSummary, BuildError> {
    let mut summary = BuildSummary::default();

    for plan in plans {
        let rules = match &plan.rules {
            Some(rules) if !rules.is_empty() => rules.as_slice(),
            _ => {
                tracing::debug!(plan = %plan.name, "no rules, skipping");
                summary.plans.push(PlanOutcome {
                    plan: plan.name.clone(),
                    status: PlanStatus::Skipped,
                });
                continue;
            }
        };

        let files = (ctx.generator.generate)(rules, &ctx.options, &ctx.renderer).map_err(|e| {
            BuildError::Generation {
                plan: plan.name.clone(),
                detail: format!("{e:#}"),
            }
        })?;

        // Destination lookup happens after the generator has run; when it
        // fails, earlier plans keep the output already written for them.
        let destination = resolve_destination(plan, ctx.plan_configs)?;

        let dest_dir = resolve_path(ctx.config_dir, [destination.path.as_path()]);
        ensure_directory(&dest_dir, PathKind::Directory)
            .map_err(|e| BuildError::write(&dest_dir, e))?;

        let deleted = clear_generated_files(&dest_dir)?;
        tracing::debug!(
            plan = %plan.name,
            dir = %dest_dir.display(),
            deleted = deleted.len(),
            "cleared stale generated files"
        );

        let mut written = Vec::with_capacity(files.len());
        for (filename, contents) in &files {
            let filename = ensure_extension(filename, ctx.generator.extension);
            let path = resolve_path(
                ctx.config_dir,
                [destination.path.as_path(), Path::new(&filename)],
            );
            write_file(&path, contents).map_err(|e| BuildError::write(&path, e))?;
            written.push(path);
        }

        summary.plans.push(PlanOutcome {
            plan: plan.name.clone(),
            status: PlanStatus::Generated { files: written },
        });
    }

    Ok(summary)
}
