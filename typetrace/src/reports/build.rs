//! Build command report data structures.

use std::path::Path;

use typetrace_codegen::{BuildSummary, PlanStatus};

use super::output::{Output, Report};

/// One tracking plan's outcome, ready for display.
#[derive(Debug)]
pub enum PlanLine {
    /// The plan had no rules.
    Skipped { plan: String },
    /// Files written for the plan, relative to the configuration directory.
    Generated { plan: String, files: Vec<String> },
}

/// Report data from a completed build run.
#[derive(Debug)]
pub struct BuildReport {
    /// Language the client was generated for.
    pub language: String,
    /// Per-plan outcomes in run order.
    pub plans: Vec<PlanLine>,
    /// Number of plans that produced output.
    pub generated: usize,
    /// Number of plans skipped for having no rules.
    pub skipped: usize,
}

impl BuildReport {
    /// Build a report from a run summary, with paths shown relative to the
    /// configuration directory.
    pub fn new(language: &str, config_dir: &Path, summary: &BuildSummary) -> Self {
        let plans = summary
            .plans
            .iter()
            .map(|outcome| match &outcome.status {
                PlanStatus::Skipped => PlanLine::Skipped {
                    plan: outcome.plan.clone(),
                },
                PlanStatus::Generated { files } => PlanLine::Generated {
                    plan: outcome.plan.clone(),
                    files: files
                        .iter()
                        .map(|path| {
                            path.strip_prefix(config_dir)
                                .unwrap_or(path)
                                .display()
                                .to_string()
                        })
                        .collect(),
                },
            })
            .collect();

        Self {
            language: language.to_string(),
            plans,
            generated: summary.generated(),
            skipped: summary.skipped(),
        }
    }
}

impl Report for BuildReport {
    fn render(&self, out: &mut dyn Output) {
        for line in &self.plans {
            match line {
                PlanLine::Skipped { plan } => {
                    out.warning(&format!("no rules found for '{plan}', skipping"));
                }
                PlanLine::Generated { plan, files } => {
                    out.section(&format!(
                        "Generated {} {} file{} for '{}'",
                        files.len(),
                        self.language,
                        if files.len() == 1 { "" } else { "s" },
                        plan
                    ));
                    for file in files {
                        out.added_item(file);
                    }
                }
            }
        }

        out.newline();
        out.preformatted(&format!(
            "{} plan{} generated, {} skipped",
            self.generated,
            if self.generated == 1 { "" } else { "s" },
            self.skipped
        ));
    }
}
