use std::path::PathBuf;

use clap::{Args, ValueEnum};
use eyre::Result;
use typetrace_codegen::{BuildContext, GenerationOptions, RendererOptions};
use typetrace_config::{ConfigFile, ScriptPhase, run_script};

use super::UnwrapOrExit;
use crate::{
    language,
    plans::{LocalPlanSource, PlanSource},
    reports::{BuildReport, Report, TerminalOutput},
};

#[derive(Args)]
pub struct BuildCommand {
    /// Path to typetrace.toml (defaults to ./typetrace.toml)
    #[arg(short, long, default_value = "typetrace.toml")]
    pub config: PathBuf,

    /// Re-download tracking plans before building
    #[arg(short = 'u', long)]
    pub update: bool,

    /// Development mode generates additional runtime validation for some languages
    #[arg(short, long, value_enum, default_value_t = Mode::Dev)]
    pub mode: Mode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    Dev,
    Prod,
}

impl BuildCommand {
    /// Run the build command
    pub fn run(&self) -> Result<()> {
        let config_file = ConfigFile::open(&self.config).unwrap_or_exit();
        let config = config_file.config();

        let source = LocalPlanSource::new(config_file.dir());
        let plans = source.load(&config.tracking_plans, self.update)?;

        let client = &config.client;
        let generator = language::find_generator(&client.language).ok_or_else(|| {
            eyre::eyre!(
                "could not find a language generator for '{}' (supported: {})",
                client.language,
                language::supported_languages()
            )
        })?;

        tracing::debug!(
            language = %client.language,
            sdk = %client.sdk,
            plans = plans.len(),
            "generating client code"
        );

        let ctx = BuildContext {
            config_dir: config_file.dir(),
            plan_configs: &config.tracking_plans,
            generator,
            options: GenerationOptions {
                version: env!("CARGO_PKG_VERSION").to_string(),
                is_development: self.mode == Mode::Dev,
            },
            renderer: RendererOptions::new(client.sdk.clone(), client.language_options.clone()),
        };

        let summary = typetrace_codegen::build(&ctx, &plans)?;

        let report = BuildReport::new(&client.language, config_file.dir(), &summary);
        report.render(&mut TerminalOutput::new());

        if let Some(after) = config.scripts.as_ref().and_then(|s| s.after.as_deref()) {
            println!("Running after script: {after}");
            run_script(after, config_file.dir(), ScriptPhase::After)?;
        }

        Ok(())
    }
}
