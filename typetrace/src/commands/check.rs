use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use typetrace_config::ConfigFile;

use super::UnwrapOrExit;
use crate::{language, plans::LocalPlanSource};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to typetrace.toml (defaults to ./typetrace.toml)
    #[arg(short, long, default_value = "typetrace.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let config_file = ConfigFile::open(&self.config).unwrap_or_exit();
        let config = config_file.config();
        let source = LocalPlanSource::new(config_file.dir());

        let mut errors = 0usize;

        if language::find_generator(&config.client.language).is_none() {
            eprintln!(
                "error: no language generator for '{}' (supported: {})",
                config.client.language,
                language::supported_languages()
            );
            errors += 1;
        }

        for plan in &config.tracking_plans {
            let path = source.plan_path(plan);
            if !path.is_file() {
                eprintln!(
                    "error: tracking plan '{}' has no local copy at {}",
                    plan.id,
                    path.display()
                );
                errors += 1;
            }
        }

        if errors > 0 {
            std::process::exit(1);
        }

        println!("✓ {} is valid\n", self.config.display());
        println!("  language: {}", config.client.language);
        println!("  sdk: {}", config.client.sdk);

        let count = config.tracking_plans.len();
        println!(
            "  {} tracking plan{}:",
            count,
            if count == 1 { "" } else { "s" }
        );
        for plan in &config.tracking_plans {
            println!("    {} -> {}", plan.id, plan.path.display());
        }

        Ok(())
    }
}
