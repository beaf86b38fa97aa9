use std::path::PathBuf;

use clap::Args;
use dialoguer::{Input, Select, theme::ColorfulTheme};
use eyre::{Result, WrapErr};
use typetrace_core::{File, WriteResult};

use crate::{
    language::{SUPPORTED_GENERATORS, find_generator, supported_languages},
    plans::PLAN_FILE_NAME,
};

#[derive(Args)]
pub struct InitCommand {
    /// Directory to initialize (defaults to the current directory)
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Target language for the generated client
    #[arg(short, long)]
    pub language: Option<String>,

    /// Analytics SDK the generated client binds to
    #[arg(short, long)]
    pub sdk: Option<String>,
}

impl InitCommand {
    /// Run the init command
    pub fn run(&self) -> Result<()> {
        let language = match &self.language {
            Some(language) => {
                if find_generator(language).is_none() {
                    eyre::bail!(
                        "no language generator for '{}' (supported: {})",
                        language,
                        supported_languages()
                    );
                }
                language.clone()
            }
            None => Self::prompt_language()?,
        };

        let sdk = match &self.sdk {
            Some(sdk) => sdk.clone(),
            None => Self::prompt_sdk(&language)?,
        };

        let config_path = self.dir.join(typetrace_config::CONFIG_FILE_NAME);
        let config = File::create_once(&config_path, starter_config(&language, &sdk));
        if matches!(config.write()?, WriteResult::Skipped) {
            eyre::bail!("{} already exists", config_path.display());
        }
        println!("Created {}", config_path.display());

        let plan_path = self.dir.join("analytics").join(PLAN_FILE_NAME);
        let plan = File::create_once(&plan_path, STARTER_PLAN);
        if matches!(plan.write()?, WriteResult::Written) {
            println!("Created {}", plan_path.display());
        }

        println!();
        println!("Next steps:");
        println!("  typetrace build");

        Ok(())
    }

    fn prompt_language() -> Result<String> {
        let languages: Vec<&str> = SUPPORTED_GENERATORS.iter().map(|g| g.id).collect();
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select a language")
            .items(&languages)
            .default(0)
            .interact()
            .wrap_err("Failed to get language selection")?;

        Ok(languages[selection].to_string())
    }

    fn prompt_sdk(language: &str) -> Result<String> {
        let default = match language {
            "kotlin" => "analytics-kotlin",
            _ => "analytics-node",
        };

        Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Analytics SDK")
            .default(default.to_string())
            .interact_text()
            .wrap_err("Failed to get SDK selection")
    }
}

fn starter_config(language: &str, sdk: &str) -> String {
    format!(
        r#"[client]
language = "{language}"
sdk = "{sdk}"

[[tracking_plans]]
id = "tp_starter"
path = "./analytics"
"#
    )
}

const STARTER_PLAN: &str = r#"{
  "id": "tp_starter",
  "name": "Starter Plan",
  "rules": [
    {
      "name": "App Opened",
      "description": "The user launched the application.",
      "properties": {
        "build": { "type": "string", "description": "Application build number." }
      }
    }
  ]
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starter_config_parses() {
        let config = typetrace_config::parse_str(&starter_config("typescript", "analytics-node"))
            .unwrap();

        assert_eq!(config.client.language, "typescript");
        assert_eq!(config.tracking_plans.len(), 1);
        assert_eq!(config.tracking_plans[0].id, "tp_starter");
    }

    #[test]
    fn test_starter_plan_parses() {
        let plan: typetrace_codegen::TrackingPlan = serde_json::from_str(STARTER_PLAN).unwrap();

        assert_eq!(plan.id, "tp_starter");
        assert!(plan.has_rules());
    }
}
