// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Workspace configuration for the typetrace client generator.
//!
//! Parses and validates `typetrace.toml`, which maps tracking plans to local
//! output directories and selects the client language and SDK, and runs the
//! lifecycle scripts the configuration declares.

mod error;
mod file;
mod script;
mod workspace;

pub use error::{Error, Result};
pub use file::ConfigFile;
pub use script::{ScriptPhase, run_script};
pub use workspace::{
    ClientConfig, ScriptsConfig, TrackingPlanConfig, WorkspaceConfig, parse_str,
    parse_str_with_filename,
};

/// Default name of the workspace configuration file.
pub const CONFIG_FILE_NAME: &str = "typetrace.toml";
