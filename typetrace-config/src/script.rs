use std::{fmt, path::Path, process::Command};

use crate::{Error, Result};

/// Lifecycle phase a user script is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptPhase {
    /// Runs once a build completed successfully.
    After,
}

impl fmt::Display for ScriptPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptPhase::After => write!(f, "after"),
        }
    }
}

/// Run a user-configured lifecycle script with `sh -c` in `dir`.
///
/// A non-zero exit status or a spawn failure is an error; script failures are
/// never suppressed.
pub fn run_script(command: &str, dir: &Path, phase: ScriptPhase) -> Result<()> {
    tracing::debug!(%command, %phase, dir = %dir.display(), "running script");

    let status = Command::new("sh")
        .arg("-c")
        .arg(command)
        .current_dir(dir)
        .status()
        .map_err(|e| Error::script(phase.to_string(), command, e.to_string()))?;

    if !status.success() {
        return Err(Error::script(
            phase.to_string(),
            command,
            format!("exited with {status}"),
        ));
    }

    Ok(())
}
