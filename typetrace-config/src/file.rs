use std::path::{Path, PathBuf};

use crate::{Error, Result, WorkspaceConfig, workspace::parse_str_with_filename};

/// A typetrace.toml file with its parsed configuration and on-disk location.
#[derive(Debug)]
pub struct ConfigFile {
    path: PathBuf,
    dir: PathBuf,
    config: WorkspaceConfig,
}

impl ConfigFile {
    /// Open, parse and validate a typetrace.toml file.
    ///
    /// The containing directory is canonicalized so that generated output
    /// resolves to the same location no matter which directory the tool is
    /// invoked from.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let config = parse_str_with_filename(&content, &filename)?;

        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let dir = parent.canonicalize().map_err(|e| {
            Box::new(Error::Io {
                path: parent.to_path_buf(),
                source: e,
            })
        })?;

        Ok(Self { path, dir, config })
    }

    /// Get the configuration file path as given.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Absolute directory containing the configuration file.
    ///
    /// All relative tracking plan paths resolve against this.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Get the parsed configuration.
    pub fn config(&self) -> &WorkspaceConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_open_resolves_absolute_dir() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("typetrace.toml");
        std::fs::write(
            &path,
            r#"
            [client]
            language = "typescript"
            sdk = "analytics-node"

            [[tracking_plans]]
            id = "tp_app"
            path = "./analytics"
            "#,
        )
        .unwrap();

        let config_file = ConfigFile::open(&path).unwrap();

        assert!(config_file.dir().is_absolute());
        assert_eq!(config_file.config().tracking_plans.len(), 1);
    }

    #[test]
    fn test_open_missing_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let err = ConfigFile::open(temp.path().join("typetrace.toml")).unwrap_err();

        assert!(matches!(*err, Error::Io { .. }));
    }
}
