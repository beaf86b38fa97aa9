use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Whether a path handed to [`ensure_directory`] is itself a directory or a
/// file whose parent directories must exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    Directory,
    File,
}

/// Resolve a path against `base`, independent of the process working
/// directory.
///
/// Segments are joined in order; an absolute segment replaces everything
/// before it. `base` is expected to be absolute (the canonicalized directory
/// of the workspace configuration).
pub fn resolve_path<I, S>(base: &Path, segments: I) -> PathBuf
where
    I: IntoIterator<Item = S>,
    S: AsRef<Path>,
{
    let mut path = base.to_path_buf();
    for segment in segments {
        path.push(segment);
    }
    path
}

/// Create the directories required before using `path`.
pub fn ensure_directory(path: &Path, kind: PathKind) -> io::Result<()> {
    match kind {
        PathKind::Directory => fs::create_dir_all(path),
        PathKind::File => match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
            _ => Ok(()),
        },
    }
}

/// Append `extension` to `filename` unless it already carries one.
///
/// A filename with any extension is used verbatim.
pub fn ensure_extension(filename: &str, extension: &str) -> String {
    if Path::new(filename).extension().is_some() {
        filename.to_string()
    } else {
        format!("{filename}.{extension}")
    }
}

/// Write `content` to `path` as UTF-8 text, creating missing parent
/// directories and overwriting any existing file.
pub fn write_file(path: &Path, content: &str) -> io::Result<()> {
    ensure_directory(path, PathKind::File)?;
    tracing::debug!(path = %path.display(), "writing file");
    fs::write(path, content)
}

/// A file to be written to disk.
pub struct File {
    path: PathBuf,
    content: String,
    overwrite: Overwrite,
}

impl File {
    /// Create a file that always overwrites (generated output).
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            overwrite: Overwrite::Always,
        }
    }

    /// Create a file that is only written when missing (scaffolding).
    pub fn create_once(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            overwrite: Overwrite::IfMissing,
        }
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the file according to its overwrite rule.
    pub fn write(&self) -> io::Result<WriteResult> {
        match self.overwrite {
            Overwrite::Always => {
                write_file(&self.path, &self.content)?;
                Ok(WriteResult::Written)
            }
            Overwrite::IfMissing => {
                if self.path.exists() {
                    Ok(WriteResult::Skipped)
                } else {
                    write_file(&self.path, &self.content)?;
                    Ok(WriteResult::Written)
                }
            }
        }
    }
}

/// How to handle an existing file at the target path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite (generated output).
    Always,
    /// Only create if the file doesn't exist (scaffolding).
    IfMissing,
}

/// Result of a write operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written.
    Written,
    /// File was skipped (already exists).
    Skipped,
}
