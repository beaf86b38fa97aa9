//! Removal of stale generated files.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{build::BuildError, header::GENERATED_FILE_MARKER};

/// Number of leading lines searched for the generated-file marker.
const HEADER_SCAN_LINES: usize = 8;

/// Delete every direct child file of `dir` whose header carries the
/// generated-file marker, and return the deleted paths.
///
/// Subdirectories are left untouched; generators emit flat directories only,
/// so there is nothing to recurse into. A read failure on any candidate
/// aborts the clear: a partial clear would leave stale and fresh generated
/// files mixed together. Running twice with no new matching files deletes
/// nothing.
///
/// The marker check is a content heuristic, not an ownership boundary. A
/// user file that happens to carry the marker text in its first lines will
/// be deleted.
pub fn clear_generated_files(dir: &Path) -> Result<Vec<PathBuf>, BuildError> {
    let mut deleted = Vec::new();

    let entries = fs::read_dir(dir).map_err(|e| BuildError::cleanup(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| BuildError::cleanup(dir, e))?;
        let path = entry.path();

        let file_type = entry.file_type().map_err(|e| BuildError::cleanup(&path, e))?;
        if file_type.is_dir() {
            continue;
        }

        let contents = fs::read_to_string(&path).map_err(|e| BuildError::cleanup(&path, e))?;
        if header_contains_marker(&contents) {
            tracing::debug!(path = %path.display(), "deleting generated file");
            fs::remove_file(&path).map_err(|e| BuildError::cleanup(&path, e))?;
            deleted.push(path);
        }
    }

    Ok(deleted)
}

fn header_contains_marker(contents: &str) -> bool {
    contents
        .lines()
        .take(HEADER_SCAN_LINES)
        .any(|line| line.contains(GENERATED_FILE_MARKER))
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn generated_contents() -> String {
        format!("// {GENERATED_FILE_MARKER}\n// To update this file, run:\nexport {{}};\n")
    }

    #[test]
    fn test_deletes_only_marked_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.ts"), generated_contents()).unwrap();
        fs::write(temp.path().join("b.ts"), "export const b = 1;\n").unwrap();
        fs::write(temp.path().join("plan.json"), "{ \"id\": \"tp_app\" }\n").unwrap();
        fs::create_dir(temp.path().join("nested")).unwrap();
        fs::write(temp.path().join("nested").join("c.ts"), generated_contents()).unwrap();

        let deleted = clear_generated_files(temp.path()).unwrap();

        assert_eq!(deleted, vec![temp.path().join("a.ts")]);
        assert!(!temp.path().join("a.ts").exists());
        assert!(temp.path().join("b.ts").exists());
        assert!(temp.path().join("plan.json").exists());
        assert!(temp.path().join("nested").join("c.ts").exists());
    }

    #[test]
    fn test_clearing_twice_deletes_nothing_new() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.ts"), generated_contents()).unwrap();
        fs::write(temp.path().join("b.ts"), "export const b = 1;\n").unwrap();

        clear_generated_files(temp.path()).unwrap();
        let deleted = clear_generated_files(temp.path()).unwrap();

        assert!(deleted.is_empty());
        assert!(temp.path().join("b.ts").exists());
    }

    #[test]
    fn test_marker_outside_header_region_is_ignored() {
        let temp = TempDir::new().unwrap();
        let mut contents = "\n".repeat(HEADER_SCAN_LINES);
        contents.push_str(GENERATED_FILE_MARKER);
        contents.push('\n');
        fs::write(temp.path().join("notes.txt"), contents).unwrap();

        let deleted = clear_generated_files(temp.path()).unwrap();

        assert!(deleted.is_empty());
        assert!(temp.path().join("notes.txt").exists());
    }

    #[test]
    fn test_unreadable_candidate_is_fatal() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.ts"), generated_contents()).unwrap();
        fs::write(temp.path().join("binary.bin"), [0xff, 0xfe, 0x00, 0x01]).unwrap();

        let err = clear_generated_files(temp.path()).unwrap_err();

        assert!(matches!(err, BuildError::Cleanup { .. }));
    }

    #[test]
    fn test_missing_directory_is_fatal() {
        let temp = TempDir::new().unwrap();
        let err = clear_generated_files(&temp.path().join("absent")).unwrap_err();

        assert!(matches!(err, BuildError::Cleanup { .. }));
    }
}
