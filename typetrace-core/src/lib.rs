//! Core utilities for the typetrace client generator.
//!
//! This crate provides the file-writing primitives and naming helpers used
//! across the typetrace workspace.

mod file;
mod utils;

// File operations
pub use file::{
    File, Overwrite, PathKind, WriteResult, ensure_directory, ensure_extension, resolve_path,
    write_file,
};
// String utilities
pub use utils::{to_camel_case, to_pascal_case};
