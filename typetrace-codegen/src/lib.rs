//! Shared build pipeline for the typetrace client generator.
//!
//! Defines the tracking-plan schema types, the generator capability
//! contract, the generated-file marker and cleaner, and the orchestrator
//! that sequences clear-then-write runs across plans.

mod build;
mod clear;
pub mod event;
mod generator;
mod header;
mod options;
mod schema;

pub use build::{
    BuildContext, BuildError, BuildSummary, PlanOutcome, PlanStatus, build, resolve_destination,
};
pub use clear::clear_generated_files;
pub use generator::{GenerateFn, GeneratedFiles, GeneratorDescriptor};
pub use header::{FILE_HEADER, GENERATED_FILE_MARKER, comment_header, file_header};
pub use options::{DEFAULT_OUTPUT_BASENAME, GenerationOptions, RendererOptions};
pub use schema::{Rule, TrackingPlan};
