//! Host build-system model for entryclean tools.
//!
//! This crate provides the pieces of a bundler's compilation that post-build
//! plugins operate on:
//! - The compilation itself (output directory, asset table, chunk list)
//! - Entry configuration and entry name resolution
//! - A compiler with an `after_emit` extension point that plugins tap
//! - Reading and writing the chunk list of a bundler stats file

mod compilation;
mod compiler;
mod entry;
mod stats;
mod types;

// Re-export public API
pub use compilation::Compilation;
pub use compiler::{AfterEmitHook, Compiler, CompilerHooks, Plugin};
pub use entry::EntryConfig;
pub use stats::StatsFile;
pub use types::{Asset, AssetTable, Chunk};
