//! Export manifest generation for the pybarrel generator.
//!
//! Turns per-module declaration records into the package's `__init__.py`:
//! one `from .<module> import (...)` block per module with something to
//! export, followed by the aggregated `__all__` list.

pub mod ast;
mod builder;
mod generator;
mod init_file;

pub use builder::SourceBuilder;
pub use generator::ExportManifest;
pub use init_file::InitPy;
