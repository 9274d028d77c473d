//! Core operations.
//!
//! This module contains the business logic for pybarrel commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod discover;
pub mod extract;
pub mod generate;

pub use check::check;
pub use generate::{GenerateOptions, generate};
