//! Core domain types
//!
//! This module contains the fundamental domain types with zero I/O.
//! All types here are pure, testable, and have clear mathematical properties.

mod coloring;
mod word;

pub use coloring::{Coloring, ColoringParseError};
pub use word::{Word, WordError};
