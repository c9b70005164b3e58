//! Core audit engine.
//!
//! Everything is loaded first (`CheckContext::new`), then the rules run over
//! the immutable result.
//!
//! ## Module Structure
//!
//! - `context`: Load phase (config, discovery, parallel parsing, grouping)
//! - `data`: Shared data types
//! - `parsers`: Comment stripping, entry and usage extraction
//! - `scan`: File discovery

pub mod context;
pub mod data;
pub mod parsers;
pub mod scan;

pub use context::CheckContext;
pub use data::*;
