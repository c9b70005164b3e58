//! Line-oriented parsers for resource and source files.
//!
//! - `comment`: Comment stripping shared by both file kinds
//! - `strings`: `.strings` resource files (entries, locale folders)
//! - `usage`: Key references in source code

pub mod comment;
pub mod strings;
pub mod usage;
