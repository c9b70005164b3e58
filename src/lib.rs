//! lproj-audit - consistency checker for Apple `.strings` localizations
//!
//! lproj-audit loads every `.strings` file found in the `*.lproj` folders of a
//! project, groups same-named files across locales, and reports duplicate
//! keys, missing and possibly untranslated entries, placeholder mismatches,
//! and keys that are unused or undefined according to the Swift sources.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Load phase (discovery, parsing, grouping) and data types
//! - `issues`: Issue type definitions and reporting
//! - `rules`: Consistency checks

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod rules;
