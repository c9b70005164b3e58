//! Core data types shared by the parsers, the load phase and the rules.
//!
//! ## Module Structure
//!
//! - `message`: Locations inside resource files (MessageLocation, MessageContext)
//! - `source`: Locations inside source files (SourceLocation, SourceContext)
//! - `resource`: Parsed resource files (Line, ResourceDatabase, LocaleGroup)
//! - `usage`: Keys referenced from source code (UsedKeys)

pub mod message;
pub mod resource;
pub mod source;
pub mod usage;

pub use message::{MessageContext, MessageLocation};
pub use resource::{Line, LocaleGroup, ResourceDatabase, project_keys};
pub use source::{SourceContext, SourceLocation};
pub use usage::UsedKeys;
