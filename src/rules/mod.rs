//! Rule implementations for lproj-audit.
//!
//! This module contains pure functions that check for localization issues.
//! Each function takes only the specific inputs it needs (a locale group, or
//! every group plus the used keys) and returns a specific issue type.
//!
//! ## Module Structure
//!
//! Within a locale group:
//! - `duplicate`: Keys assigned more than once in one file
//! - `missing`: Keys missing from some databases of a group
//! - `identical`: Values shared verbatim across databases
//! - `value_equals_key`: Values identical to their key
//! - `placeholder`: Placeholder count differs from the baseline database
//!
//! Project wide:
//! - `unused`: Keys never referenced from source code
//! - `ghost`: Keys referenced from source code but never defined

pub mod duplicate;
pub mod ghost;
pub mod identical;
pub mod missing;
pub mod placeholder;
pub mod unused;
pub mod value_equals_key;

pub use duplicate::check_duplicate_keys;
pub use ghost::check_ghost_keys;
pub use identical::check_identical_translations;
pub use missing::check_missing_translations;
pub use placeholder::check_placeholder_mismatch;
pub use unused::check_unused_keys;
pub use value_equals_key::check_value_equals_key;
