//! Builders for the TypeScript constructs generated workflow modules use.
//!
//! The dialect matches the emitted style: single-quoted strings, no
//! semicolons on import or const declarations, two-space indentation.

mod consts;
mod fns;
mod imports;
mod objects;

pub use consts::Const;
pub use fns::{Function, Param};
pub use imports::Import;
pub use objects::ObjectLit;
