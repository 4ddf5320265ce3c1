//! Core data types used across the analysis pipeline.
//!
//! ## Module Structure
//!
//! - `range`: Byte ranges into source text (`TextRange`) and replacement fixes (`Fix`)
//! - `source`: Source code location types (`SourceContext`, `SourceLocation`)

pub mod range;
pub mod source;

pub use range::{Fix, TextRange};
pub use source::{SourceContext, SourceLocation};
