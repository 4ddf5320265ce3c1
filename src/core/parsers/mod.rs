//! Source file parsing.
//!
//! - `source`: TS/TSX/JS/JSX source parser (uses swc for AST generation)

pub mod source;
