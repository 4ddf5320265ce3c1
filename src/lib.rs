//! sortkeys - keep annotated TypeScript keys in order
//!
//! sortkeys is a CLI tool and library that checks object literals, type
//! literals, interfaces and enums marked with a `// @sort-keys` comment and
//! reorders their members when they are out of order. Comments and
//! formatting between members stay where they are.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and actions)
//! - `config`: Configuration file loading and parsing
//! - `core`: Parsing, comparison, permutation and patching engine
//! - `issues`: Issue type definitions and reporting
//! - `rules`: The `sort-keys` rule dispatcher

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod rules;
