//! `temple_core` is the core library for the temple template scanner. It
//! locates embedded template regions inside a source text buffer — either
//! markup-style tag blocks (`<template> ... </template>`) or tagged string
//! literals (``identifier`...` ``) — and reports their exact byte boundaries
//! plus minimal structural metadata. Consumers use these spans to extract,
//! lint, or transform embedded template content without re-parsing the
//! entire host language.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Source file text
//!   → Import scanner (resolves which local names are legitimate literal tags)
//!   → Tag matcher (pairs `<template ...>` with the first `</template>`)
//!   → Literal matcher (pairs `identifier`-tagged backticks, tracking
//!     escapes and interpolation sub-scopes)
//!   → Aggregator (merges both match streams, ordered by start offset)
//! ```
//!
//! ## Modules
//!
//! - [`config`] — Scan options: the markup tag word and the
//!   `(import path, import identifier)` filters that restrict literal
//!   matching.
//! - [`import_scanner`] — Import-declaration scanning and local-alias
//!   resolution for template literal tags.
//!
//! ## Key Types
//!
//! - [`TemplateMatch`] — One located template region with its opening and
//!   closing [`DelimiterMatch`] records.
//! - [`ParseTemplatesOptions`] — Configuration for one scan invocation.
//! - [`ImportBinding`] — A single `(path, imported name, local alias)`
//!   binding produced by the import scanner.
//! - [`ScanDiagnostic`] — A silently skipped region, reported by
//!   [`parse_templates_with_diagnostics`].
//!
//! ## Quick Start
//!
//! ```rust
//! use temple_core::ParseTemplatesOptions;
//! use temple_core::parse_templates;
//!
//! let source = "<template>Hello!</template>";
//! let options = ParseTemplatesOptions::with_template_tag("template");
//!
//! let matches = parse_templates(source, "hello.gjs", &options);
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].contents(source), "Hello!");
//! ```
//!
//! The scan is pure: identical inputs always produce the identical match
//! list, nothing is cached between invocations, and malformed regions are
//! skipped rather than reported as errors. Use
//! [`parse_templates_with_diagnostics`] or [`parse_templates_strict`] when
//! skipped regions should be surfaced.

pub use config::*;
pub use error::*;
pub use import_scanner::*;
pub use matches::*;
pub use parser::*;

pub mod config;
mod error;
pub mod import_scanner;
pub(crate) mod literal_matcher;
mod matches;
mod parser;
pub(crate) mod tag_matcher;

#[cfg(test)]
mod __fixtures;
