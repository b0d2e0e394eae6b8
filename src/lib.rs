//! # mdindex
//!
//! Keeps a table of contents inside a markdown document up to date.
//!
//! The index is written between two sentinel comments at the top of the
//! document. Every run strips the previous region first, so running the tool
//! again only refreshes the index instead of stacking a second one.
//!
//! ## Example
//!
//! ```rust
//! use mdindex::{generate, parse_headers};
//!
//! let markdown = "# Introduction\n\n## Background\n\n## Methodology\n";
//!
//! let forest = parse_headers(markdown);
//! assert_eq!(forest.len(), 3);
//!
//! let indexed = generate(markdown).unwrap();
//! assert!(indexed.starts_with("<!-- INDEX BEGIN -->\n\n- [Introduction](#introduction)\n"));
//! assert_eq!(generate(&indexed).unwrap(), indexed);
//! ```

/// Configuration module for user preferences.
///
/// Loads the write mode and reporting settings from the user's config directory.
pub mod config;

mod error;

/// Index region handling: cleaning, rendering and generation.
pub mod index;

/// Document file access.
pub mod io;

/// Parser module for markdown headings.
///
/// Extracts headings outside fenced code blocks into a nested forest.
pub mod parser;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::{Error, Result};
pub use index::{BEGIN_MARKER, END_MARKER, clean, generate, is_up_to_date, render};
pub use parser::{Forest, HeaderNode, parse_headers, slugify};
