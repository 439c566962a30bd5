//! fstyle - editor style directives
//!
//! Parses fstyle documents (one `component fg .. bg .. flags` directive
//! per line) into style tables, renders tables back into documents, and
//! highlights an fstyle document live as it is displayed row by row.
//!
//! ```
//! use fstyle::{parse_directive, Color, Component, RowHighlighter};
//!
//! let (component, attr) = parse_directive("active fg !3 bg @200 bold");
//! assert_eq!(component, Some(Component::Active));
//! assert_eq!(attr.fg, Some(Color::Ansi16(3)));
//!
//! let mut highlighter = RowHighlighter::new();
//! let base = highlighter.compute_row_base("active fg !2");
//! assert_eq!(highlighter.compute_row_base(""), base);
//! ```

pub mod config;
pub mod error;
pub mod highlight;
pub mod style;
pub mod terminal;

pub use config::Config;
pub use error::{DirectiveWarning, FstyleError, Result};
pub use highlight::{RowHighlighter, RowSource};
pub use style::{
    parse_directive, parse_directive_report, AttrFlags, Attribute, Color, ColorKind, Component,
    Directive, LineWarning, StyleTable,
};

/// Build a style table from a directive document
pub fn build_style_table(document: &str) -> StyleTable {
    StyleTable::build(document.lines())
}

/// Render a style table as a directive document
pub fn render_style_table(table: &StyleTable) -> String {
    table.render()
}
