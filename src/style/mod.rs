//! Style model and directive language
//!
//! This module provides:
//! - Attributes and the merge used to layer them
//! - The fixed set of style components
//! - The directive parser
//! - Style tables built from whole documents

mod attr;
mod component;
mod directive;
mod table;

pub use attr::{AttrFlags, Attribute, Color, ColorKind, PALETTE_16_BASE};
pub use component::Component;
pub use directive::{format_color, parse_color, parse_directive, parse_directive_report, Directive};
pub use table::{LineWarning, StyleTable};
