//! Style component tables
//!
//! A [`StyleTable`] holds one attribute per component. It is built by
//! parsing a whole directive document and can be rendered back into an
//! editable document.

use log::debug;

use super::attr::{AttrFlags, Attribute, Color};
use super::component::Component;
use super::directive::{format_color, parse_directive_report};
use crate::error::DirectiveWarning;

/// Width of the component name column in rendered documents
const NAME_WIDTH: usize = 20;

/// A warning tied to a document line (1-based)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineWarning {
    pub line: usize,
    pub warning: DirectiveWarning,
}

/// Attributes for every style component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleTable {
    attrs: [Attribute; Component::COUNT],
}

impl StyleTable {
    /// Create a table with every component unset
    pub fn new() -> Self {
        Self {
            attrs: [Attribute::ZERO; Component::COUNT],
        }
    }

    /// Build a table from the lines of a directive document.
    ///
    /// Lines naming no known component are skipped. A later line for the
    /// same component replaces the earlier one. Ignored words are neither
    /// collected nor logged; use [`StyleTable::build_with_report`] for that.
    pub fn build<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        table.load(lines, None);
        table
    }

    /// Build a table and collect the warnings from every directive line.
    ///
    /// Lines that name no known component (comments included) are not
    /// directive lines and report nothing.
    pub fn build_with_report<I, S>(lines: I) -> (Self, Vec<LineWarning>)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        let mut report = Vec::new();
        table.load(lines, Some(&mut report));
        (table, report)
    }

    fn load<I, S>(&mut self, lines: I, mut report: Option<&mut Vec<LineWarning>>)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for (idx, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            if line.trim().is_empty() {
                continue;
            }

            let directive = parse_directive_report(line);
            let Some(component) = directive.component else {
                continue;
            };

            if let Some(report) = report.as_deref_mut() {
                for warning in directive.warnings {
                    debug!("fstyle line {}: {}", idx + 1, warning);
                    report.push(LineWarning {
                        line: idx + 1,
                        warning,
                    });
                }
            }

            self.set(component, directive.attr);
        }
    }

    /// Get the attribute for a component (zero if never set)
    pub fn lookup(&self, component: Component) -> Attribute {
        self.attrs[component.index()]
    }

    /// Replace the attribute for a component
    pub fn set(&mut self, component: Component, attr: Attribute) {
        self.attrs[component.index()] = attr;
    }

    /// Render the table as a directive document.
    ///
    /// The palette components are never written.
    pub fn render(&self) -> String {
        let mut out = String::new();

        for component in Component::ALL.iter().filter(|c| !c.is_palette()) {
            let words = attr_words(&self.lookup(*component));
            let line = format!(
                "{:<width$} {}",
                component.name(),
                words.join("  "),
                width = NAME_WIDTH
            );
            out.push_str(line.trim_end());
            out.push('\n');
        }

        out
    }

    /// Render with a comment header naming the style
    pub fn render_named(&self, name: &str) -> String {
        format!("# fstyle generated for '{}'\n{}", name, self.render())
    }
}

impl Default for StyleTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Directive words describing an attribute, in canonical order
fn attr_words(attr: &Attribute) -> Vec<String> {
    let mut words = Vec::new();

    push_side(&mut words, "fg", attr.fg, attr.flags, AttrFlags::LIGHT_16_FG, "16-light-fg");
    push_side(&mut words, "bg", attr.bg, attr.flags, AttrFlags::LIGHT_16_BG, "16-light-bg");

    for (flag, word) in [
        (AttrFlags::INVERSE, "inverse"),
        (AttrFlags::BOLD, "bold"),
        (AttrFlags::UNDERLINE, "underline"),
    ] {
        if attr.flags.contains(flag) {
            words.push(word.to_string());
        }
    }

    words
}

fn push_side(
    words: &mut Vec<String>,
    side: &str,
    color: Option<Color>,
    flags: AttrFlags,
    light: AttrFlags,
    light_word: &str,
) {
    if let Some(color) = color {
        words.push(format!("{} {}", side, format_color(&color)));
    }
    if flags.contains(light) {
        words.push(light_word.to_string());
    }
}
