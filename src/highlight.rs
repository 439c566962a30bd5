//! Live row highlighting for fstyle documents
//!
//! While a directive document is on screen, each row is painted with the
//! style it describes. An `active` row additionally sets the base style
//! for the rows after it, so the document previews itself as it would
//! look in a live frame.
//!
//! The host calls into [`RowHighlighter`] once per visible row per redraw,
//! top to bottom within a pass. Passes may start anywhere (scrolling,
//! partial redraws); the highlighter keeps whatever the `active` rows it
//! has been shown so far add up to, and never resets on its own.

use log::{debug, warn};

use crate::config::Config;
use crate::style::{parse_directive_report, Attribute, Component, Directive};

/// Supplies row text to the highlighter by index
pub trait RowSource {
    /// Text of row `idx`, or `None` past the end of the document
    fn row(&self, idx: usize) -> Option<&str>;
}

impl RowSource for [String] {
    fn row(&self, idx: usize) -> Option<&str> {
        self.get(idx).map(|s| s.as_str())
    }
}

impl RowSource for Vec<String> {
    fn row(&self, idx: usize) -> Option<&str> {
        self.as_slice().row(idx)
    }
}

impl RowSource for [&str] {
    fn row(&self, idx: usize) -> Option<&str> {
        self.get(idx).copied()
    }
}

/// Per-document highlighting state
#[derive(Debug, Clone)]
pub struct RowHighlighter {
    /// Accumulated style of the `active` rows processed so far
    known_active: Attribute,
    /// Whether highlighting is applied at all
    enabled: bool,
    /// Log ignored words at warn level
    report_warnings: bool,
}

impl RowHighlighter {
    /// Create a highlighter with default settings
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    /// Create a highlighter from configuration
    pub fn with_config(config: &Config) -> Self {
        Self {
            known_active: Attribute::ZERO,
            enabled: config.enabled,
            report_warnings: config.report_warnings,
        }
    }

    /// The current cascading `active` style
    pub fn known_active(&self) -> Attribute {
        self.known_active
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Compute the base attribute for a row.
    ///
    /// An `active` row is layered onto the cascading style before the row's
    /// own base is computed, so it is painted with its new value. Layering
    /// only adds: a later `active` row replaces colors it names, but flags
    /// set by any earlier `active` row stay set for the highlighter's
    /// lifetime.
    pub fn compute_row_base(&mut self, row_text: &str) -> Attribute {
        if !self.enabled {
            return Attribute::ZERO;
        }

        let directive = self.parse(row_text);
        self.row_base(&directive)
    }

    /// Override every cell of a row that carries directive words.
    ///
    /// Rows without any colors or flags are left untouched so that other
    /// highlighting shows through. Returns whether the cells were replaced.
    pub fn compute_line_override(&self, row_text: &str, cells: &mut [Attribute]) -> bool {
        if !self.enabled {
            return false;
        }

        let directive = self.parse(row_text);
        self.line_override(&directive, cells)
    }

    /// Run both row callbacks in redraw order and return the row base.
    ///
    /// The row is parsed once, so its warnings are logged once.
    pub fn highlight_row(&mut self, row_text: &str, cells: &mut [Attribute]) -> Attribute {
        if !self.enabled {
            return Attribute::ZERO;
        }

        let directive = self.parse(row_text);
        let base = self.row_base(&directive);
        self.line_override(&directive, cells);
        base
    }

    /// Compute the row base for row `idx` of `source`.
    ///
    /// Rows past the end yield `None` and leave the state alone.
    pub fn row_base_at<S: RowSource + ?Sized>(
        &mut self,
        source: &S,
        idx: usize,
    ) -> Option<Attribute> {
        let text = source.row(idx)?;
        Some(self.compute_row_base(text))
    }

    fn row_base(&mut self, directive: &Directive) -> Attribute {
        if directive.component == Some(Component::Active) {
            let updated = self.known_active.combine(&directive.attr);
            if updated != self.known_active {
                debug!("active style changed: {:?}", updated);
                self.known_active = updated;
            }
        }

        if directive.attr.is_zero() {
            self.known_active
        } else {
            self.known_active.combine(&directive.attr)
        }
    }

    fn line_override(&self, directive: &Directive, cells: &mut [Attribute]) -> bool {
        if directive.attr.is_zero() {
            return false;
        }

        cells.fill(self.known_active.combine(&directive.attr));
        true
    }

    fn parse(&self, row_text: &str) -> Directive {
        let directive = parse_directive_report(row_text);
        for warning in &directive.warnings {
            if self.report_warnings {
                warn!("fstyle: {}", warning);
            } else {
                debug!("fstyle: {}", warning);
            }
        }
        directive
    }
}

impl Default for RowHighlighter {
    fn default() -> Self {
        Self::new()
    }
}
