//! Attribute types for styled rows
//!
//! An [`Attribute`] is one style fragment: an optional foreground and
//! background color plus a set of boolean flags. Fragments are layered
//! with [`Attribute::combine`], where the overriding side wins for each
//! color it sets and flags accumulate.

use bitflags::bitflags;

/// Raw value of palette index 0 in the 16-color encoding (SGR black).
pub const PALETTE_16_BASE: u32 = 30;

/// How a color value is encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorKind {
    /// No color was set
    #[default]
    None,
    /// 16-color palette index
    Indexed16,
    /// 256-color palette index
    Indexed256,
    /// 24-bit RGB
    TrueColor,
}

/// A single color value tagged with its encoding
///
/// Values are kept exactly as written in the directive; out-of-range
/// indices are left for the renderer to interpret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// 16-color palette index as written after `!`
    Ansi16(u32),
    /// 256-color palette index as written after `@`
    Ansi256(u32),
    /// 0xRRGGBB
    Rgb(u32),
}

impl Color {
    /// The encoding of this color
    pub fn kind(&self) -> ColorKind {
        match self {
            Color::Ansi16(_) => ColorKind::Indexed16,
            Color::Ansi256(_) => ColorKind::Indexed256,
            Color::Rgb(_) => ColorKind::TrueColor,
        }
    }

    /// The host's raw attribute value: palette base + n for 16-color,
    /// the index or RGB integer otherwise.
    pub fn raw_value(&self) -> u32 {
        match *self {
            Color::Ansi16(n) => PALETTE_16_BASE.wrapping_add(n),
            Color::Ansi256(n) | Color::Rgb(n) => n,
        }
    }
}

bitflags! {
    /// Boolean style toggles carried by an [`Attribute`].
    ///
    /// The light variants only mean something when the matching side is a
    /// 16-color value, but they are stored regardless.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct AttrFlags: u8 {
        const INVERSE = 1 << 0;
        const BOLD = 1 << 1;
        const UNDERLINE = 1 << 2;
        const LIGHT_16_FG = 1 << 3;
        const LIGHT_16_BG = 1 << 4;
    }
}

/// A visual style fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Attribute {
    /// Foreground color, `None` if never set
    pub fg: Option<Color>,
    /// Background color, `None` if never set
    pub bg: Option<Color>,
    /// Inverse, bold, underline and the 16-color light variants
    pub flags: AttrFlags,
}

impl Attribute {
    /// No colors, no flags
    pub const ZERO: Attribute = Attribute {
        fg: None,
        bg: None,
        flags: AttrFlags::empty(),
    };

    /// Same as [`Attribute::ZERO`]
    pub fn zero() -> Self {
        Self::ZERO
    }

    /// Builder: set foreground color
    pub fn with_fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Builder: set background color
    pub fn with_bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Builder: add flags
    pub fn with_flags(mut self, flags: AttrFlags) -> Self {
        self.flags |= flags;
        self
    }

    pub fn fg_kind(&self) -> ColorKind {
        self.fg.map_or(ColorKind::None, |c| c.kind())
    }

    pub fn bg_kind(&self) -> ColorKind {
        self.bg.map_or(ColorKind::None, |c| c.kind())
    }

    /// Check if nothing is set
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Layer `over` on top of `self`.
    ///
    /// Each color set in `over` replaces the one in `self`; flags are
    /// unioned and never cleared.
    pub fn combine(&self, over: &Attribute) -> Attribute {
        Attribute {
            fg: over.fg.or(self.fg),
            bg: over.bg.or(self.bg),
            flags: self.flags | over.flags,
        }
    }
}
