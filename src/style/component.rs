//! Style components
//!
//! The closed set of named regions a style can color, plus the fourteen
//! reserved palette colors. The enum, its ordering, and the name table are
//! all generated from the single list in `components!`.

macro_rules! components {
    ($($variant:ident => $name:literal),* $(,)?) => {
        /// A named, styleable region or reserved palette color
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Component {
            $($variant,)*
        }

        impl Component {
            /// Every component, in declaration order
            pub const ALL: &'static [Component] = &[$(Component::$variant,)*];

            /// Number of components
            pub const COUNT: usize = Self::ALL.len();

            /// The kebab-case name used in directive documents
            pub fn name(&self) -> &'static str {
                match self {
                    $(Component::$variant => $name,)*
                }
            }
        }
    };
}

components! {
    Active => "active",
    Inactive => "inactive",
    ActiveBorder => "active-border",
    InactiveBorder => "inactive-border",
    ActiveGutter => "active-gutter",
    InactiveGutter => "inactive-gutter",
    ActivePopup => "active-popup",
    InactivePopup => "inactive-popup",
    CursorLine => "cursor-line",
    LineNumber => "line-number",
    Selection => "selection",
    Attention => "attention",
    Associate => "associate",
    Search => "search",
    SearchCursor => "search-cursor",
    StatusLine => "status-line",
    CommandLine => "command-line",
    CodeComment => "code-comment",
    CodeKeyword => "code-keyword",
    CodeControlFlow => "code-control-flow",
    CodeTypename => "code-typename",
    CodePreprocessor => "code-preprocessor",
    CodeFnCall => "code-fn-call",
    CodeNumber => "code-number",
    CodeConstant => "code-constant",
    CodeField => "code-field",
    CodeVariable => "code-variable",
    CodeString => "code-string",
    CodeCharacter => "code-character",
    CodeEscape => "code-escape",
    White => "white",
    Gray => "gray",
    Black => "black",
    Red => "red",
    Orange => "orange",
    Yellow => "yellow",
    Lime => "lime",
    Green => "green",
    Turquoise => "turquoise",
    Cyan => "cyan",
    Blue => "blue",
    Purple => "purple",
    Magenta => "magenta",
    Pink => "pink",
}

impl Component {
    /// Resolve a component name. Matching is exact and case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.name() == name)
    }

    /// Position in [`Component::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// One of the fourteen reserved palette colors
    pub fn is_palette(&self) -> bool {
        matches!(
            self,
            Component::White
                | Component::Gray
                | Component::Black
                | Component::Red
                | Component::Orange
                | Component::Yellow
                | Component::Lime
                | Component::Green
                | Component::Turquoise
                | Component::Cyan
                | Component::Blue
                | Component::Purple
                | Component::Magenta
                | Component::Pink
        )
    }
}
