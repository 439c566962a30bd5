//! Directive parsing
//!
//! One line of an fstyle document names a component and lists the colors
//! and flags for it:
//!
//! ```text
//! <component> [fg <spec>] [bg <spec>] [16-light-fg] [16-light-bg] [inverse] [bold] [underline]
//! ```
//!
//! A `<spec>` is `!n` (16-color), `@n` (256-color) or bare hex (RGB).
//! Words are split like a POSIX shell would split them. Anything the parser
//! does not understand is skipped so that one bad word never spoils the
//! rest of the line.

use super::attr::{AttrFlags, Attribute, Color};
use super::component::Component;
use crate::error::DirectiveWarning;

/// Everything learned from one directive line
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Directive {
    /// The named component, `None` if missing or unrecognized
    pub component: Option<Component>,
    /// Colors and flags from the directive words
    pub attr: Attribute,
    /// Words that were ignored, in line order
    pub warnings: Vec<DirectiveWarning>,
}

/// Parse one directive line into its component and attribute.
///
/// Name resolution and attribute parsing are independent: an unknown name
/// still yields the attribute its words describe.
pub fn parse_directive(line: &str) -> (Option<Component>, Attribute) {
    let directive = parse_directive_report(line);
    (directive.component, directive.attr)
}

/// Like [`parse_directive`], but also reports every ignored word.
pub fn parse_directive_report(line: &str) -> Directive {
    let mut directive = Directive::default();

    let words = match shell_words::split(&escape_comments(line)) {
        Ok(words) => words,
        Err(_) => {
            directive.warnings.push(DirectiveWarning::UnterminatedQuote);
            line.split_whitespace().map(str::to_string).collect()
        }
    };

    let Some((name, rest)) = words.split_first() else {
        return directive;
    };

    directive.component = Component::from_name(name);
    directive.attr = parse_words(rest, &mut directive.warnings);
    directive
}

/// Escape every unquoted `#` that starts a word.
///
/// `shell_words` treats such a `#` as a comment and drops the rest of the
/// line; here it is an ordinary (usually malformed) word.
fn escape_comments(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut word_start = true;

    for ch in line.chars() {
        let mut next_starts_word = false;

        if escaped {
            escaped = false;
        } else if let Some(q) = quote {
            if ch == q {
                quote = None;
            } else if ch == '\\' && q == '"' {
                escaped = true;
            }
        } else {
            match ch {
                '\\' => escaped = true,
                '\'' | '"' => quote = Some(ch),
                '#' if word_start => out.push('\\'),
                c if c.is_whitespace() => next_starts_word = true,
                _ => {}
            }
        }

        word_start = next_starts_word;
        out.push(ch);
    }

    out
}

fn parse_words(words: &[String], warnings: &mut Vec<DirectiveWarning>) -> Attribute {
    let mut attr = Attribute::zero();
    let mut iter = words.iter();

    while let Some(word) = iter.next() {
        match word.as_str() {
            "fg" | "bg" => {
                let side = if word == "fg" { "fg" } else { "bg" };
                let Some(spec) = iter.next() else {
                    warnings.push(DirectiveWarning::MissingColor(side));
                    break;
                };
                match parse_color(spec) {
                    Some(color) if side == "fg" => attr.fg = Some(color),
                    Some(color) => attr.bg = Some(color),
                    None => warnings.push(DirectiveWarning::MalformedColor {
                        side,
                        spec: spec.clone(),
                    }),
                }
            }
            "16-light-fg" => attr.flags |= AttrFlags::LIGHT_16_FG,
            "16-light-bg" => attr.flags |= AttrFlags::LIGHT_16_BG,
            "inverse" => attr.flags |= AttrFlags::INVERSE,
            "bold" => attr.flags |= AttrFlags::BOLD,
            "underline" => attr.flags |= AttrFlags::UNDERLINE,
            other => warnings.push(DirectiveWarning::UnknownWord(other.to_string())),
        }
    }

    attr
}

/// Parse a color spec: `!n`, `@n` or bare hex
pub fn parse_color(spec: &str) -> Option<Color> {
    if let Some(n) = spec.strip_prefix('!') {
        return parse_decimal(n).map(Color::Ansi16);
    }
    if let Some(n) = spec.strip_prefix('@') {
        return parse_decimal(n).map(Color::Ansi256);
    }
    if spec.is_empty() || !spec.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(spec, 16).ok().map(Color::Rgb)
}

fn parse_decimal(s: &str) -> Option<u32> {
    if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Write a color back in directive syntax
pub fn format_color(color: &Color) -> String {
    match color {
        Color::Ansi16(n) => format!("!{}", n),
        Color::Ansi256(n) => format!("@{}", n),
        Color::Rgb(rgb) => format!("{:x}", rgb),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines() {
        assert_eq!(parse_directive(""), (None, Attribute::zero()));
        assert_eq!(parse_directive("   "), (None, Attribute::zero()));
        assert_eq!(parse_directive("\t  \t"), (None, Attribute::zero()));
    }

    #[test]
    fn test_active_with_mixed_encodings() {
        let (id, attr) = parse_directive("active fg !3 bg @200 bold");
        assert_eq!(id, Some(Component::Active));
        assert_eq!(
            attr,
            Attribute::zero()
                .with_fg(Color::Ansi16(3))
                .with_bg(Color::Ansi256(200))
                .with_flags(AttrFlags::BOLD)
        );
    }

    #[test]
    fn test_truecolor() {
        let (id, attr) = parse_directive("line-number fg ff8800");
        assert_eq!(id, Some(Component::LineNumber));
        assert_eq!(attr, Attribute::zero().with_fg(Color::Rgb(0xff8800)));
    }

    #[test]
    fn test_name_only() {
        assert_eq!(parse_directive("red"), (Some(Component::Red), Attribute::zero()));
        assert_eq!(
            parse_directive("  active  "),
            (Some(Component::Active), Attribute::zero())
        );
    }

    #[test]
    fn test_unknown_name_still_parses_words() {
        let (id, attr) = parse_directive("bogus-name fg !1");
        assert_eq!(id, None);
        assert_eq!(attr, Attribute::zero().with_fg(Color::Ansi16(1)));
    }

    #[test]
    fn test_later_color_wins() {
        let (_, attr) = parse_directive("active fg !1 fg @9 bg 00ff00 bg !4");
        assert_eq!(attr.fg, Some(Color::Ansi256(9)));
        assert_eq!(attr.bg, Some(Color::Ansi16(4)));
    }

    #[test]
    fn test_all_flags() {
        let (_, attr) =
            parse_directive("selection inverse bold underline 16-light-fg 16-light-bg");
        assert_eq!(attr.flags, AttrFlags::all());
        assert_eq!(attr.fg, None);
        assert_eq!(attr.bg, None);
    }

    #[test]
    fn test_unpaired_light_flag_is_kept() {
        let (_, attr) = parse_directive("search 16-light-fg bg @3");
        assert!(attr.flags.contains(AttrFlags::LIGHT_16_FG));
        assert_eq!(attr.fg, None);
    }

    #[test]
    fn test_values_not_range_checked() {
        let (_, attr) = parse_directive("active fg !20 bg @300");
        assert_eq!(attr.fg, Some(Color::Ansi16(20)));
        assert_eq!(attr.bg, Some(Color::Ansi256(300)));
    }

    #[test]
    fn test_unknown_words_are_ignored() {
        let directive = parse_directive_report("active italic fg !2 blink bold");
        assert_eq!(directive.component, Some(Component::Active));
        assert_eq!(
            directive.attr,
            Attribute::zero()
                .with_fg(Color::Ansi16(2))
                .with_flags(AttrFlags::BOLD)
        );
        assert_eq!(
            directive.warnings,
            vec![
                DirectiveWarning::UnknownWord("italic".to_string()),
                DirectiveWarning::UnknownWord("blink".to_string()),
            ]
        );
    }

    #[test]
    fn test_malformed_colors_are_ignored() {
        let directive = parse_directive_report("active fg !x bg zz9 bold fg @");
        assert_eq!(directive.attr, Attribute::zero().with_flags(AttrFlags::BOLD));
        assert_eq!(directive.warnings.len(), 3);
        assert_eq!(
            directive.warnings[0],
            DirectiveWarning::MalformedColor {
                side: "fg",
                spec: "!x".to_string()
            }
        );
    }

    #[test]
    fn test_hash_word_does_not_swallow_rest() {
        let directive = parse_directive_report("active bg #ff0000 bold");
        assert_eq!(directive.component, Some(Component::Active));
        assert_eq!(directive.attr, Attribute::zero().with_flags(AttrFlags::BOLD));
        assert_eq!(
            directive.warnings,
            vec![DirectiveWarning::MalformedColor {
                side: "bg",
                spec: "#ff0000".to_string()
            }]
        );

        let directive = parse_directive_report("active fg !2 # note");
        assert_eq!(directive.attr, Attribute::zero().with_fg(Color::Ansi16(2)));
        assert_eq!(
            directive.warnings,
            vec![
                DirectiveWarning::UnknownWord("#".to_string()),
                DirectiveWarning::UnknownWord("note".to_string()),
            ]
        );
    }

    #[test]
    fn test_hash_inside_words_and_quotes() {
        assert_eq!(escape_comments("a#b '#c' \"#d\" #e"), "a#b '#c' \"#d\" \\#e");
        let (id, attr) = parse_directive("#active fg !1");
        assert_eq!(id, None);
        assert_eq!(attr.fg, Some(Color::Ansi16(1)));
    }

    #[test]
    fn test_missing_color() {
        let directive = parse_directive_report("active bold fg");
        assert_eq!(directive.attr, Attribute::zero().with_flags(AttrFlags::BOLD));
        assert_eq!(directive.warnings, vec![DirectiveWarning::MissingColor("fg")]);
    }

    #[test]
    fn test_warnings_do_not_change_result() {
        let line = "cursor-line fg !3 wat bg @7 underline";
        let directive = parse_directive_report(line);
        assert_eq!(parse_directive(line), (directive.component, directive.attr));
    }

    #[test]
    fn test_quoted_words() {
        let (id, attr) = parse_directive("'active' \"fg\" '!5'");
        assert_eq!(id, Some(Component::Active));
        assert_eq!(attr.fg, Some(Color::Ansi16(5)));
    }

    #[test]
    fn test_unterminated_quote_falls_back() {
        let directive = parse_directive_report("active fg !1 'bold");
        assert_eq!(directive.component, Some(Component::Active));
        assert_eq!(directive.attr.fg, Some(Color::Ansi16(1)));
        assert_eq!(directive.warnings[0], DirectiveWarning::UnterminatedQuote);
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("!0"), Some(Color::Ansi16(0)));
        assert_eq!(parse_color("@255"), Some(Color::Ansi256(255)));
        assert_eq!(parse_color("FFffFF"), Some(Color::Rgb(0xffffff)));
        assert_eq!(parse_color("0"), Some(Color::Rgb(0)));
        assert_eq!(parse_color(""), None);
        assert_eq!(parse_color("!"), None);
        assert_eq!(parse_color("!-1"), None);
        assert_eq!(parse_color("+ff"), None);
        assert_eq!(parse_color("#ff0000"), None);
    }

    #[test]
    fn test_format_color() {
        assert_eq!(format_color(&Color::Ansi16(3)), "!3");
        assert_eq!(format_color(&Color::Ansi256(200)), "@200");
        assert_eq!(format_color(&Color::Rgb(0xff8800)), "ff8800");
        assert_eq!(format_color(&Color::Rgb(0x0000ff)), "ff");
    }
}
