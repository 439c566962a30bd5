//! Terminal output for highlighted rows using crossterm

use std::io::Write;

use crossterm::queue;
use crossterm::style::{self, Attribute as TermAttr, ContentStyle, Print, SetAttribute, SetStyle};
use unicode_width::UnicodeWidthChar;

use crate::error::Result;
use crate::style::{AttrFlags, Attribute, Color};

/// Map a style attribute onto a crossterm style.
///
/// Colors the terminal cannot express as given (16-color indices past 15,
/// 256-color indices past 255, RGB values wider than 24 bits) are left
/// unset rather than converted.
pub fn content_style(attr: &Attribute) -> ContentStyle {
    let mut style = ContentStyle::new();

    style.foreground_color = attr
        .fg
        .and_then(|c| term_color(c, attr.flags.contains(AttrFlags::LIGHT_16_FG)));
    style.background_color = attr
        .bg
        .and_then(|c| term_color(c, attr.flags.contains(AttrFlags::LIGHT_16_BG)));

    if attr.flags.contains(AttrFlags::INVERSE) {
        style.attributes.set(TermAttr::Reverse);
    }
    if attr.flags.contains(AttrFlags::BOLD) {
        style.attributes.set(TermAttr::Bold);
    }
    if attr.flags.contains(AttrFlags::UNDERLINE) {
        style.attributes.set(TermAttr::Underlined);
    }

    style
}

fn term_color(color: Color, light: bool) -> Option<style::Color> {
    match color {
        Color::Ansi16(n) if n < 8 && light => Some(style::Color::AnsiValue(n as u8 + 8)),
        Color::Ansi16(n) if n < 16 => Some(style::Color::AnsiValue(n as u8)),
        Color::Ansi256(n) if n < 256 => Some(style::Color::AnsiValue(n as u8)),
        Color::Rgb(rgb) if rgb <= 0xff_ffff => Some(style::Color::Rgb {
            r: (rgb >> 16) as u8,
            g: (rgb >> 8) as u8,
            b: rgb as u8,
        }),
        _ => None,
    }
}

/// Paint one row of text.
///
/// `cells` holds one attribute per character and is layered over `base`;
/// characters without a cell use `base` alone. Output is truncated to
/// `width` display columns and padded to it in the base style. Attributes
/// are reset at the end of the row.
pub fn paint_row<W: Write>(
    out: &mut W,
    text: &str,
    base: Attribute,
    cells: &[Attribute],
    width: usize,
) -> Result<()> {
    let mut runs: Vec<(Attribute, String)> = Vec::new();
    let mut col = 0;

    for (i, ch) in text.chars().enumerate() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(1);
        if col + ch_width > width {
            break;
        }
        col += ch_width;

        let attr = cells.get(i).map_or(base, |cell| base.combine(cell));
        push_run(&mut runs, attr, ch);
    }

    for _ in col..width {
        push_run(&mut runs, base, ' ');
    }

    for (attr, run) in &runs {
        queue!(
            out,
            SetAttribute(TermAttr::Reset),
            SetStyle(content_style(attr)),
            Print(run)
        )?;
    }
    queue!(out, SetAttribute(TermAttr::Reset))?;

    Ok(())
}

fn push_run(runs: &mut Vec<(Attribute, String)>, attr: Attribute, ch: char) {
    match runs.last_mut() {
        Some((last, run)) if *last == attr => run.push(ch),
        _ => runs.push((attr, ch.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn painted(text: &str, base: Attribute, cells: &[Attribute], width: usize) -> String {
        let mut out = Vec::new();
        paint_row(&mut out, text, base, cells, width).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_content_style_colors() {
        let attr = Attribute::zero()
            .with_fg(Color::Ansi16(3))
            .with_bg(Color::Rgb(0xff8800));
        let style = content_style(&attr);
        assert_eq!(style.foreground_color, Some(style::Color::AnsiValue(3)));
        assert_eq!(
            style.background_color,
            Some(style::Color::Rgb { r: 0xff, g: 0x88, b: 0x00 })
        );
        assert!(style.attributes.is_empty());
    }

    #[test]
    fn test_content_style_light_variants() {
        let attr = Attribute::zero()
            .with_fg(Color::Ansi16(1))
            .with_bg(Color::Ansi16(4))
            .with_flags(AttrFlags::LIGHT_16_FG | AttrFlags::LIGHT_16_BG);
        let style = content_style(&attr);
        assert_eq!(style.foreground_color, Some(style::Color::AnsiValue(9)));
        assert_eq!(style.background_color, Some(style::Color::AnsiValue(12)));
    }

    #[test]
    fn test_content_style_light_flag_ignored_for_other_kinds() {
        let attr = Attribute::zero()
            .with_fg(Color::Ansi256(200))
            .with_flags(AttrFlags::LIGHT_16_FG);
        assert_eq!(
            content_style(&attr).foreground_color,
            Some(style::Color::AnsiValue(200))
        );
    }

    #[test]
    fn test_content_style_out_of_range() {
        let attr = Attribute::zero()
            .with_fg(Color::Ansi16(20))
            .with_bg(Color::Ansi256(300));
        let style = content_style(&attr);
        assert_eq!(style.foreground_color, None);
        assert_eq!(style.background_color, None);

        let attr = Attribute::zero().with_fg(Color::Rgb(0x100_0000));
        assert_eq!(content_style(&attr).foreground_color, None);
    }

    #[test]
    fn test_content_style_flags() {
        let attr = Attribute::zero().with_flags(AttrFlags::all());
        let style = content_style(&attr);
        assert!(style.attributes.has(TermAttr::Reverse));
        assert!(style.attributes.has(TermAttr::Bold));
        assert!(style.attributes.has(TermAttr::Underlined));
    }

    #[test]
    fn test_paint_pads_to_width() {
        let out = painted("abc", Attribute::zero(), &[], 6);
        assert!(out.contains("abc   "));
    }

    #[test]
    fn test_paint_truncates() {
        let out = painted("abcdef", Attribute::zero(), &[], 3);
        assert!(out.contains("abc"));
        assert!(!out.contains("abcd"));
    }

    #[test]
    fn test_paint_wide_chars() {
        let out = painted("日本", Attribute::zero(), &[], 3);
        assert!(out.contains("日 "));
        assert!(!out.contains('本'));
    }

    #[test]
    fn test_paint_splits_runs_on_cell_change() {
        let bold = Attribute::zero().with_flags(AttrFlags::BOLD);
        let out = painted("abcd", Attribute::zero(), &[bold, bold], 4);
        assert!(out.contains("ab"));
        assert!(out.contains("cd"));
        assert!(!out.contains("abcd"));
    }
}
