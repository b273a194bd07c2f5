//! Bounded text layout: word wrapping and justified text boxes.

use unicode_width::UnicodeWidthChar;

use crate::index::Point;

use super::Canvas;

/// Horizontal justification inside a text box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Vertical justification inside a text box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VAlign {
    Top,
    #[default]
    Center,
    Bottom,
}

/// Normalize line-break variants and tabs: CRLF and CR become LF, tabs
/// become single spaces. Zero-width characters are dropped so per-cell
/// placement and justification arithmetic match what a terminal shows.
fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\t' => out.push(' '),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push('\n');
            }
            _ if UnicodeWidthChar::width(ch) == Some(0) => {}
            _ => out.push(ch),
        }
    }
    out
}

/// Slice with leading and trailing whitespace-or-control cells removed.
fn trimmed(chars: &[char]) -> &[char] {
    let start = chars.iter().position(|&ch| ch > ' ').unwrap_or(chars.len());
    let end = chars.iter().rposition(|&ch| ch > ' ').map_or(start, |i| i + 1);
    &chars[start..end]
}

/// Wrap `text` into rows at most `max_width` cells wide.
///
/// Each logical input line is trimmed, then split: a line longer than
/// `max_width` breaks at the last whitespace at or before position
/// `max_width` when one exists (the whitespace is consumed), otherwise it
/// hard-breaks at `max_width - 1` characters. Blank lines produce no row.
/// `max_width == 0` disables wrapping and returns the input as a single
/// row.
///
/// ```
/// assert_eq!(glyphgrid::wrap("one two three", 7), vec!["one two", "three"]);
/// ```
pub fn wrap(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![text.to_owned()];
    }
    // A hard break must still consume input at width 1.
    let hard = (max_width - 1).max(1);

    let mut rows = Vec::new();
    for line in normalize(text).split('\n') {
        let chars: Vec<char> = line.chars().collect();
        let mut rest = trimmed(&chars).to_vec();
        while rest.len() > max_width {
            let space = rest[..=max_width].iter().rposition(|&ch| ch <= ' ');
            match space {
                Some(sp) if sp > 0 => {
                    rows.push(rest[..sp].iter().collect());
                    rest = trimmed(&rest[sp + 1..]).to_vec();
                }
                _ => {
                    rows.push(rest[..hard].iter().collect());
                    rest = trimmed(&rest[hard..]).to_vec();
                }
            }
        }
        if !rest.is_empty() {
            rows.push(rest.iter().collect());
        }
    }
    rows
}

impl Canvas {
    /// Place `s` left to right starting at `p`.
    ///
    /// Stops early, without failing, at the first cell that would fall
    /// outside the canvas.
    pub fn text(&mut self, p: Point, s: &str) {
        for (i, ch) in s.chars().enumerate() {
            if self.set(Point::new(p.x + i as i32, p.y), ch).is_err() {
                break;
            }
        }
    }

    /// Lay out `text` inside the rectangle spanned by `a` and `b`,
    /// wrapped and justified.
    ///
    /// The corners are normalized and the text occupies the box interior,
    /// a one-cell inset on every side. Rows are wrapped to the interior
    /// width; rows beyond the interior height are dropped. Centered
    /// justification rounds its offset up on both axes.
    pub fn text_box(&mut self, a: Point, b: Point, text: &str, halign: HAlign, valign: VAlign) {
        let (x1, x2) = if a.x <= b.x { (a.x, b.x) } else { (b.x, a.x) };
        let (y1, y2) = if a.y <= b.y { (a.y, b.y) } else { (b.y, a.y) };
        let w = x2 - x1;
        let h = y2 - y1;
        if w <= 1 || h <= 1 {
            // No interior to draw into.
            return;
        }

        let interior_w = (w - 1) as usize;
        let interior_h = (h - 1) as usize;
        let mut rows = wrap(text, interior_w);
        if rows.len() > interior_h {
            log::debug!(
                "text box interior {interior_w}x{interior_h} drops {} wrapped rows",
                rows.len() - interior_h
            );
            rows.truncate(interior_h);
        }

        let mut y = match valign {
            VAlign::Top => y1 + 1,
            VAlign::Bottom => y2 - rows.len() as i32,
            VAlign::Center => y1 + (h - rows.len() as i32 + 1) / 2,
        };

        for row in &rows {
            if y >= y2 {
                break;
            }
            let len = row.chars().count() as i32;
            let x = match halign {
                HAlign::Left => x1 + 1,
                HAlign::Right => x2 - len,
                HAlign::Center => x1 + (w - len + 1) / 2,
            };
            self.text(Point::new(x, y), row);
            y += 1;
        }
    }
}
