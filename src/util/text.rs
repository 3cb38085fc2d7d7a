use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate to at most `max_cells` terminal cells, ending with `…` when
/// anything was cut.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 0 {
        return String::new();
    }
    if max_cells == 1 {
        return "\u{2026}".to_string();
    }
    let keep = max_cells - 1; // last cell goes to the ellipsis
    let mut used = 0;
    let mut out = String::new();
    for g in s.graphemes(true) {
        let gw = display_width(g);
        if used + gw > keep {
            break;
        }
        used += gw;
        out.push_str(g);
    }
    out.push('\u{2026}');
    out
}

/// Truncate then pad with spaces so the result is exactly `cells` wide.
pub fn fit_to_width(s: &str, cells: usize) -> String {
    let mut out = truncate_to_width(s, cells);
    let w = display_width(&out);
    if w < cells {
        out.push_str(&" ".repeat(cells - w));
    }
    out
}

/// Longest suffix of `s` that fits within `max_cells` terminal cells,
/// cut at a grapheme boundary.
pub fn tail_to_width(s: &str, max_cells: usize) -> &str {
    let mut width = 0;
    let mut start = s.len();
    for (i, g) in s.grapheme_indices(true).rev() {
        let gw = display_width(g);
        if width + gw > max_cells {
            break;
        }
        width += gw;
        start = i;
    }
    &s[start..]
}

/// Byte index of the grapheme boundary after `byte_offset`.
/// None once the offset is at or past the end.
pub fn next_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset >= s.len() {
        return None;
    }
    let first = s[byte_offset..].graphemes(true).next()?;
    Some(byte_offset + first.len())
}

/// Byte index of the grapheme boundary before `byte_offset`.
/// None at the start of the string.
pub fn prev_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset == 0 {
        return None;
    }
    s[..byte_offset]
        .grapheme_indices(true)
        .last()
        .map(|(i, _)| i)
}
