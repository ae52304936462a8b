use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width of a string in terminal cells.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate a string to fit within `max_cells` terminal cells, appending
/// `…` if anything was cut.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if max_cells == 0 {
        return String::new();
    }
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells <= 1 {
        return "\u{2026}".to_string();
    }
    let budget = max_cells - 1; // reserve 1 cell for '…'
    let mut width = 0;
    let mut result = String::new();
    for grapheme in s.graphemes(true) {
        let gw = display_width(grapheme);
        if width + gw > budget {
            break;
        }
        width += gw;
        result.push_str(grapheme);
    }
    result.push('\u{2026}');
    result
}

/// Next grapheme boundary after `byte_offset`. Returns None if at end.
pub fn next_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset >= s.len() {
        return None;
    }
    if let Some((i, _)) = s[byte_offset..].grapheme_indices(true).nth(1) {
        return Some(byte_offset + i);
    }
    Some(s.len())
}

/// Previous grapheme boundary before `byte_offset`. Returns None if at start.
pub fn prev_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset == 0 {
        return None;
    }
    let prefix = &s[..byte_offset];
    let mut last_start = 0;
    for (i, _) in prefix.grapheme_indices(true) {
        last_start = i;
    }
    Some(last_start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn width_counts_wide_chars() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("日本"), 4);
    }

    #[test]
    fn truncate_short_strings_unchanged() {
        assert_eq!(truncate_to_width("abc", 10), "abc");
        assert_eq!(truncate_to_width("abc", 3), "abc");
    }

    #[test]
    fn truncate_reserves_ellipsis_cell() {
        assert_eq!(truncate_to_width("abcdef", 4), "abc\u{2026}");
        assert_eq!(truncate_to_width("abcdef", 1), "\u{2026}");
        assert_eq!(truncate_to_width("abcdef", 0), "");
    }

    #[test]
    fn truncate_does_not_split_wide_chars() {
        // '日' is 2 cells; budget of 2 cells fits only the ellipsis + nothing
        assert_eq!(truncate_to_width("日本語", 2), "\u{2026}");
        assert_eq!(truncate_to_width("日本語", 3), "日\u{2026}");
    }

    #[test]
    fn grapheme_boundaries_step_over_clusters() {
        let s = "a\u{0301}b"; // a + combining acute, then b
        assert_eq!(next_grapheme_boundary(s, 0), Some(3));
        assert_eq!(next_grapheme_boundary(s, 3), Some(4));
        assert_eq!(next_grapheme_boundary(s, 4), None);
        assert_eq!(prev_grapheme_boundary(s, 4), Some(3));
        assert_eq!(prev_grapheme_boundary(s, 3), Some(0));
        assert_eq!(prev_grapheme_boundary(s, 0), None);
    }
}
