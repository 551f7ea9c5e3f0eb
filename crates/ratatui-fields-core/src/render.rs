use ratatui::buffer::Buffer;
use ratatui::style::Style;
use ratatui::text::Span;
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::theme::Theme;

/// Writes `spans` on row `y` starting at `x`, skipping the first `start_col` display columns and
/// writing at most `max_cols`. Returns the number of columns written.
///
/// A wide glyph that straddles either edge is dropped rather than split. Tabs render as a single
/// space; fields are one row and have no tab stops.
pub fn render_spans_clipped(
    x: u16,
    y: u16,
    start_col: usize,
    max_cols: u16,
    buf: &mut Buffer,
    spans: &[Span<'_>],
) -> u16 {
    let max_cols = max_cols as usize;
    let mut col = 0usize;
    let mut out_cols = 0usize;
    let mut tmp = [0u8; 4];

    for span in spans {
        for ch in span.content.chars() {
            let ch = if ch == '\t' { ' ' } else { ch };
            let w = UnicodeWidthChar::width(ch).unwrap_or(0);
            if w == 0 {
                continue;
            }
            if col < start_col {
                col += w;
                continue;
            }
            if out_cols + w > max_cols {
                return out_cols as u16;
            }

            let cx = x + out_cols as u16;
            if let Some(cell) = buf.cell_mut((cx, y)) {
                cell.set_style(span.style);
                cell.set_symbol(ch.encode_utf8(&mut tmp));
            }
            if w == 2 {
                if let Some(cell) = buf.cell_mut((cx + 1, y)) {
                    cell.set_style(span.style);
                    cell.set_symbol("");
                }
            }
            out_cols += w;
            col += w;
        }
    }
    out_cols as u16
}

pub fn render_str_clipped(
    x: u16,
    y: u16,
    start_col: usize,
    max_cols: u16,
    buf: &mut Buffer,
    input: &str,
    style: Style,
) -> u16 {
    render_spans_clipped(x, y, start_col, max_cols, buf, &[Span::styled(input, style)])
}

pub fn spans_width(spans: &[Span<'_>]) -> usize {
    spans.iter().map(|s| UnicodeWidthStr::width(s.content.as_ref())).sum()
}

/// `Label *: ` for a labelled field, `* ` for an unlabelled required one, nothing otherwise.
pub fn field_prefix<'a>(
    label: Option<&'a str>,
    is_required: bool,
    theme: &Theme,
) -> Vec<Span<'a>> {
    let mut spans = Vec::new();
    match label {
        Some(label) => {
            spans.push(Span::styled(label, theme.label));
            if is_required {
                spans.push(Span::styled(" *", theme.required_marker));
            }
            spans.push(Span::styled(": ", theme.label));
        }
        None if is_required => spans.push(Span::styled("* ", theme.required_marker)),
        None => {}
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn clips_to_max_cols() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 6, 1));
        let written = render_str_clipped(0, 0, 0, 4, &mut buf, "abcdef", Style::default());
        assert_eq!(written, 4);
        assert_eq!(row(&buf, 0), "abcd  ");
    }

    #[test]
    fn skips_leading_columns() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 1));
        render_str_clipped(0, 0, 2, 4, &mut buf, "abcdef", Style::default());
        assert_eq!(row(&buf, 0), "cdef");
    }

    #[test]
    fn drops_wide_glyph_at_right_edge() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 3, 1));
        let written = render_str_clipped(0, 0, 0, 3, &mut buf, "a好b", Style::default());
        assert_eq!(written, 3);
        let written = render_str_clipped(0, 0, 0, 2, &mut buf, "ab好", Style::default());
        assert_eq!(written, 2);
    }

    #[test]
    fn field_prefix_marks_required() {
        fn text(spans: Vec<Span<'_>>) -> String {
            spans.iter().map(|s| s.content.as_ref()).collect()
        }

        let theme = Theme::default();
        assert_eq!(text(field_prefix(Some("Name"), true, &theme)), "Name *: ");
        assert_eq!(text(field_prefix(Some("Name"), false, &theme)), "Name: ");
        assert_eq!(text(field_prefix(None, true, &theme)), "* ");
        assert_eq!(text(field_prefix(None, false, &theme)), "");
    }
}
