//! Shared table rendering helpers
//!
//! All three screens show rows in the same column-aligned form: a header
//! line, a separator, then one line per row. Column widths are derived from
//! the widest cell, measured in display columns.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Widest cell per column, capped so one long value cannot eat the screen
pub fn column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.width());
            }
        }
    }
    for width in &mut widths {
        *width = (*width).min(40);
    }
    widths
}

/// Pad or truncate a cell to `width` display columns
fn pad_cell(text: &str, width: usize) -> String {
    if text.width() <= width {
        let padding = width - text.width();
        return format!("{}{}", text, " ".repeat(padding));
    }

    // Truncate by display width, leaving room for the ellipsis
    let room = width.saturating_sub(3);
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > room {
            break;
        }
        used += w;
        out.push(c);
    }
    format!("{}...{}", out, " ".repeat(width.saturating_sub(used + 3)))
}

/// Styled header line with column separators
pub fn header_line(headers: &[&str], widths: &[usize]) -> Line<'static> {
    let spans: Vec<Span> = headers
        .iter()
        .enumerate()
        .flat_map(|(i, h)| {
            vec![
                Span::styled(
                    pad_cell(h, widths[i]),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" │ "),
            ]
        })
        .collect();
    Line::from(spans)
}

/// Separator line between the header and the rows
pub fn separator_line(widths: &[usize]) -> Line<'static> {
    let separator: String = widths
        .iter()
        .map(|w| "─".repeat(*w))
        .collect::<Vec<_>>()
        .join("─┼─");
    Line::from(Span::styled(separator, Style::default().fg(Color::DarkGray)))
}

/// One table row as a plain styled line
pub fn row_line(cells: &[String], widths: &[usize]) -> Line<'static> {
    let spans: Vec<Span> = cells
        .iter()
        .enumerate()
        .flat_map(|(i, cell)| {
            let width = widths.get(i).copied().unwrap_or(10);
            vec![
                Span::styled(pad_cell(cell, width), Style::default().fg(Color::White)),
                Span::raw(" │ "),
            ]
        })
        .collect();
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_widths_take_widest_cell() {
        let rows = vec![
            vec!["1".to_string(), "Orientation Day".to_string()],
            vec!["12".to_string(), "Fair".to_string()],
        ];
        let widths = column_widths(&["ID", "Title"], &rows);
        assert_eq!(widths, vec![2, 15]);
    }

    #[test]
    fn test_column_widths_are_capped() {
        let rows = vec![vec!["x".repeat(120)]];
        let widths = column_widths(&["A"], &rows);
        assert_eq!(widths, vec![40]);
    }

    #[test]
    fn test_pad_cell_pads_and_truncates() {
        assert_eq!(pad_cell("ab", 4), "ab  ");
        assert_eq!(pad_cell("abcdefgh", 6), "abc...");
    }
}
