//! Text rendering of a [`DisplayModel`]. Pure string building, no I/O.

use crate::window::DisplayModel;

/// Marker in front of the highlighted row.
pub const HIGHLIGHT_MARKER: &str = "\u{25b8} ";
/// Prefix of every other row; same width as [`HIGHLIGHT_MARKER`].
pub const BLANK_MARKER: &str = "  ";
/// Indent of notices and separators.
pub const INDENT: &str = "  ";
pub const SEPARATOR_GLYPH: char = '\u{2500}';
pub const SEPARATOR_WIDTH: usize = 28;
pub const FOOTER: &str = "\u{2191}/\u{2193} to move, Enter to select";

pub fn separator() -> String {
    std::iter::repeat(SEPARATOR_GLYPH).take(SEPARATOR_WIDTH).collect()
}

/// Header naming the target date and the filter the candidates belong to.
pub fn header(target: &str, filter: &str) -> String {
    format!("No exact flat for {} (filter: {})", target, filter)
}

/// Frame for the arrow-key picker with `highlighted` marked.
pub fn render(header: &str, model: &DisplayModel, highlighted: usize) -> String {
    let mut lines = framed_lines(header, model, |index, label| {
        let marker = if index == highlighted { HIGHLIGHT_MARKER } else { BLANK_MARKER };
        format!("{}{}", marker, label)
    });
    lines.push(String::new());
    lines.push(FOOTER.to_string());
    lines.join("\n")
}

/// Numbered listing for line-based input; the default row carries a `*`.
pub fn render_numbered(header: &str, model: &DisplayModel) -> String {
    let default = model.none_index();
    let mut lines = framed_lines(header, model, |index, label| {
        let marker = if index == default { '*' } else { ' ' };
        format!("{}{} [{}] {}", INDENT, marker, index + 1, label)
    });
    lines.push(String::new());
    lines.join("\n")
}

// Shared layout: header, blank, older notice, items with the sentinel
// framed by separators, newer notice.
fn framed_lines<F>(header: &str, model: &DisplayModel, mut row: F) -> Vec<String>
where
    F: FnMut(usize, &str) -> String,
{
    let rule = format!("{}{}", INDENT, separator());
    let mut lines = vec![header.to_string(), String::new()];

    if let Some(notice) = model.older_notice() {
        lines.push(format!("{}{}", INDENT, notice));
    }

    for (index, item) in model.items().iter().enumerate() {
        let framed = index == model.none_index();
        if framed {
            lines.push(rule.clone());
        }
        lines.push(row(index, &item.label));
        if framed {
            lines.push(rule.clone());
        }
    }

    if let Some(notice) = model.newer_notice() {
        lines.push(format!("{}{}", INDENT, notice));
    }
    lines
}
