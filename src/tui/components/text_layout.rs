//! Column-aware text helpers for fixed-width terminal layout.
//!
//! All widths are measured in terminal columns, not Unicode scalar count.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "...";

/// Truncates text to the provided display width and appends an ellipsis
/// when anything was cut.
pub(crate) fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if text.width() <= max_width {
        return text.to_owned();
    }
    if max_width <= ELLIPSIS.len() {
        return ".".repeat(max_width);
    }

    let target_width = max_width.saturating_sub(ELLIPSIS.len());
    let mut truncated = take_columns(text, target_width);
    truncated.push_str(ELLIPSIS);
    truncated
}

/// Truncates then right-pads `text` so it occupies exactly `width` columns.
pub(crate) fn fit_to_width(text: &str, width: usize) -> String {
    let mut fitted = truncate_with_ellipsis(text, width);
    let padding = width.saturating_sub(fitted.width());
    fitted.push_str(&" ".repeat(padding));
    fitted
}

/// Clips `text` to `width` columns without an ellipsis, then right-pads it
/// to exactly `width` columns.
pub(crate) fn clip_to_width(text: &str, width: usize) -> String {
    let mut clipped = take_columns(text, width);
    let padding = width.saturating_sub(clipped.width());
    clipped.push_str(&" ".repeat(padding));
    clipped
}

/// Returns the columns `start..start + width` of `line`.
///
/// A wide character that straddles either edge is replaced by spaces so the
/// result is always exactly `width` columns when the line is long enough.
pub(crate) fn column_window(line: &str, start: usize, width: usize) -> String {
    let end = start.saturating_add(width);
    let mut output = String::new();
    let mut column = 0_usize;

    for ch in line.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        let next = column.saturating_add(char_width);
        if column >= end {
            break;
        }
        if column >= start && next <= end {
            output.push(ch);
        } else if next > start {
            let visible = next.min(end).saturating_sub(column.max(start));
            output.push_str(&" ".repeat(visible));
        }
        column = next;
    }

    output
}

/// Greedy word wrap into at most `max_lines` lines of `width` columns.
///
/// The last line carries an ellipsis when text remains.
pub(crate) fn wrap_words(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return Vec::new();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut words = text.split_whitespace().peekable();

    while let Some(word) = words.next() {
        let candidate_width = if current.is_empty() {
            word.width()
        } else {
            current.width().saturating_add(1).saturating_add(word.width())
        };

        if candidate_width <= width || current.is_empty() {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }

        if lines.len().saturating_add(1) == max_lines {
            current.push(' ');
            current.push_str(word);
            for rest in words.by_ref() {
                current.push(' ');
                current.push_str(rest);
            }
            break;
        }
        lines.push(truncate_with_ellipsis(&current, width));
        current = word.to_owned();
    }

    if !current.is_empty() {
        lines.push(truncate_with_ellipsis(&current, width));
    }
    lines
}

/// Takes the longest prefix of `text` that fits in `width` columns.
fn take_columns(text: &str, width: usize) -> String {
    let mut taken = String::new();
    let mut used = 0_usize;
    for ch in text.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used.saturating_add(char_width) > width {
            break;
        }
        taken.push(ch);
        used = used.saturating_add(char_width);
    }
    taken
}
