//! Numbered menu rendering

use std::fmt::Display;

/// Split `items` into pages of "index. item" lines
///
/// Numbering is 1-based and restarts on every page. A page size of zero
/// yields no pages.
pub fn paginate<T: Display>(items: &[T], page_size: usize) -> Vec<Vec<String>> {
    if page_size == 0 {
        return Vec::new();
    }

    items.chunks(page_size).map(number_entries).collect()
}

/// A single 1-based page of "index. item" lines, empty past the last page
pub fn page<T: Display>(items: &[T], page_size: usize, page_number: usize) -> Vec<String> {
    if page_size == 0 || page_number == 0 {
        return Vec::new();
    }

    items
        .chunks(page_size)
        .nth(page_number - 1)
        .map(number_entries)
        .unwrap_or_default()
}

/// Number of pages needed to show `len` items
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        len.div_ceil(page_size)
    }
}

/// Sample every `step`-th entry starting from the first
///
/// Labels are the 1-based positions 1, 1 + step, 1 + 2 * step and so on.
/// At most `len / step` entries are produced.
pub fn stepped_menu<T: Display>(items: &[T], step: usize) -> Vec<String> {
    if step == 0 {
        return Vec::new();
    }

    items
        .iter()
        .enumerate()
        .step_by(step)
        .take(items.len() / step)
        .map(|(i, item)| format!("{}. {}", i + 1, item))
        .collect()
}

fn number_entries<T: Display>(chunk: &[T]) -> Vec<String> {
    chunk
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item))
        .collect()
}
