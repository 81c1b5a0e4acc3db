//! Fixed-size page windows over an ordered result list.

use std::ops::Range;

/// Questions returned per page
pub const QUESTIONS_PER_PAGE: usize = 10;

/// `[start, end)` for a 1-based page, `None` for pages below 1
pub fn page_window(page: i64) -> Option<Range<usize>> {
    if page < 1 {
        return None;
    }
    let start = usize::try_from(page - 1)
        .ok()?
        .checked_mul(QUESTIONS_PER_PAGE)?;
    Some(start..start.saturating_add(QUESTIONS_PER_PAGE))
}

/// The items of one page, empty when the page is out of range
pub fn paginate<T>(items: &[T], page: i64) -> &[T] {
    match page_window(page) {
        Some(window) if window.start < items.len() => {
            &items[window.start..window.end.min(items.len())]
        }
        _ => &[],
    }
}
