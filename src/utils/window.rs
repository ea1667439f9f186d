use std::ops::Range;

/// Index range selected by a `[offset, offset + limit)` window over `len` items.
///
/// Never panics: the window is intersected with `[0, len)`, so a negative
/// offset shrinks the page from the front and a negative limit selects nothing.
pub fn clamp_window(len: usize, limit: i64, offset: i64) -> Range<usize> {
    let len = i64::try_from(len).unwrap_or(i64::MAX);
    let start = offset.clamp(0, len);
    let end = offset.saturating_add(limit).clamp(start, len);
    // both bounds lie in [0, len]
    start as usize..end as usize
}
