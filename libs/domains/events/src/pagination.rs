//! Offset-based windowing over an ordered, immutable result set.

use crate::models::PageRequest;

/// A borrowed page of `items` plus the metadata a client needs to continue.
#[derive(Debug, PartialEq)]
pub struct Window<'a, T> {
    /// At most `page_size` entries, in source order
    pub items: &'a [T],
    /// Length of the whole source
    pub total: usize,
    /// `min(offset + page_size, total)`
    pub next_offset: usize,
    /// `next_offset < total`
    pub has_more: bool,
}

/// Cut the page described by `request` out of `items`.
///
/// An offset at or past the end yields an empty window whose `next_offset`
/// is `total`. A page size larger than what remains yields the remainder;
/// nothing is padded. All arithmetic saturates.
pub fn window<T>(items: &[T], request: PageRequest) -> Window<'_, T> {
    let total = items.len();
    let offset = request.offset();
    let next_offset = offset.saturating_add(request.page_size()).min(total);

    let items: &[T] = if offset >= total {
        &[]
    } else {
        items.get(offset..next_offset).unwrap_or(&[])
    };

    Window {
        items,
        total,
        next_offset,
        has_more: next_offset < total,
    }
}
