//! Client-side list slicing shared by every table screen. Page numbers
//! are 1-based; a page outside `1..=page_count` yields an empty slice.

pub fn page_count(len: usize, page_size: usize) -> usize {
    if len == 0 || page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

pub fn paginate<T>(items: &[T], page_size: usize, page: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = (start + page_size).min(items.len());
    &items[start..end]
}

/// Page slice in display order: the slice is taken from the collection
/// as stored, then reversed so the most recently fetched entries come
/// first.
pub fn visible_page<T: Clone>(items: &[T], page_size: usize, page: usize) -> Vec<T> {
    let mut slice: Vec<T> = paginate(items, page_size, page).to_vec();
    slice.reverse();
    slice
}
