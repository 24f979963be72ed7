use serde::Serialize;

/// One window of a result list. Pages are numbered from 1.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Page<'_, T> {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Numbers for the page buttons
    pub fn page_numbers(&self) -> std::ops::RangeInclusive<usize> {
        1..=self.total_pages
    }
}

/// Slice out page `page` of `items`.
///
/// An out-of-range page (including 0) yields an empty window; it is not clamped.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    let total_pages = if page_size == 0 {
        0
    } else {
        items.len().div_ceil(page_size)
    };

    let window = if page == 0 || page_size == 0 {
        &items[..0]
    } else {
        let start = (page - 1).saturating_mul(page_size).min(items.len());
        let end = page.saturating_mul(page_size).min(items.len());
        &items[start..end]
    };

    Page {
        items: window,
        page,
        total_pages,
        total_items: items.len(),
    }
}
