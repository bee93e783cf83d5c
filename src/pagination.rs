use std::ops::Range;

/// The visible window over a list of search results
///
/// Always satisfies `start < end <= total` and `end - start <= page_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    start: usize,
    end: usize,
    total: usize,
    page_size: usize,
}

impl Pagination {
    /// The first page, or `None` when there is nothing to show
    pub fn first(total: usize, page_size: usize) -> Option<Self> {
        if total == 0 {
            return None;
        }
        let page_size = page_size.max(1);
        Some(Self {
            start: 0,
            end: page_size.min(total),
            total,
            page_size,
        })
    }

    /// The page after this one, `None` on the last page
    pub fn next(&self) -> Option<Self> {
        if !self.has_next() {
            return None;
        }
        let start = self.end;
        Some(Self {
            start,
            end: (start + self.page_size).min(self.total),
            ..*self
        })
    }

    /// The page before this one, `None` on the first page
    pub fn prev(&self) -> Option<Self> {
        if !self.has_prev() {
            return None;
        }
        let end = self.start;
        Some(Self {
            start: end.saturating_sub(self.page_size),
            end,
            ..*self
        })
    }

    pub fn has_prev(&self) -> bool {
        self.start > 0
    }

    pub fn has_next(&self) -> bool {
        self.end < self.total
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// One-based number of the current page
    pub fn page_number(&self) -> usize {
        self.start / self.page_size + 1
    }

    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.page_size)
    }

    /// The items of `items` that fall on this page
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let end = self.end.min(items.len());
        let start = self.start.min(end);
        &items[start..end]
    }
}
