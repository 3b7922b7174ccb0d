//! Paginated reveal of raw trip rows.

use crate::loader::Trip;

/// Rows revealed per confirmation.
pub const PAGE_SIZE: usize = 5;

/// Walks a table five rows at a time, in source order.
///
/// The cursor starts at row 0 and advances by [`PAGE_SIZE`] on every call;
/// pages past the end are empty slices and the cursor never wraps.
#[derive(Debug, Default)]
pub struct RawViewer {
    offset: usize,
}

impl RawViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next page of rows, which may be shorter than
    /// [`PAGE_SIZE`] at the end of the table, or empty past it.
    pub fn next_page<'a>(&mut self, trips: &'a [Trip]) -> &'a [Trip] {
        let start = self.offset.min(trips.len());
        let end = (self.offset + PAGE_SIZE).min(trips.len());
        self.offset += PAGE_SIZE;
        &trips[start..end]
    }
}
