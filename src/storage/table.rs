use crate::types::{
    PageIndex, ROWS_PER_PAGE, RowIndex, TABLE_MAX_PAGES, TABLE_MAX_ROWS, error::ExecutionError,
    page::Page,
};

/// The single in-process table: a bounded arena of lazily allocated pages
/// plus the count of rows inserted so far. Pages are boxed so a materialized
/// page never moves for the table's lifetime, and the table owns them
/// exclusively. There is no delete or update, so `row_count` only grows.
pub struct Table {
    pages: Vec<Option<Box<Page>>>,
    row_count: usize,
}

impl Table {
    pub fn new() -> Self {
        let mut pages = Vec::with_capacity(TABLE_MAX_PAGES);
        pages.resize_with(TABLE_MAX_PAGES, || None);
        Self {
            pages,
            row_count: 0,
        }
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn is_full(&self) -> bool {
        self.row_count >= TABLE_MAX_ROWS
    }

    /// Number of pages materialized so far.
    pub fn allocated_pages(&self) -> usize {
        self.pages.iter().filter(|page| page.is_some()).count()
    }

    /// Slot for the next free row index, advancing `row_count`. Capacity is
    /// checked before anything is touched, so a refused insert leaves the
    /// table unchanged.
    pub fn append_slot(&mut self) -> Result<&mut [u8], ExecutionError> {
        if self.is_full() {
            return Err(ExecutionError::TableFull);
        }
        let row_index = self.row_count;
        self.row_count += 1;
        self.row_slot_mut(row_index)
    }

    /// Mutable slot for a row index, materializing the covering page on
    /// first access. Once a page exists it is reused for every later access
    /// and never freed while the table is live.
    pub fn row_slot_mut(&mut self, row_index: RowIndex) -> Result<&mut [u8], ExecutionError> {
        let page_index = row_index / ROWS_PER_PAGE;
        if page_index >= TABLE_MAX_PAGES {
            return Err(ExecutionError::TableFull);
        }
        let page = self.pages[page_index].get_or_insert_with(|| Box::new(Page::new()));
        page.slot_mut(row_index % ROWS_PER_PAGE)
    }

    /// Read-only slot for an occupied row index.
    pub fn row_slot(&self, row_index: RowIndex) -> Result<&[u8], ExecutionError> {
        if row_index >= self.row_count {
            return Err(ExecutionError::RowOutOfBounds {
                row_index,
                row_count: self.row_count,
            });
        }
        let page_index: PageIndex = row_index / ROWS_PER_PAGE;
        let page = self.pages[page_index]
            .as_ref()
            .ok_or(ExecutionError::UnallocatedPage { page_index })?;
        page.slot(row_index % ROWS_PER_PAGE)
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}
