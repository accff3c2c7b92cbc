use crate::types::{PAGE_SIZE, ROW_SIZE, ROWS_PER_PAGE, error::ExecutionError};

/*
 * Page Layout (fixed-width slots, in memory only)
 * ┌──────────────────────────────────────────────────────────┐
 * │ slot 0 (291B) │ slot 1 (291B) │ ... │ slot 13 (291B) │pad│
 * └──────────────────────────────────────────────────────────┘
 * A slot never spans a page boundary; the trailing bytes that cannot
 * hold a whole slot stay zero and are never addressed.
 */
pub struct Page {
    data: Vec<u8>,
}

impl Page {
    pub fn new() -> Self {
        Self {
            data: vec![0; PAGE_SIZE],
        }
    }

    /// Read-only view of one row slot.
    pub fn slot(&self, row_in_page: usize) -> Result<&[u8], ExecutionError> {
        let range = Self::slot_range(row_in_page)?;
        Ok(&self.data[range])
    }

    /// Mutable view of one row slot.
    pub fn slot_mut(&mut self, row_in_page: usize) -> Result<&mut [u8], ExecutionError> {
        let range = Self::slot_range(row_in_page)?;
        Ok(&mut self.data[range])
    }

    // Raw offsets never leave this type.
    fn slot_range(row_in_page: usize) -> Result<std::ops::Range<usize>, ExecutionError> {
        if row_in_page >= ROWS_PER_PAGE {
            return Err(ExecutionError::InvalidSlotIndex {
                index: row_in_page,
                max: ROWS_PER_PAGE,
            });
        }
        let start = row_in_page * ROW_SIZE;
        Ok(start..start + ROW_SIZE)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}
