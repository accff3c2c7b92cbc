use thiserror::Error;

use crate::types::PageIndex;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    #[error("Cannot insert new data. Table is full.")]
    TableFull,

    #[error("Invalid slot index {index} (max: {max})")]
    InvalidSlotIndex { index: usize, max: usize },

    #[error("Row index {row_index} is out of bounds (row count: {row_count})")]
    RowOutOfBounds { row_index: usize, row_count: usize },

    #[error("Page {page_index} has never been allocated")]
    UnallocatedPage { page_index: PageIndex },
}

pub type Result<T> = std::result::Result<T, ExecutionError>;
