use crate::{
    executor::scan::Scanner,
    storage::table::Table,
    types::{RowIndex, error::ExecutionError, row::Row},
};

/// Scans occupied row slots in ascending row-number order, which equals
/// insertion order since rows are never deleted.
pub struct SequentialScanner<'a> {
    table: &'a Table,
    next_row: RowIndex,
}

impl<'a> SequentialScanner<'a> {
    pub fn new(table: &'a Table) -> Self {
        Self { table, next_row: 0 }
    }
}

impl Scanner for SequentialScanner<'_> {
    fn scan(&mut self) -> Result<Option<Row>, ExecutionError> {
        if self.next_row >= self.table.row_count() {
            return Ok(None);
        }
        let slot = self.table.row_slot(self.next_row)?;
        self.next_row += 1;
        Ok(Some(Row::from_bytes(slot)))
    }

    fn reset(&mut self) {
        self.next_row = 0;
    }
}
