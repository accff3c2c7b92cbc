use crate::{
    storage::table::Table,
    types::{error::ExecutionError, row::Row},
};

/// Trait for writing rows into the table.
pub trait Inserter {
    fn insert(&mut self, row: &Row) -> Result<(), ExecutionError>;
}

/// Encodes each row into the slot at the next free row index.
pub struct TableInserter<'a> {
    table: &'a mut Table,
}

impl<'a> TableInserter<'a> {
    pub fn new(table: &'a mut Table) -> Self {
        Self { table }
    }
}

impl Inserter for TableInserter<'_> {
    fn insert(&mut self, row: &Row) -> Result<(), ExecutionError> {
        // Capacity is refused before any slot is touched.
        let slot = self.table.append_slot()?;
        row.serialize_into(slot);
        Ok(())
    }
}
