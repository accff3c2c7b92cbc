pub mod insert;
pub mod scan;
pub mod sequential_scan;

use crate::{
    executor::{
        insert::{Inserter, TableInserter},
        scan::ScanIterator,
        sequential_scan::SequentialScanner,
    },
    statement::Statement,
    storage::table::Table,
    types::{error::ExecutionError, row::Row},
};

/// Outcome of a successfully executed statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionResult {
    Inserted,
    Rows(Vec<Row>),
}

/// Apply a validated statement against the table. `Insert` writes exactly
/// one row or fails without mutating anything; `Select` never mutates.
pub fn execute(
    statement: Statement,
    table: &mut Table,
) -> Result<ExecutionResult, ExecutionError> {
    match statement {
        Statement::Insert(row) => {
            TableInserter::new(table).insert(&row)?;
            Ok(ExecutionResult::Inserted)
        }
        Statement::Select => {
            let scanner = SequentialScanner::new(table);
            let rows = ScanIterator::new(scanner).collect::<Result<Vec<_>, _>>()?;
            Ok(ExecutionResult::Rows(rows))
        }
    }
}
