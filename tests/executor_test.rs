use lumbung::{
    executor::{
        ExecutionResult, execute,
        insert::{Inserter, TableInserter},
        scan::{ScanIterator, Scanner},
        sequential_scan::SequentialScanner,
    },
    statement::Statement,
    storage::table::Table,
    types::{TABLE_MAX_ROWS, error::ExecutionError, row::Row},
};

fn insert_row(table: &mut Table, id: i32) -> Result<ExecutionResult, ExecutionError> {
    let row = Row::new(id, format!("user{id}"), format!("person{id}@example.com"));
    execute(Statement::Insert(row), table)
}

#[test]
fn test_insert_then_select() {
    let mut table = Table::new();

    assert_eq!(insert_row(&mut table, 1).unwrap(), ExecutionResult::Inserted);

    let result = execute(Statement::Select, &mut table).unwrap();
    assert_eq!(
        result,
        ExecutionResult::Rows(vec![Row::new(1, "user1", "person1@example.com")])
    );
}

#[test]
fn test_select_on_empty_table() {
    let mut table = Table::new();
    let result = execute(Statement::Select, &mut table).unwrap();
    assert_eq!(result, ExecutionResult::Rows(Vec::new()));
}

#[test]
fn test_select_preserves_insertion_order() {
    let mut table = Table::new();
    let ids = [5, 3, 9, 1, 7];

    for &id in &ids {
        insert_row(&mut table, id).unwrap();
    }

    match execute(Statement::Select, &mut table).unwrap() {
        ExecutionResult::Rows(rows) => {
            let seen: Vec<i32> = rows.iter().map(|row| row.id).collect();
            assert_eq!(seen, ids);
        }
        other => panic!("Expected Rows, got {other:?}"),
    }
}

#[test]
fn test_select_does_not_mutate_the_table() {
    let mut table = Table::new();
    insert_row(&mut table, 1).unwrap();

    execute(Statement::Select, &mut table).unwrap();
    execute(Statement::Select, &mut table).unwrap();

    assert_eq!(table.row_count(), 1);
}

#[test]
fn test_insert_fails_when_table_is_full() {
    let mut table = Table::new();
    for i in 0..TABLE_MAX_ROWS {
        insert_row(&mut table, i as i32).unwrap();
    }

    match insert_row(&mut table, TABLE_MAX_ROWS as i32) {
        Err(ExecutionError::TableFull) => {}
        other => panic!("Expected TableFull, got {other:?}"),
    }
    assert_eq!(table.row_count(), TABLE_MAX_ROWS);

    // Select still serves everything inserted before capacity was hit.
    match execute(Statement::Select, &mut table).unwrap() {
        ExecutionResult::Rows(rows) => assert_eq!(rows.len(), TABLE_MAX_ROWS),
        other => panic!("Expected Rows, got {other:?}"),
    }
}

#[test]
fn test_inserter_writes_one_row() {
    let mut table = Table::new();
    let row = Row::new(1, "user1", "person1@example.com");

    TableInserter::new(&mut table).insert(&row).unwrap();

    assert_eq!(table.row_count(), 1);
    assert_eq!(Row::from_bytes(table.row_slot(0).unwrap()), row);
}

#[test]
fn test_scanner_reset() {
    let mut table = Table::new();
    insert_row(&mut table, 1).unwrap();
    insert_row(&mut table, 2).unwrap();

    let mut scanner = SequentialScanner::new(&table);
    assert_eq!(scanner.scan().unwrap().unwrap().id, 1);
    assert_eq!(scanner.scan().unwrap().unwrap().id, 2);
    assert!(scanner.scan().unwrap().is_none());

    scanner.reset();
    assert_eq!(scanner.scan().unwrap().unwrap().id, 1);
}

#[test]
fn test_scan_iterator_yields_all_rows() {
    let mut table = Table::new();
    for id in 0..20 {
        insert_row(&mut table, id).unwrap();
    }

    let rows: Vec<Row> = ScanIterator::new(SequentialScanner::new(&table))
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(rows.len(), 20);
}
