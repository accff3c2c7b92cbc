use std::io::{self, Write};

use crate::{
    executor::{ExecutionResult, execute},
    statement::{MetaCommand, parser::StatementParser},
    storage::table::Table,
};

pub const PROMPT: &str = "db > ";

const HELP_TEXT: &str = r#"Available commands:
  .help   - Show this help message
  .clear  - Clear the screen
  .exit   - Exit the database

Statements:
  insert <id> <username> <email>
  select
"#;

/// What the command loop should do after a processed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplAction {
    Continue,
    Exit,
}

/// Process one input line against the table, writing every produced message
/// to `out`. Parse and execution errors are formatted and printed here; the
/// core components only ever return them as values.
pub fn process_line<W: Write>(
    table: &mut Table,
    line: &str,
    out: &mut W,
) -> io::Result<ReplAction> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(ReplAction::Continue);
    }

    let parser = StatementParser::new();

    if trimmed.starts_with('.') {
        match parser.parse_meta(trimmed) {
            Ok(MetaCommand::Exit) => return Ok(ReplAction::Exit),
            Ok(MetaCommand::Help) => write!(out, "{HELP_TEXT}")?,
            Ok(MetaCommand::Clear) => write!(out, "\x1B[2J\x1B[1;1H")?,
            Err(e) => writeln!(out, "{e}")?,
        }
        return Ok(ReplAction::Continue);
    }

    match parser.parse(trimmed) {
        Ok(statement) => match execute(statement, table) {
            Ok(ExecutionResult::Inserted) => writeln!(out, "Executed.")?,
            Ok(ExecutionResult::Rows(rows)) => {
                for row in &rows {
                    writeln!(out, "{row}")?;
                }
                writeln!(out, "Executed.")?;
            }
            Err(e) => writeln!(out, "{e}")?,
        },
        Err(e) => writeln!(out, "{e}")?,
    }

    Ok(ReplAction::Continue)
}
