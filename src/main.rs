use std::{
    io::{self, BufRead, IsTerminal, Write},
    path::{Path, PathBuf},
};

use clap::Parser;
use lumbung::{
    art::welcome_message,
    repl::{PROMPT, ReplAction, process_line},
    storage::table::Table,
};
use rustyline::{DefaultEditor, Result, error::ReadlineError};

#[derive(Parser)]
#[command(name = "lumbung", about = "A single-table record store with a line-oriented REPL")]
struct Cli {
    /// Readline history file, loaded on start and saved on exit
    #[arg(long)]
    history: Option<PathBuf>,
}

fn run_interactive(table: &mut Table, history: Option<&Path>) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    if let Some(path) = history {
        // A missing history file on first start is not an error.
        let _ = rl.load_history(path);
    }

    println!("{}", welcome_message("LUMBUNG DB"));

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    rl.add_history_entry(line.trim())?;
                }
                let mut stdout = io::stdout().lock();
                let action = process_line(table, &line, &mut stdout)?;
                stdout.flush()?;
                if action == ReplAction::Exit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err),
        }
    }

    if let Some(path) = history {
        rl.save_history(path)?;
    }
    Ok(())
}

/// Plain line loop for piped input. The prompt is written before every read
/// so transcripts come out the same as an interactive session.
fn run_piped(table: &mut Table) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout().lock();

    loop {
        write!(stdout, "{PROMPT}")?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if process_line(table, &line, &mut stdout)? == ReplAction::Exit {
            break;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut table = Table::new();

    if io::stdin().is_terminal() {
        run_interactive(&mut table, cli.history.as_deref())
    } else {
        run_piped(&mut table)?;
        Ok(())
    }
}
