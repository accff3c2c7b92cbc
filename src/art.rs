/// Banner printed when the session starts on an interactive terminal.
pub fn welcome_message(name: &str) -> String {
    format!(
        r#"==========================================
  {name}
  single-table record store
  type .help for the available commands
=========================================="#
    )
}
