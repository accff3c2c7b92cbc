use crate::{
    statement::{MetaCommand, Statement, error::ParseError},
    types::{EMAIL_SIZE, USERNAME_SIZE, row::Row},
};

/// Tokenizes one input line and turns it into a typed statement, rejecting
/// anything that violates arity, sign, or field-length constraints before
/// the table is ever consulted.
pub struct StatementParser;

impl StatementParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, line: &str) -> Result<Statement, ParseError> {
        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("insert") => self.parse_insert(tokens),
            // `select` takes no arguments; trailing tokens are not inspected.
            Some("select") => Ok(Statement::Select),
            _ => Err(ParseError::UnrecognizedStatement(line.trim().to_string())),
        }
    }

    /// Classify a dot-prefixed line. Execution of `Exit` (and the screen
    /// handling for `Help` and `Clear`) belongs to the command loop.
    pub fn parse_meta(&self, line: &str) -> Result<MetaCommand, ParseError> {
        match line.trim() {
            ".exit" => Ok(MetaCommand::Exit),
            ".help" => Ok(MetaCommand::Help),
            ".clear" => Ok(MetaCommand::Clear),
            other => Err(ParseError::UnrecognizedMetaCommand(other.to_string())),
        }
    }

    fn parse_insert<'a>(
        &self,
        tokens: impl Iterator<Item = &'a str>,
    ) -> Result<Statement, ParseError> {
        let fields: Vec<&str> = tokens.collect();

        // Field count is checked first and short-circuits everything else;
        // sign and length validation only run once the arity is exactly three.
        if fields.len() > 3 {
            return Err(ParseError::TooManyFields);
        }
        if fields.len() < 3 {
            return Err(ParseError::MissingFields);
        }

        let (id_field, username, email) = (fields[0], fields[1], fields[2]);

        let id: i32 = id_field.parse().map_err(|_| ParseError::InvalidId)?;
        if id < 0 {
            return Err(ParseError::NegativeId);
        }

        // Byte lengths, not character counts.
        if username.len() > USERNAME_SIZE || email.len() > EMAIL_SIZE {
            return Err(ParseError::FieldTooLong);
        }

        Ok(Statement::Insert(Row::new(id, username, email)))
    }
}

impl Default for StatementParser {
    fn default() -> Self {
        Self::new()
    }
}
