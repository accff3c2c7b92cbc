#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Failed to parse query. Too many fields were provided.")]
    TooManyFields,
    #[error("Failed to parse query. Not enough fields were provided.")]
    MissingFields,
    #[error("Failed to parse query. The fields exceeded maximum length.")]
    FieldTooLong,
    #[error("Failed to parse query. It contains a negative id.")]
    NegativeId,
    #[error("Failed to parse query. The id must be an integer.")]
    InvalidId,
    #[error("Unrecognized statement: '{0}'.")]
    UnrecognizedStatement(String),
    #[error("Unrecognized meta-command: '{0}'.")]
    UnrecognizedMetaCommand(String),
}
