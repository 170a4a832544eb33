use thiserror::Error;
use crate::lexer::Position;

/// Fatal parser errors. Any of these aborts the whole parse.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParserError {
    #[error("Unexpected token '{0}' at {1}")]
    UnexpectedToken(String, Position),

    #[error("Expected {0} but found '{1}' at {2}")]
    ExpectedToken(String, String, Position),

    #[error("Invalid character '{0}' at {1}")]
    InvalidCharacter(String, Position),
}

impl ParserError {
    pub fn position(&self) -> Position {
        match self {
            ParserError::UnexpectedToken(_, pos)
            | ParserError::ExpectedToken(_, _, pos)
            | ParserError::InvalidCharacter(_, pos) => *pos,
        }
    }

    /// Source text of the offending token.
    pub fn literal(&self) -> &str {
        match self {
            ParserError::UnexpectedToken(lit, _)
            | ParserError::ExpectedToken(_, lit, _)
            | ParserError::InvalidCharacter(lit, _) => lit,
        }
    }
}

/// Why a FIND line falls outside `FIND <alias> RECORD IN <set> [SET]`.
///
/// Rejections are soft: the statement is skipped and parsing continues.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FindRejection {
    #[error("not a FIND statement, starts with '{0}'")]
    NotFind(String),

    #[error("expected alias after FIND, got '{0}'")]
    MissingAlias(String),

    #[error("expected RECORD after alias, got '{0}'")]
    MissingRecord(String),

    #[error("expected 'IN' after RECORD, got '{0}'")]
    MissingIn(String),

    #[error("expected set name, got '{0}'")]
    MissingSetName(String),

    #[error("invalid character '{0}' in FIND statement")]
    InvalidCharacter(String),

    #[error("found extra tokens after set name: '{0}'")]
    TrailingTokens(String),
}
