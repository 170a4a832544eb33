use tracing::debug;

use crate::lexer::{tokenize, Keyword, Position, Token, TokenKind};
use crate::parser::find::FindOutcome;
use crate::parser::{ParserError, Schema};

/// Line-oriented recursive-descent parser over a token sequence.
pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
}

impl Parser {
    /// Creates a parser. A trailing `Eof` token is appended when missing.
    #[must_use]
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map_or(true, |t| t.kind != TokenKind::Eof) {
            let pos = tokens.last().map_or_else(Position::start, |t| t.pos);
            tokens.push(Token::eof(pos));
        }
        Self { tokens, current: 0 }
    }

    /// Parse the whole token sequence into a [`Schema`].
    ///
    /// Statements are handled strictly in source order. A FIND line outside
    /// the two-operand form is recorded in [`Schema::skipped_finds`] and
    /// parsing continues; any other unexpected token aborts the parse.
    pub fn parse_schema(&mut self) -> Result<Schema, ParserError> {
        let mut schema = Schema::new();

        loop {
            self.skip_newlines();

            match self.peek().kind {
                TokenKind::Eof => break,
                TokenKind::Keyword(Keyword::Record) => {
                    let record = self.parse_record()?;
                    debug!(name = %record.name, lines = record.body_lines.len(), "parsed record");
                    schema.records.push(record);
                }
                TokenKind::Keyword(Keyword::Set) => {
                    let set = self.parse_set()?;
                    debug!(name = %set.name, lines = set.body_lines.len(), "parsed set");
                    schema.sets.push(set);
                }
                TokenKind::Keyword(Keyword::Find) => match self.parse_find() {
                    FindOutcome::Accepted(find) => schema.finds.push(find),
                    FindOutcome::Skipped(skipped) => schema.skipped_finds.push(skipped),
                },
                TokenKind::Keyword(kw) if kw.is_dml_verb() => {
                    let dml = self.parse_dml();
                    debug!(text = %dml.text, "parsed DML statement");
                    schema.dml.push(dml);
                }
                TokenKind::Invalid => {
                    let token = self.peek();
                    return Err(ParserError::InvalidCharacter(token.lexeme.clone(), token.pos));
                }
                _ => {
                    let token = self.peek();
                    return Err(ParserError::UnexpectedToken(describe(token), token.pos));
                }
            }
        }

        debug!(
            records = schema.records.len(),
            sets = schema.sets.len(),
            finds = schema.finds.len(),
            dml = schema.dml.len(),
            skipped = schema.skipped_finds.len(),
            "parse complete"
        );
        Ok(schema)
    }

    /// Check if we've reached the end of tokens
    pub(crate) fn is_at_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof)
    }

    /// Peek at current token without consuming it
    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    /// Advance to next token, returning the one consumed. Never moves past `Eof`.
    pub(crate) fn advance(&mut self) -> &Token {
        let consumed = self.current;
        if !self.is_at_end() {
            self.current += 1;
        }
        &self.tokens[consumed]
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    pub(crate) fn check_keyword(&self, keyword: Keyword) -> bool {
        self.peek().kind.is_keyword(keyword)
    }

    /// Consume the current token if it is an identifier and return its text.
    pub(crate) fn take_identifier(&mut self) -> Option<String> {
        if self.check(TokenKind::Identifier) {
            Some(self.advance().lexeme.clone())
        } else {
            None
        }
    }

    /// First unrecognized-character token, if any.
    pub(crate) fn find_invalid(&self) -> Option<&Token> {
        self.tokens.iter().find(|t| t.kind == TokenKind::Invalid)
    }

    /// Text of the current token for diagnostics.
    pub(crate) fn describe_current(&self) -> String {
        describe(self.peek())
    }

    /// Skip newline tokens
    pub(crate) fn skip_newlines(&mut self) {
        while self.check(TokenKind::Newline) {
            self.advance();
        }
    }
}

/// Lexeme of a token, or its kind when the lexeme is empty (EOL, EOF).
pub(crate) fn describe(token: &Token) -> String {
    if token.lexeme.is_empty() {
        token.kind.to_string()
    } else {
        token.lexeme.clone()
    }
}

/// Tokenize and parse `input` in one step.
pub fn parse_schema(input: &str) -> Result<Schema, ParserError> {
    let mut parser = Parser::new(tokenize(input));
    parser.parse_schema()
}
