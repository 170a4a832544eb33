use crate::lexer::{Token, TokenKind};
use crate::parser::driver::Parser;
use crate::parser::{DmlStatement, ParserError, RecordDef, SetDef};

impl Parser {
    /// Parse `RECORD <name>` and its body lines
    pub(crate) fn parse_record(&mut self) -> Result<RecordDef, ParserError> {
        self.advance(); // consume RECORD
        let name = self.expect_name("record name")?;

        let mut record = RecordDef::new(name);
        record.body_lines = self.collect_body()?;
        Ok(record)
    }

    /// Parse `SET <name>` and its body lines
    pub(crate) fn parse_set(&mut self) -> Result<SetDef, ParserError> {
        self.advance(); // consume SET
        let name = self.expect_name("set name")?;

        let mut set = SetDef::new(name);
        set.body_lines = self.collect_body()?;
        Ok(set)
    }

    /// Parse a STORE/INSERT/REMOVE/MODIFY/DELETE line verbatim
    pub(crate) fn parse_dml(&mut self) -> DmlStatement {
        let text = join_line(&self.collect_line());
        DmlStatement { text }
    }

    fn expect_name(&mut self, what: &str) -> Result<String, ParserError> {
        if self.check(TokenKind::Invalid) {
            let token = self.peek();
            return Err(ParserError::InvalidCharacter(token.lexeme.clone(), token.pos));
        }
        match self.take_identifier() {
            Some(name) => Ok(name),
            None => Err(ParserError::ExpectedToken(
                what.to_string(),
                self.describe_current(),
                self.peek().pos,
            )),
        }
    }

    /// Collect body lines until end of input or the next top-level statement.
    fn collect_body(&mut self) -> Result<Vec<String>, ParserError> {
        let mut lines = Vec::new();
        loop {
            self.skip_newlines();
            match self.peek().kind {
                TokenKind::Eof => return Ok(lines),
                TokenKind::Keyword(kw) if kw.starts_statement() => return Ok(lines),
                _ => {
                    let tokens = self.collect_line();
                    if let Some(bad) = tokens.iter().find(|t| t.kind == TokenKind::Invalid) {
                        return Err(ParserError::InvalidCharacter(bad.lexeme.clone(), bad.pos));
                    }
                    lines.push(join_line(&tokens));
                }
            }
        }
    }

    /// Consume the tokens up to the next newline, and the newline itself.
    pub(crate) fn collect_line(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        while !self.peek().kind.ends_line() {
            tokens.push(self.advance().clone());
        }
        if self.check(TokenKind::Newline) {
            self.advance();
        }
        tokens
    }
}

/// Rejoin a line's tokens with single spaces. Original spacing is not preserved.
pub(crate) fn join_line(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.lexeme.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
