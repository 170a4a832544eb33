use crate::lexer::{Keyword, Position, Token, TokenKind};

const CALC_KEY: &str = "CALC-KEY";

/// On-demand scanner over DDL/DML source text.
///
/// Each call to [`Scanner::next_token`] yields exactly one token. Once the
/// input is exhausted every further call returns an `Eof` token.
pub struct Scanner {
    input: Vec<char>,
    current: usize,
    line: usize,
    column: usize,
}

impl Scanner {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            current: 0,
            line: 1,
            column: 0,
        }
    }

    /// Scans the remaining input, including the trailing `Eof` token.
    pub fn scan_all(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start_pos = self.current_position();
        let ch = match self.peek() {
            Some(ch) => ch,
            None => return Token::eof(start_pos),
        };

        if ch == '\n' {
            self.advance();
            self.line += 1;
            self.column = 0;
            return Token::new(TokenKind::Newline, start_pos, String::new());
        }

        let punct = match ch {
            '=' => Some(TokenKind::Equals),
            ',' => Some(TokenKind::Comma),
            '(' => Some(TokenKind::OpenParen),
            ')' => Some(TokenKind::CloseParen),
            _ => None,
        };
        if let Some(kind) = punct {
            self.advance();
            return Token::new(kind, start_pos, ch.to_string());
        }

        // Must run before identifier scanning claims the span.
        if self.at_calc_key() {
            let start_idx = self.current;
            for _ in 0..CALC_KEY.len() {
                self.advance();
            }
            let lexeme = self.lexeme_from(start_idx);
            return Token::new(TokenKind::Keyword(Keyword::CalcKey), start_pos, lexeme);
        }

        if ch.is_alphanumeric() {
            return self.scan_identifier_or_keyword(start_pos);
        }

        self.advance();
        Token::new(TokenKind::Invalid, start_pos, ch.to_string())
    }

    fn current_position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.current).copied()
    }

    fn peek_ahead(&self, offset: usize) -> Option<char> {
        self.input.get(self.current + offset).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.current += 1;
        self.column += 1;
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while let Some(' ' | '\t' | '\r') = self.peek() {
            self.advance();
        }
    }

    /// Upcoming text starts with `CALC-KEY`, in any case.
    fn at_calc_key(&self) -> bool {
        CALC_KEY.chars().enumerate().all(|(i, expected)| {
            self.peek_ahead(i)
                .is_some_and(|ch| ch.to_ascii_uppercase() == expected)
        })
    }

    fn scan_identifier_or_keyword(&mut self, start_pos: Position) -> Token {
        let start_idx = self.current;
        while self.peek().is_some_and(is_identifier_char) {
            self.advance();
        }

        let text = self.lexeme_from(start_idx);
        let kind = match Keyword::lookup(&text) {
            Some(keyword) => TokenKind::Keyword(keyword),
            None => TokenKind::Identifier,
        };
        Token::new(kind, start_pos, text)
    }

    fn lexeme_from(&self, start_idx: usize) -> String {
        self.input[start_idx..self.current].iter().collect()
    }
}

impl Iterator for Scanner {
    type Item = Token;

    /// Yields tokens up to, but not including, `Eof`.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (token.kind != TokenKind::Eof).then_some(token)
    }
}

fn is_identifier_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '-' || ch == '_'
}

// Convenience function for tokenizing input
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut scanner = Scanner::new(input);
    scanner.scan_all()
}
