use std::fmt;

/// Position in source text. Lines are 1-based, columns are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    pub fn start() -> Self {
        Self { line: 1, column: 0 }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "line {} col {}", self.line, self.column)
    }
}

/// Reserved words of the DDL/DML dialect.
///
/// `IN` is deliberately absent: FIND statements match it by text against a
/// plain identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    // DDL
    Record,
    Set,
    Owner,
    Order,
    Sorted,
    By,
    Key,
    Descending,
    Member,
    Insertion,
    Automatic,
    Retention,
    Mandatory,
    Location,
    Mode,
    Is,
    Calc,
    Using,
    Duplicates,
    Are,
    Not,
    Allowed,
    System,
    Occurs,
    Times,
    Type,
    Decimal,
    Fixed,
    Character,

    // DML
    Find,
    Duplicate,
    Get,
    Next,
    First,
    Prior,
    Last,
    Of,
    Store,
    Insert,
    Remove,
    Modify,
    Delete,
    All,
    CalcKey,
}

impl Keyword {
    /// Looks up an already uppercased word in the keyword table.
    pub fn from_str(s: &str) -> Option<Self> {
        let kw = match s {
            "RECORD" => Keyword::Record,
            "SET" => Keyword::Set,
            "OWNER" => Keyword::Owner,
            "ORDER" => Keyword::Order,
            "SORTED" => Keyword::Sorted,
            "BY" => Keyword::By,
            "KEY" => Keyword::Key,
            "DESCENDING" => Keyword::Descending,
            "MEMBER" => Keyword::Member,
            "INSERTION" => Keyword::Insertion,
            "AUTOMATIC" => Keyword::Automatic,
            "RETENTION" => Keyword::Retention,
            "MANDATORY" => Keyword::Mandatory,
            "LOCATION" => Keyword::Location,
            "MODE" => Keyword::Mode,
            "IS" => Keyword::Is,
            "CALC" => Keyword::Calc,
            "USING" => Keyword::Using,
            "DUPLICATES" => Keyword::Duplicates,
            "ARE" => Keyword::Are,
            "NOT" => Keyword::Not,
            "ALLOWED" => Keyword::Allowed,
            "SYSTEM" => Keyword::System,
            "OCCURS" => Keyword::Occurs,
            "TIMES" => Keyword::Times,
            "TYPE" => Keyword::Type,
            "DECIMAL" => Keyword::Decimal,
            "FIXED" => Keyword::Fixed,
            "CHARACTER" => Keyword::Character,
            "FIND" => Keyword::Find,
            "DUPLICATE" => Keyword::Duplicate,
            "GET" => Keyword::Get,
            "NEXT" => Keyword::Next,
            "FIRST" => Keyword::First,
            "PRIOR" => Keyword::Prior,
            "LAST" => Keyword::Last,
            "OF" => Keyword::Of,
            "STORE" => Keyword::Store,
            "INSERT" => Keyword::Insert,
            "REMOVE" => Keyword::Remove,
            "MODIFY" => Keyword::Modify,
            "DELETE" => Keyword::Delete,
            "ALL" => Keyword::All,
            "CALC-KEY" => Keyword::CalcKey,
            _ => return None,
        };
        Some(kw)
    }

    /// Case-insensitive lookup. Only ASCII letters are folded.
    pub fn lookup(word: &str) -> Option<Self> {
        Self::from_str(&word.to_ascii_uppercase())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Record => "RECORD",
            Keyword::Set => "SET",
            Keyword::Owner => "OWNER",
            Keyword::Order => "ORDER",
            Keyword::Sorted => "SORTED",
            Keyword::By => "BY",
            Keyword::Key => "KEY",
            Keyword::Descending => "DESCENDING",
            Keyword::Member => "MEMBER",
            Keyword::Insertion => "INSERTION",
            Keyword::Automatic => "AUTOMATIC",
            Keyword::Retention => "RETENTION",
            Keyword::Mandatory => "MANDATORY",
            Keyword::Location => "LOCATION",
            Keyword::Mode => "MODE",
            Keyword::Is => "IS",
            Keyword::Calc => "CALC",
            Keyword::Using => "USING",
            Keyword::Duplicates => "DUPLICATES",
            Keyword::Are => "ARE",
            Keyword::Not => "NOT",
            Keyword::Allowed => "ALLOWED",
            Keyword::System => "SYSTEM",
            Keyword::Occurs => "OCCURS",
            Keyword::Times => "TIMES",
            Keyword::Type => "TYPE",
            Keyword::Decimal => "DECIMAL",
            Keyword::Fixed => "FIXED",
            Keyword::Character => "CHARACTER",
            Keyword::Find => "FIND",
            Keyword::Duplicate => "DUPLICATE",
            Keyword::Get => "GET",
            Keyword::Next => "NEXT",
            Keyword::First => "FIRST",
            Keyword::Prior => "PRIOR",
            Keyword::Last => "LAST",
            Keyword::Of => "OF",
            Keyword::Store => "STORE",
            Keyword::Insert => "INSERT",
            Keyword::Remove => "REMOVE",
            Keyword::Modify => "MODIFY",
            Keyword::Delete => "DELETE",
            Keyword::All => "ALL",
            Keyword::CalcKey => "CALC-KEY",
        }
    }

    /// Keywords that open a top-level statement and end a record/set body.
    pub fn starts_statement(&self) -> bool {
        matches!(
            self,
            Keyword::Record
                | Keyword::Set
                | Keyword::Find
                | Keyword::Store
                | Keyword::Insert
                | Keyword::Remove
                | Keyword::Modify
                | Keyword::Delete
        )
    }

    /// STORE, INSERT, REMOVE, MODIFY and DELETE.
    pub fn is_dml_verb(&self) -> bool {
        matches!(
            self,
            Keyword::Store | Keyword::Insert | Keyword::Remove | Keyword::Modify | Keyword::Delete
        )
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Token kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Punctuation
    Equals,     // =
    Comma,      // ,
    OpenParen,  // (
    CloseParen, // )

    Identifier,
    Keyword(Keyword),

    // Special tokens
    Newline,
    /// A character the scanner cannot classify. The lexeme holds the character.
    Invalid,
    Eof,
}

impl TokenKind {
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == keyword)
    }

    /// End of a logical line: newline or end of input.
    pub fn ends_line(&self) -> bool {
        matches!(self, TokenKind::Newline | TokenKind::Eof)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TokenKind::Equals => write!(f, "="),
            TokenKind::Comma => write!(f, ","),
            TokenKind::OpenParen => write!(f, "("),
            TokenKind::CloseParen => write!(f, ")"),
            TokenKind::Identifier => write!(f, "IDENT"),
            TokenKind::Keyword(kw) => write!(f, "{kw}"),
            TokenKind::Newline => write!(f, "EOL"),
            TokenKind::Invalid => write!(f, "INVALID"),
            TokenKind::Eof => write!(f, "EOF"),
        }
    }
}

/// A token with position information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub pos: Position,
    pub lexeme: String,
}

impl Token {
    pub fn new(kind: TokenKind, pos: Position, lexeme: String) -> Self {
        Self { kind, pos, lexeme }
    }

    pub fn eof(pos: Position) -> Self {
        Self::new(TokenKind::Eof, pos, String::new())
    }

    /// Identifier whose text equals `word`, ignoring case.
    pub fn is_word(&self, word: &str) -> bool {
        self.kind == TokenKind::Identifier && self.lexeme.eq_ignore_ascii_case(word)
    }
}
