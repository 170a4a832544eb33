use codasyl_dbd::lexer::{tokenize, Keyword, Position, Scanner, TokenKind};
use codasyl_dbd::parser::parse_schema;

fn kinds(input: &str) -> Vec<TokenKind> {
    tokenize(input).into_iter().map(|t| t.kind).collect()
}

#[test]
fn test_keywords_are_case_insensitive() {
    for word in ["RECORD", "record", "Record", "rEcOrD"] {
        let tokens = tokenize(word);
        assert_eq!(tokens.len(), 2, "expected one token plus EOF for {word}");
        assert_eq!(tokens[0].kind, TokenKind::Keyword(Keyword::Record));
        assert_eq!(tokens[0].lexeme, word);
    }
}

#[test]
fn test_every_table_entry_lexes_as_its_keyword() {
    let table = [
        Keyword::Record,
        Keyword::Set,
        Keyword::Owner,
        Keyword::Order,
        Keyword::Sorted,
        Keyword::By,
        Keyword::Key,
        Keyword::Descending,
        Keyword::Member,
        Keyword::Insertion,
        Keyword::Automatic,
        Keyword::Retention,
        Keyword::Mandatory,
        Keyword::Location,
        Keyword::Mode,
        Keyword::Is,
        Keyword::Calc,
        Keyword::Using,
        Keyword::Duplicates,
        Keyword::Are,
        Keyword::Not,
        Keyword::Allowed,
        Keyword::System,
        Keyword::Occurs,
        Keyword::Times,
        Keyword::Type,
        Keyword::Decimal,
        Keyword::Fixed,
        Keyword::Character,
        Keyword::Find,
        Keyword::Duplicate,
        Keyword::Get,
        Keyword::Next,
        Keyword::First,
        Keyword::Prior,
        Keyword::Last,
        Keyword::Of,
        Keyword::Store,
        Keyword::Insert,
        Keyword::Remove,
        Keyword::Modify,
        Keyword::Delete,
        Keyword::All,
        Keyword::CalcKey,
    ];

    for keyword in table {
        let lower = keyword.as_str().to_lowercase();
        let tokens = tokenize(&lower);
        assert_eq!(tokens[0].kind, TokenKind::Keyword(keyword), "lexing {lower}");
        assert_eq!(tokens[0].lexeme, lower);
        assert_eq!(Keyword::lookup(&lower), Some(keyword));
    }
}

#[test]
fn test_identifiers_keep_their_spelling() {
    let tokens = tokenize("student-id Course_Code 42x");
    let idents: Vec<_> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Identifier)
        .map(|t| t.lexeme.as_str())
        .collect();
    assert_eq!(idents, vec!["student-id", "Course_Code", "42x"]);
}

#[test]
fn test_in_is_not_reserved() {
    let tokens = tokenize("IN");
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert!(tokens[0].is_word("in"));
    assert_eq!(Keyword::lookup("IN"), None);
}

#[test]
fn test_calc_key_is_one_token() {
    for text in ["CALC-KEY", "calc-key", "Calc-Key"] {
        let tokens = tokenize(text);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::Keyword(Keyword::CalcKey));
        assert_eq!(tokens[0].lexeme, text);
    }

    assert_eq!(
        kinds("USING CALC-KEY,"),
        vec![
            TokenKind::Keyword(Keyword::Using),
            TokenKind::Keyword(Keyword::CalcKey),
            TokenKind::Comma,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_calc_and_key_apart_are_two_tokens() {
    assert_eq!(
        kinds("CALC KEY"),
        vec![
            TokenKind::Keyword(Keyword::Calc),
            TokenKind::Keyword(Keyword::Key),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_calc_key_prefix_splits_longer_word() {
    let tokens = tokenize("CALC-KEYS");
    let summary: Vec<_> = tokens.iter().map(|t| (t.kind, t.lexeme.as_str())).collect();
    assert_eq!(
        summary,
        vec![
            (TokenKind::Keyword(Keyword::CalcKey), "CALC-KEY"),
            (TokenKind::Identifier, "S"),
            (TokenKind::Eof, ""),
        ]
    );
    assert_eq!(tokens[1].pos, Position::new(1, 8));
}

#[test]
fn test_keyword_case_folding_is_ascii_only() {
    // U+FB01 LATIN SMALL LIGATURE FI uppercases to "FI" under full Unicode rules
    let tokens = tokenize("\u{fb01}nd");
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].lexeme, "\u{fb01}nd");
    assert_eq!(Keyword::lookup("\u{fb01}nd"), None);
}

#[test]
fn test_punctuation_and_positions() {
    let tokens = tokenize("X(5) = a,b");
    let summary: Vec<_> = tokens
        .iter()
        .map(|t| (t.kind, t.lexeme.as_str(), t.pos.column))
        .collect();
    assert_eq!(
        summary,
        vec![
            (TokenKind::Identifier, "X", 0),
            (TokenKind::OpenParen, "(", 1),
            (TokenKind::Identifier, "5", 2),
            (TokenKind::CloseParen, ")", 3),
            (TokenKind::Equals, "=", 5),
            (TokenKind::Identifier, "a", 7),
            (TokenKind::Comma, ",", 8),
            (TokenKind::Identifier, "b", 9),
            (TokenKind::Eof, "", 10),
        ]
    );
}

#[test]
fn test_newline_is_a_token_and_resets_column() {
    let tokens = tokenize("RECORD A\r\n\t  name");
    assert_eq!(tokens[2].kind, TokenKind::Newline);
    assert_eq!(tokens[2].pos, Position::new(1, 9));
    assert_eq!(tokens[3].lexeme, "name");
    assert_eq!(tokens[3].pos, Position::new(2, 3));
}

#[test]
fn test_invalid_character_gets_its_own_kind() {
    let tokens = tokenize("A . B");
    assert_eq!(tokens[1].kind, TokenKind::Invalid);
    assert_eq!(tokens[1].lexeme, ".");
    assert_eq!(tokens[1].pos, Position::new(1, 2));
    // scanning continues past it
    assert_eq!(tokens[2].lexeme, "B");
    assert_eq!(tokens[3].kind, TokenKind::Eof);

    assert_eq!(
        kinds("-x"),
        vec![TokenKind::Invalid, TokenKind::Identifier, TokenKind::Eof]
    );
}

#[test]
fn test_eof_is_repeated_once_exhausted() {
    let mut scanner = Scanner::new("STORE");
    assert_eq!(scanner.next_token().kind, TokenKind::Keyword(Keyword::Store));
    for _ in 0..3 {
        let token = scanner.next_token();
        assert_eq!(token.kind, TokenKind::Eof);
        assert_eq!(token.pos, Position::new(1, 5));
    }
}

#[test]
fn test_scanner_iterator_stops_before_eof() {
    let lexemes: Vec<_> = Scanner::new("SET CN\n").map(|t| t.lexeme).collect();
    assert_eq!(lexemes, vec!["SET".to_string(), "CN".to_string(), String::new()]);
}

#[test]
fn test_reconstructed_body_line_relexes_to_same_kinds() {
    let original = "  name   TYPE IS  CHARACTER(30) ,x=calc-key";
    let schema = parse_schema(&format!("RECORD R\n{original}\n")).unwrap();
    let rebuilt = &schema.records[0].body_lines[0];
    assert_eq!(rebuilt, "name TYPE IS CHARACTER ( 30 ) , x = calc-key");
    assert_eq!(kinds(rebuilt), kinds(original));
}
