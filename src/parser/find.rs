//! Strict two-operand FIND form: `FIND <alias> RECORD IN <set> [SET]`.
//!
//! The line is first collected by the outer parser, then re-tokenized and
//! matched by a parser of its own. A mismatch never touches the outer
//! cursor, so the caller just drops the line and moves on.

use tracing::{debug, warn};

use crate::lexer::{tokenize, Keyword};
use crate::parser::driver::Parser;
use crate::parser::statements::join_line;
use crate::parser::{FindRejection, FindStatement, SkippedFind};

/// Result of reading one FIND line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindOutcome {
    Accepted(FindStatement),
    Skipped(SkippedFind),
}

impl Parser {
    pub(crate) fn parse_find(&mut self) -> FindOutcome {
        let pos = self.peek().pos;
        let full_text = join_line(&self.collect_line());

        match parse_find_line(&full_text) {
            Ok(find) => {
                debug!(alias = %find.alias, set = %find.set_name, "parsed FIND statement");
                FindOutcome::Accepted(find)
            }
            Err(reason) => {
                warn!(
                    line = pos.line,
                    column = pos.column,
                    text = %full_text,
                    "skipping FIND statement: {reason}"
                );
                FindOutcome::Skipped(SkippedFind {
                    text: full_text,
                    pos,
                    reason,
                })
            }
        }
    }
}

/// Match a single line of text against the two-operand FIND form.
pub fn parse_find_line(text: &str) -> Result<FindStatement, FindRejection> {
    let mut scope = Parser::new(tokenize(text));

    if let Some(bad) = scope.find_invalid() {
        return Err(FindRejection::InvalidCharacter(bad.lexeme.clone()));
    }

    if !scope.check_keyword(Keyword::Find) {
        return Err(FindRejection::NotFind(scope.describe_current()));
    }
    scope.advance();

    let alias = scope
        .take_identifier()
        .ok_or_else(|| FindRejection::MissingAlias(scope.describe_current()))?;

    if !scope.check_keyword(Keyword::Record) {
        return Err(FindRejection::MissingRecord(scope.describe_current()));
    }
    scope.advance();

    // IN is not reserved; it arrives as a plain identifier.
    if !scope.peek().is_word("IN") {
        return Err(FindRejection::MissingIn(scope.describe_current()));
    }
    scope.advance();

    let set_name = scope
        .take_identifier()
        .ok_or_else(|| FindRejection::MissingSetName(scope.describe_current()))?;

    if scope.check_keyword(Keyword::Set) || scope.peek().is_word("SET") {
        scope.advance();
    }

    if !scope.peek().kind.ends_line() {
        return Err(FindRejection::TrailingTokens(scope.describe_current()));
    }

    Ok(FindStatement {
        alias,
        set_name,
        full_text: text.to_string(),
    })
}
