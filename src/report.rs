//! Plain-text dumps of tokens and parsed schemas.

use std::io::{self, Write};

use crate::lexer::Token;
use crate::parser::Schema;

/// One line per token: `SOURCE:line:col KIND lexeme`. EOL and EOF have no lexeme.
pub fn write_tokens<W: Write>(out: &mut W, source: &str, tokens: &[Token]) -> io::Result<()> {
    for token in tokens {
        write!(out, "{}:{}:{} {}", source, token.pos.line, token.pos.column, token.kind)?;
        if token.lexeme.is_empty() {
            writeln!(out)?;
        } else {
            writeln!(out, " {}", token.lexeme)?;
        }
    }
    writeln!(out, "\nTotal tokens: {}", tokens.len())
}

/// Section-by-section listing of records, sets, FIND and DML statements.
pub fn write_report<W: Write>(out: &mut W, schema: &Schema) -> io::Result<()> {
    writeln!(out, "=== RECORDS ===")?;
    for (i, record) in schema.records.iter().enumerate() {
        writeln!(out, "Record #{}: Name={:?}", i + 1, record.name)?;
        for line in &record.body_lines {
            writeln!(out, "   -> {line}")?;
        }
    }

    writeln!(out, "\n=== SETS ===")?;
    for (i, set) in schema.sets.iter().enumerate() {
        writeln!(out, "Set #{}: Name={:?}", i + 1, set.name)?;
        for line in &set.body_lines {
            writeln!(out, "   -> {line}")?;
        }
    }

    writeln!(out, "\n=== FIND Statements (2-variable only) ===")?;
    for (i, find) in schema.finds.iter().enumerate() {
        writeln!(out, "Find #{}:", i + 1)?;
        writeln!(out, "   FullText: {:?}", find.full_text)?;
        writeln!(out, "   Alias:    {:?}", find.alias)?;
        writeln!(out, "   SetName:  {:?}", find.set_name)?;
    }

    writeln!(out, "\n=== DML Statements ===")?;
    for (i, dml) in schema.dml.iter().enumerate() {
        writeln!(out, "DML #{}: {:?}", i + 1, dml.text)?;
    }

    if !schema.skipped_finds.is_empty() {
        writeln!(out, "\n=== Skipped FIND Statements ===")?;
        for skipped in &schema.skipped_finds {
            writeln!(out, "{skipped}")?;
        }
    }

    Ok(())
}
