use std::fmt;
use crate::lexer::Position;
use crate::parser::FindRejection;

/// A RECORD declaration with its clause lines, kept as reconstructed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDef {
    pub name: String,
    pub body_lines: Vec<String>,
}

impl RecordDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body_lines: Vec::new(),
        }
    }
}

/// A SET declaration. OWNER/ORDER/MEMBER clauses stay opaque text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetDef {
    pub name: String,
    pub body_lines: Vec<String>,
}

impl SetDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body_lines: Vec::new(),
        }
    }
}

/// `FIND <alias> RECORD IN <set_name> [SET]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindStatement {
    pub alias: String,
    pub set_name: String,
    pub full_text: String,
}

/// STORE, INSERT, REMOVE, MODIFY or DELETE line, uninterpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DmlStatement {
    pub text: String,
}

/// A FIND line that did not match the two-operand form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFind {
    pub text: String,
    pub pos: Position,
    pub reason: FindRejection,
}

/// Parse result, each collection in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    pub records: Vec<RecordDef>,
    pub sets: Vec<SetDef>,
    pub finds: Vec<FindStatement>,
    pub dml: Vec<DmlStatement>,
    pub skipped_finds: Vec<SkippedFind>,
}

impl Schema {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of accepted statements across all four collections.
    pub fn statement_count(&self) -> usize {
        self.records.len() + self.sets.len() + self.finds.len() + self.dml.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statement_count() == 0
    }
}

impl fmt::Display for RecordDef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "RECORD {}", self.name)?;
        for line in &self.body_lines {
            write!(f, "\n    {line}")?;
        }
        Ok(())
    }
}

impl fmt::Display for SetDef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "SET {}", self.name)?;
        for line in &self.body_lines {
            write!(f, "\n    {line}")?;
        }
        Ok(())
    }
}

impl fmt::Display for FindStatement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.full_text)
    }
}

impl fmt::Display for DmlStatement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl fmt::Display for SkippedFind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {} ({})", self.pos, self.text, self.reason)
    }
}
