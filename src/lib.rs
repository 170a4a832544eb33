//! CODASYL DBD Parser
//!
//! Tokenizer and line-oriented parser for a CODASYL-style schema and
//! data-manipulation dialect. Source text is split into record and set
//! declarations, two-operand FIND statements, and generic DML statements.

pub mod lexer;
pub mod parser;
pub mod report;

pub use lexer::*;
pub use parser::*;
pub use report::*;
