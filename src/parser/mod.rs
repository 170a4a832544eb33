pub mod ast;
pub mod driver;
pub mod errors;
pub mod find;
pub mod statements;

pub use ast::*;
pub use driver::{parse_schema, Parser};
pub use errors::*;
pub use find::{parse_find_line, FindOutcome};
