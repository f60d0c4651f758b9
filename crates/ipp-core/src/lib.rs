//! IPPcode23 Parser - Core Library
//!
//! Public API surface for validating IPPcode23 source and building its XML form.

pub mod error;
pub mod config;
pub mod isa;
pub mod grammar;
pub mod reader;
pub mod parser;
pub mod xml;

// Re-export commonly used types
pub use error::{OperandDefect, ParseError, ParseResult};
pub use config::ParserConfig;
pub use isa::{Instruction, OpCode, Operand, OperandKind, OperandRole, Program};
pub use parser::ProgramParser;
pub use reader::Source;

/// Read the whole program from `source`, validate it and render the document.
///
/// The source is released before rendering starts; nothing is produced unless
/// every line was accepted.
pub fn translate(source: &Source, config: &ParserConfig) -> ParseResult<String> {
    let program = source.with_reader(|input| ProgramParser::parse(input))?;
    Ok(xml::render(&program, config))
}
