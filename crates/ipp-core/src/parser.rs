//! Program Parser
//!
//! Builds a `Program` from IPPcode23 source text, one logical line at a time.
//! Parsing is fail-fast: the first rejected line aborts the whole program.

use std::io::BufRead;

use tracing::debug;

use crate::error::{OperandDefect, ParseError, ParseResult};
use crate::grammar;
use crate::isa::{OpCode, Operand, Program};
use crate::reader::{LineReader, SourceLine};

/// IPPcode23 program parser
pub struct ProgramParser;

impl ProgramParser {
    /// Parse a complete program from a line-oriented reader
    pub fn parse<R: BufRead>(input: R) -> ParseResult<Program> {
        let mut lines = LineReader::new(input);
        lines.expect_header()?;

        let mut program = Program::new();
        for line in lines {
            let line = line?;
            let (opcode, operands) = Self::parse_instruction(&line)?;
            let instruction = program.push(opcode, operands);
            debug!(
                order = instruction.order(),
                opcode = opcode.name(),
                line = line.number,
                "instruction accepted"
            );
        }
        Ok(program)
    }

    /// Parse a program held in memory
    pub fn parse_str(source: &str) -> ParseResult<Program> {
        Self::parse(source.as_bytes())
    }

    /// Validate one logical line: opcode, then operand count, then each operand
    fn parse_instruction(line: &SourceLine) -> ParseResult<(OpCode, Vec<Operand>)> {
        let mut tokens = line.text.split_ascii_whitespace();
        let mnemonic = tokens.next().unwrap_or_default();
        let opcode = OpCode::from_name(mnemonic)
            .ok_or_else(|| ParseError::Opcode(mnemonic.to_string()))?;

        let args: Vec<&str> = tokens.collect();
        let roles = opcode.roles();
        if args.len() != roles.len() {
            return Err(ParseError::operand(
                OperandDefect::Count,
                opcode.name(),
                line.number,
            ));
        }

        roles
            .iter()
            .zip(args)
            .enumerate()
            .map(|(idx, (&role, token))| -> ParseResult<Operand> {
                let (kind, text) = grammar::classify(role, token)
                    .map_err(|defect| ParseError::operand(defect, opcode.name(), line.number))?;
                Ok(Operand {
                    position: idx + 1,
                    role,
                    kind,
                    text: text.to_string(),
                })
            })
            .collect::<ParseResult<Vec<_>>>()
            .map(|operands| (opcode, operands))
    }
}
