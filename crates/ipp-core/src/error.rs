//! Parser Error Types
//!
//! Defines every failure the IPPcode23 parser can report.
//! Each error kind maps to exactly one process exit code; none are recoverable.

use std::fmt;
use std::io;

use thiserror::Error;

/// Which part of an instruction's operand list was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandDefect {
    Count,
    Label,
    Variable,
    Type,
    Symbol,
}

impl fmt::Display for OperandDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperandDefect::Count => write!(f, "number of instruction parameters"),
            OperandDefect::Label => write!(f, "label"),
            OperandDefect::Variable => write!(f, "variable"),
            OperandDefect::Type => write!(f, "type"),
            OperandDefect::Symbol => write!(f, "symbol"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ParseError {
    // Invocation
    #[error("{0}")]
    Options(String),

    // IO boundary
    #[error("{0}")]
    Input(String),
    #[error("cannot write output: {0}")]
    Output(String),

    // Source errors
    #[error("Invalid header")]
    Header,
    #[error("Invalid instruction: {0}")]
    Opcode(String),
    #[error("Invalid {defect} in {opcode} on line {line}")]
    OperandGrammar {
        defect: OperandDefect,
        opcode: String,
        line: usize,
    },
}

impl ParseError {
    /// Process exit code reported for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ParseError::Options(_) => 10,
            ParseError::Input(_) => 11,
            ParseError::Output(_) => 12,
            ParseError::Header => 21,
            ParseError::Opcode(_) => 22,
            ParseError::OperandGrammar { .. } => 23,
        }
    }

    pub(crate) fn operand(defect: OperandDefect, opcode: &str, line: usize) -> Self {
        ParseError::OperandGrammar {
            defect,
            opcode: opcode.to_string(),
            line,
        }
    }
}

impl From<io::Error> for ParseError {
    fn from(err: io::Error) -> Self {
        ParseError::Input(err.to_string())
    }
}

pub type ParseResult<T> = Result<T, ParseError>;
