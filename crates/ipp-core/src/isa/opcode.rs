//! IPPcode23 Opcode Table
//!
//! Defines the fixed opcode catalog and the operand roles each opcode requires.
//! This file contains no validation logic; it is constant lookup data.

/// Grammar role of an operand position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandRole {
    Label,
    Var,
    Type,
    Symbol,
}

use OperandRole::{Label, Symbol, Type, Var};

const NONE: &[OperandRole] = &[];
const VAR: &[OperandRole] = &[Var];
const LABEL: &[OperandRole] = &[Label];
const SYMB: &[OperandRole] = &[Symbol];
const VAR_SYMB: &[OperandRole] = &[Var, Symbol];
const VAR_TYPE: &[OperandRole] = &[Var, Type];
const VAR_SYMB_SYMB: &[OperandRole] = &[Var, Symbol, Symbol];
const LABEL_SYMB_SYMB: &[OperandRole] = &[Label, Symbol, Symbol];

/// IPPcode23 opcodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpCode {
    // Frames and function calls
    Move,
    CreateFrame,
    PushFrame,
    PopFrame,
    DefVar,
    Call,
    Return,

    // Data stack
    PushS,
    PopS,

    // Arithmetic, relational, boolean and conversion
    Add,
    Sub,
    Mul,
    IDiv,
    Lt,
    Gt,
    Eq,
    And,
    Or,
    Not,
    Int2Char,
    Stri2Int,

    // Input/output
    Read,
    Write,

    // Strings
    Concat,
    StrLen,
    GetChar,
    SetChar,

    // Types
    Type,

    // Control flow
    Label,
    Jump,
    JumpIfEq,
    JumpIfNeq,
    Exit,

    // Debugging
    DPrint,
    Break,
}

impl OpCode {
    /// Every opcode in catalog order
    pub const ALL: [OpCode; 35] = [
        OpCode::Move,
        OpCode::CreateFrame,
        OpCode::PushFrame,
        OpCode::PopFrame,
        OpCode::DefVar,
        OpCode::Call,
        OpCode::Return,
        OpCode::PushS,
        OpCode::PopS,
        OpCode::Add,
        OpCode::Sub,
        OpCode::Mul,
        OpCode::IDiv,
        OpCode::Lt,
        OpCode::Gt,
        OpCode::Eq,
        OpCode::And,
        OpCode::Or,
        OpCode::Not,
        OpCode::Int2Char,
        OpCode::Stri2Int,
        OpCode::Read,
        OpCode::Write,
        OpCode::Concat,
        OpCode::StrLen,
        OpCode::GetChar,
        OpCode::SetChar,
        OpCode::Type,
        OpCode::Label,
        OpCode::Jump,
        OpCode::JumpIfEq,
        OpCode::JumpIfNeq,
        OpCode::Exit,
        OpCode::DPrint,
        OpCode::Break,
    ];

    /// Look up an opcode by its mnemonic, ignoring ASCII case
    pub fn from_name(name: &str) -> Option<Self> {
        OpCode::ALL
            .iter()
            .copied()
            .find(|op| op.name().eq_ignore_ascii_case(name))
    }

    /// Canonical (uppercase) mnemonic
    pub fn name(self) -> &'static str {
        match self {
            OpCode::Move => "MOVE",
            OpCode::CreateFrame => "CREATEFRAME",
            OpCode::PushFrame => "PUSHFRAME",
            OpCode::PopFrame => "POPFRAME",
            OpCode::DefVar => "DEFVAR",
            OpCode::Call => "CALL",
            OpCode::Return => "RETURN",

            OpCode::PushS => "PUSHS",
            OpCode::PopS => "POPS",

            OpCode::Add => "ADD",
            OpCode::Sub => "SUB",
            OpCode::Mul => "MUL",
            OpCode::IDiv => "IDIV",
            OpCode::Lt => "LT",
            OpCode::Gt => "GT",
            OpCode::Eq => "EQ",
            OpCode::And => "AND",
            OpCode::Or => "OR",
            OpCode::Not => "NOT",
            OpCode::Int2Char => "INT2CHAR",
            OpCode::Stri2Int => "STRI2INT",

            OpCode::Read => "READ",
            OpCode::Write => "WRITE",

            OpCode::Concat => "CONCAT",
            OpCode::StrLen => "STRLEN",
            OpCode::GetChar => "GETCHAR",
            OpCode::SetChar => "SETCHAR",

            OpCode::Type => "TYPE",

            OpCode::Label => "LABEL",
            OpCode::Jump => "JUMP",
            OpCode::JumpIfEq => "JUMPIFEQ",
            OpCode::JumpIfNeq => "JUMPIFNEQ",
            OpCode::Exit => "EXIT",

            OpCode::DPrint => "DPRINT",
            OpCode::Break => "BREAK",
        }
    }

    /// Operand roles in position order
    pub fn roles(self) -> &'static [OperandRole] {
        match self {
            OpCode::CreateFrame
            | OpCode::PushFrame
            | OpCode::PopFrame
            | OpCode::Return
            | OpCode::Break => NONE,

            OpCode::DefVar | OpCode::PopS => VAR,
            OpCode::Call | OpCode::Label | OpCode::Jump => LABEL,
            OpCode::PushS | OpCode::Write | OpCode::Exit | OpCode::DPrint => SYMB,

            OpCode::Move
            | OpCode::Not
            | OpCode::Int2Char
            | OpCode::StrLen
            | OpCode::Type => VAR_SYMB,
            OpCode::Read => VAR_TYPE,

            OpCode::Add
            | OpCode::Sub
            | OpCode::Mul
            | OpCode::IDiv
            | OpCode::Lt
            | OpCode::Gt
            | OpCode::Eq
            | OpCode::And
            | OpCode::Or
            | OpCode::Stri2Int
            | OpCode::Concat
            | OpCode::GetChar
            | OpCode::SetChar => VAR_SYMB_SYMB,
            OpCode::JumpIfEq | OpCode::JumpIfNeq => LABEL_SYMB_SYMB,
        }
    }

    /// Required operand count
    pub fn arity(self) -> usize {
        self.roles().len()
    }
}
