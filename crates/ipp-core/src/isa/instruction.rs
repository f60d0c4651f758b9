//! Program Representation
//!
//! In-memory form of a validated IPPcode23 program.
//! Values here are built once by the parser and never mutated; rendering lives in `xml`.

use super::opcode::{OpCode, OperandRole};

/// Kind reported in an operand's `type` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandKind {
    Var,
    Label,
    Type,
    Int,
    String,
    Bool,
    Nil,
}

impl OperandKind {
    pub fn as_str(self) -> &'static str {
        match self {
            OperandKind::Var => "var",
            OperandKind::Label => "label",
            OperandKind::Type => "type",
            OperandKind::Int => "int",
            OperandKind::String => "string",
            OperandKind::Bool => "bool",
            OperandKind::Nil => "nil",
        }
    }
}

/// A classified operand
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operand {
    pub position: usize,
    pub role: OperandRole,
    pub kind: OperandKind,
    pub text: String,
}

/// A validated instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    order: usize,
    opcode: OpCode,
    operands: Vec<Operand>,
}

impl Instruction {
    pub(crate) fn new(order: usize, opcode: OpCode, operands: Vec<Operand>) -> Self {
        Instruction {
            order,
            opcode,
            operands,
        }
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn opcode(&self) -> OpCode {
        self.opcode
    }

    pub fn operands(&self) -> &[Operand] {
        &self.operands
    }
}

/// A fully parsed program in source order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append an instruction, assigning the next order number
    pub(crate) fn push(&mut self, opcode: OpCode, operands: Vec<Operand>) -> &Instruction {
        let order = self.instructions.len() + 1;
        self.instructions
            .push(Instruction::new(order, opcode, operands));
        &self.instructions[order - 1]
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}
