pub mod instruction;
pub mod opcode;

pub use instruction::{Instruction, Operand, OperandKind, Program};
pub use opcode::{OpCode, OperandRole};
