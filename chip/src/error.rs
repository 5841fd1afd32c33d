use thiserror::Error;

use crate::opcode::Opcode;

/// The fatal conditions raised while executing instructions, all of them carry the program
/// counter the failing instruction was fetched from.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum ProcessError {
    #[error("An unsupported opcode {opcode:#06X} was used at {pc:#06X}.")]
    InvalidOpcode { opcode: Opcode, pc: u16 },
    /// Returning with no subroutine active, or calling with all
    /// [`cpu::stack::SIZE`](crate::definitions::cpu::stack::SIZE) levels in use.
    #[error("Invalid stack state '{source}' at {pc:#06X}.")]
    Stack {
        #[source]
        source: StackError,
        pc: u16,
    },
}

impl ProcessError {
    /// The program counter at which the failing instruction was fetched.
    pub fn pc(&self) -> u16 {
        match *self {
            ProcessError::InvalidOpcode { pc, .. } | ProcessError::Stack { pc, .. } => pc,
        }
    }
}

#[derive(Error, Debug, PartialEq, Clone, Copy)]
pub enum StackError {
    #[error("Stack is full!")]
    Full,
    #[error("Stack is empty!")]
    Empty,
}

/// Raised once while loading a rom.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum RomError {
    #[error("Invalid rom, there is no data to load.")]
    Empty,
    #[error("Invalid rom, {len} bytes do not fit into the {max} bytes available.")]
    TooLarge { len: usize, max: usize },
    #[error("Unable to read rom '{path}': {message}")]
    Unreadable { path: String, message: String },
}
