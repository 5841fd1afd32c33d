//! Opcode abstractions, functionality and constants.
use std::convert::TryFrom;

use crate::{
    definitions::memory,
    ProcessError,
};

/// the base mask used for generating all the other sub masks
pub(crate) const OPCODE_MASK_FFFF: u16 = u16::MAX;

/// the mask for the first twelve bits
pub(crate) const OPCODE_MASK_FFF0: u16 = OPCODE_MASK_FFFF << 4;

/// the mask for the first eight bits
pub(crate) const OPCODE_MASK_FF00: u16 = OPCODE_MASK_FFFF << 8;

/// the mask for the first four bits
pub(crate) const OPCODE_MASK_F000: u16 = OPCODE_MASK_FFFF << 12;

/// the mask for the last four bits
pub(crate) const OPCODE_MASK_000F: u16 = OPCODE_MASK_FFFF ^ OPCODE_MASK_FFF0;

/// the mask for the last eight bits
pub(crate) const OPCODE_MASK_00FF: u16 = OPCODE_MASK_FFFF ^ OPCODE_MASK_FF00;

/// the mask for the last twelve bits
pub(crate) const OPCODE_MASK_0FFF: u16 = OPCODE_MASK_FFFF ^ OPCODE_MASK_F000;

/// the size of a single byte
const BYTE_SIZE: u16 = 0x8;

/// a wrapper type for u16 to make it clear what is meant to be used
pub type Opcode = u16;

/// will build an opcode from data and the given point
/// # Arguments
///
/// - `data` - The full memory block used to generate the opcodes
/// - `pointer` - Where in the data the opcode shall be extracted, so `pointer` and `pointer + 1` make
/// the opcode up. Both addresses wrap around the end of the memory.
///
/// # Example
/// ```rust
/// # use chip::opcode::*;
/// let mut memory = [0u8; 0x1000];
/// memory[0x200..0x204].copy_from_slice(&[0x00, 0xEE, 0x1E, 0xDA]);
/// assert_eq!(build_opcode(&memory, 0x200), 0x00EE);
/// assert_eq!(build_opcode(&memory, 0x202), 0x1EDA);
/// # memory[0xFFF] = 0x12;
/// # memory[0x000] = 0x34;
/// # assert_eq!(build_opcode(&memory, 0xFFF), 0x1234);
/// ```
pub fn build_opcode(data: &[u8], pointer: usize) -> Opcode {
    debug_assert_eq!(data.len(), memory::SIZE);
    let high = data[pointer & memory::ADDRESS_MASK];
    let low = data[(pointer + 1) & memory::ADDRESS_MASK];
    Opcode::from_be_bytes([high, low])
}

/// These are special traits used to filter out information
/// from opcodes
pub trait OpcodeTrait {
    /// this is an opcode extractor that will return the
    /// opcode number form any opcode
    /// - `T` is the opcode type
    fn t(&self) -> usize;

    /// this is an opcode extractor for the opcode type `TNNN`
    /// - `T` is the opcode type
    /// - `NNN` is an address
    fn nnn(&self) -> u16;

    /// this is an opcode extractor for the opcode type `TXNN`
    /// - `T` is the opcode type
    /// - `X` is a register index
    /// - `NN` is a constant
    fn xnn(&self) -> (usize, u8);

    /// this is an opcode extractor for the opcode type `TXYN`
    /// - `T` is the opcode type
    /// - `X` is a register index
    /// - `Y` is a register index
    /// - `N` is a opcode subtype or a constant
    fn xyn(&self) -> (usize, usize, usize);

    /// this is an opcode extractor for the opcode type `TXYT`
    /// - `T` is the opcode type
    /// - `X` is a register index
    /// - `Y` is a register index
    fn xy(&self) -> (usize, usize);

    /// this is an opcode extractor for the opcode type `TXTT`
    /// - `T` is the opcode type
    /// - `X` is a register index
    fn x(&self) -> usize;
}

impl OpcodeTrait for Opcode {
    /// # Example
    /// ```rust
    /// # use chip::opcode::*;
    /// const BASE_OPCODE: Opcode = 0x1EDA;
    /// assert_eq!(BASE_OPCODE.t(), 0x1);
    /// ```
    fn t(&self) -> usize {
        const SHIFT: u16 = 3 * BYTE_SIZE / 2;
        ((self & OPCODE_MASK_F000) >> SHIFT) as usize
    }

    /// # Example
    /// ```rust
    /// # use chip::opcode::*;
    ///  const BASE_OPCODE: Opcode = 0x1EDA;
    ///  assert_eq!(BASE_OPCODE.nnn(), 0xEDA)
    /// ```
    fn nnn(&self) -> u16 {
        self & OPCODE_MASK_0FFF
    }

    /// # Example
    /// ```rust
    /// # use chip::opcode::*;
    /// const BASE_OPCODE: Opcode = 0x1EDA;
    /// assert_eq!(BASE_OPCODE.xnn(), (0xE, 0xDA));
    /// ```
    fn xnn(&self) -> (usize, u8) {
        let x = self.x();
        let nn = (self & OPCODE_MASK_00FF) as u8;
        (x, nn)
    }

    /// ```rust
    /// # use chip::opcode::*;
    ///  const BASE_OPCODE: Opcode = 0x1EDA;
    ///  assert_eq!(BASE_OPCODE.xyn(), (0xE, 0xD, 0xA));
    /// ```
    fn xyn(&self) -> (usize, usize, usize) {
        let (x, y) = self.xy();
        let n = (self & OPCODE_MASK_000F) as usize;
        (x, y, n)
    }

    /// ```rust
    /// # use chip::opcode::*;
    ///  const BASE_OPCODE: Opcode = 0x1EDA;
    ///  assert_eq!(BASE_OPCODE.xy(), (0xE, 0xD));
    /// ```
    fn xy(&self) -> (usize, usize) {
        let x = self.x();
        const MASK: u16 = OPCODE_MASK_00FF ^ OPCODE_MASK_000F;
        const NIBBLE: u16 = BYTE_SIZE / 2;
        let y = ((self & MASK) >> NIBBLE) as usize;
        (x, y)
    }

    /// # Example
    /// ```rust
    /// # use chip::opcode::*;
    ///  const BASE_OPCODE: Opcode = 0x1EDA;
    ///  assert_eq!(BASE_OPCODE.x(), 0xE);
    /// ```
    fn x(&self) -> usize {
        ((self & OPCODE_MASK_0FFF & OPCODE_MASK_FF00) >> BYTE_SIZE) as usize
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
/// Represents the program steps that the chip
/// can take.
pub enum ProgramCounterStep {
    /// Will not change the program counter
    None,
    /// Will move the program counter to the next instruction
    Next,
    /// Will skip the next instruction
    Skip,
    /// Will simply move the program counter to the given location.
    Jump(u16),
}

impl ProgramCounterStep {
    /// Will return a Skip if the condition is true.
    ///
    /// # Example
    /// ```rust
    /// # use chip::opcode::ProgramCounterStep;
    /// assert_eq!(ProgramCounterStep::Next, ProgramCounterStep::cond(false));
    /// assert_eq!(ProgramCounterStep::Skip, ProgramCounterStep::cond(true));
    /// ```
    #[inline]
    pub fn cond(cond: bool) -> Self {
        if cond {
            ProgramCounterStep::Skip
        } else {
            ProgramCounterStep::Next
        }
    }

    /// Calculates the program counter following `pc` after taking this step, wrapped into
    /// the memory.
    ///
    /// # Example
    /// ```rust
    /// # use chip::opcode::ProgramCounterStep;
    /// assert_eq!(ProgramCounterStep::Next.apply(0x200), 0x202);
    /// assert_eq!(ProgramCounterStep::Skip.apply(0x200), 0x204);
    /// assert_eq!(ProgramCounterStep::Jump(0x300).apply(0x200), 0x300);
    /// assert_eq!(ProgramCounterStep::None.apply(0x200), 0x200);
    /// ```
    #[inline]
    pub fn apply(&self, pc: u16) -> u16 {
        const SIZE: u16 = memory::opcodes::SIZE as u16;
        let next = match *self {
            ProgramCounterStep::None => pc,
            ProgramCounterStep::Next => pc.wrapping_add(SIZE),
            ProgramCounterStep::Skip => pc.wrapping_add(2 * SIZE),
            ProgramCounterStep::Jump(pointer) => pointer,
        };
        next & memory::ADDRESS_MASK as u16
    }
}

/// implTryFromEnum is a macro responsible for creating the boilerplate code
/// needed for the sub opcode convertions.
macro_rules! implTryFromEnum {
    ($type_name:ty : $type_from:ty : $( $key:literal => $val:expr ),+ $(,)? ) => {
        impl TryFrom<$type_from> for $type_name {
            type Error = ();

            fn try_from(value: $type_from) -> Result<Self, Self::Error> {
                match value {
                    $(
                        $key => Ok($val),
                    )+
                    _ => Err(()),
                }
            }
        }
    };
}

/// The `0NNN` family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum System {
    /// Clears the display
    Clear,
    /// Returns from the subroutine
    Return,
    /// Calls the machine code routine at `NNN`, treated as a regular subroutine call
    MachineCall { nnn: u16 },
}

impl From<Opcode> for System {
    fn from(value: Opcode) -> Self {
        match value {
            // 00E0
            // clear display
            0x00E0 => System::Clear,
            // 00EE
            // Return from sub routine => pop from stack
            0x00EE => System::Return,
            _ => System::MachineCall { nnn: value.nnn() },
        }
    }
}

/// The `8XYT` family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arithmetic {
    Assign,
    Or,
    And,
    Xor,
    Add,
    Sub,
    ShiftRight,
    SubReverse,
    ShiftLeft,
}

implTryFromEnum!(Arithmetic : usize :
    // 8XY0
    // Sets VX to the value of VY.
    0x0 => Arithmetic::Assign,
    // 8XY1
    // Sets VX to VX or VY. (Bitwise OR operation)
    0x1 => Arithmetic::Or,
    // 8XY2
    // Sets VX to VX and VY. (Bitwise AND operation)
    0x2 => Arithmetic::And,
    // 8XY3
    // Sets VX to VX xor VY.
    0x3 => Arithmetic::Xor,
    // 8XY4
    // Adds VY to VX. VF is set to 1 when there's a carry, and to 0 when there isn't.
    0x4 => Arithmetic::Add,
    // 8XY5
    // VY is subtracted from VX. VF is set to 0 when there's a borrow, and 1 when there
    // isn't.
    0x5 => Arithmetic::Sub,
    // 8XY6
    // Stores the least significant bit of VX in VF and then shifts VX to the right
    // by 1.
    0x6 => Arithmetic::ShiftRight,
    // 8XY7
    // Sets VX to VY minus VX. VF is set to 0 when there's a borrow, and 1 when there
    // isn't.
    0x7 => Arithmetic::SubReverse,
    // 8XYE
    // Stores the most significant bit of VX in VF and then shifts VX to the left by 1.
    0xE => Arithmetic::ShiftLeft,
);

/// The `EXTT` family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCondition {
    Pressed,
    NotPressed,
}

implTryFromEnum!(KeyCondition : u8 :
    // EX9E
    // Skips the next instruction if the key stored in VX is pressed.
    0x9E => KeyCondition::Pressed,
    // EXA1
    // Skips the next instruction if the key stored in VX isn't pressed.
    0xA1 => KeyCondition::NotPressed,
);

/// The `FXTT` family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Misc {
    GetDelayTimer,
    WaitForKey,
    SetDelayTimer,
    SetSoundTimer,
    AddIndex,
    FontSprite,
    BinaryCodedDecimal,
    StoreRegisters,
    LoadRegisters,
}

implTryFromEnum!(Misc : u8 :
    0x07 => Misc::GetDelayTimer,
    0x0A => Misc::WaitForKey,
    0x15 => Misc::SetDelayTimer,
    0x18 => Misc::SetSoundTimer,
    0x1E => Misc::AddIndex,
    0x29 => Misc::FontSprite,
    0x33 => Misc::BinaryCodedDecimal,
    0x55 => Misc::StoreRegisters,
    0x65 => Misc::LoadRegisters,
);

/// A decoded instruction, with the fields already extracted from the opcode.
///
/// Decoding never fails, opcodes without a defined meaning end up as
/// [`Instruction::Unknown`](Instruction::Unknown) and are rejected during execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    System(System),
    Jump { nnn: u16 },
    Call { nnn: u16 },
    SkipEqual { x: usize, nn: u8 },
    SkipNotEqual { x: usize, nn: u8 },
    SkipRegistersEqual { x: usize, y: usize },
    Load { x: usize, nn: u8 },
    Add { x: usize, nn: u8 },
    Arithmetic { ops: Arithmetic, x: usize, y: usize },
    SkipRegistersNotEqual { x: usize, y: usize },
    SetIndex { nnn: u16 },
    JumpOffset { nnn: u16 },
    Random { x: usize, nn: u8 },
    Draw { x: usize, y: usize, n: usize },
    Key { ops: KeyCondition, x: usize },
    Misc { ops: Misc, x: usize },
    Unknown(Opcode),
}

impl From<Opcode> for Instruction {
    fn from(value: Opcode) -> Self {
        let (x, y, n) = value.xyn();
        let (_, nn) = value.xnn();
        let nnn = value.nnn();

        match value.t() {
            0x0 => Instruction::System(System::from(value)),
            0x1 => Instruction::Jump { nnn },
            0x2 => Instruction::Call { nnn },
            0x3 => Instruction::SkipEqual { x, nn },
            0x4 => Instruction::SkipNotEqual { x, nn },
            0x5 => Instruction::SkipRegistersEqual { x, y },
            0x6 => Instruction::Load { x, nn },
            0x7 => Instruction::Add { x, nn },
            0x8 => match Arithmetic::try_from(n) {
                Ok(ops) => Instruction::Arithmetic { ops, x, y },
                Err(_) => Instruction::Unknown(value),
            },
            0x9 => Instruction::SkipRegistersNotEqual { x, y },
            0xA => Instruction::SetIndex { nnn },
            0xB => Instruction::JumpOffset { nnn },
            0xC => Instruction::Random { x, nn },
            0xD => Instruction::Draw { x, y, n },
            0xE => match KeyCondition::try_from(nn) {
                Ok(ops) => Instruction::Key { ops, x },
                Err(_) => Instruction::Unknown(value),
            },
            0xF => match Misc::try_from(nn) {
                Ok(ops) => Instruction::Misc { ops, x },
                Err(_) => Instruction::Unknown(value),
            },
            _ => Instruction::Unknown(value),
        }
    }
}

/// Represents a step of the program counter
/// this requires the enum ProgramCounterStep
/// to work.
pub trait ProgramCounter {
    /// will move the program counter forward by a step.
    fn step(&mut self, step: ProgramCounterStep);

    /// the address of the instruction currently being executed.
    fn program_counter(&self) -> u16;
}

#[derive(Debug, PartialEq, Clone, Copy)]
/// Represents a command from the interpreter up to the driver.
pub enum Operation {
    /// If no action has to be taken.
    None,
    /// The interpreter is waiting for a key press, the same
    /// instruction will be executed again on the next cycle.
    Wait,
    /// The display changed and should be redrawn.
    Draw,
}

/// These are the traits that have to be full filled for a working opcode
/// table.
///
/// This trait requires the implementation of the [`ProgramCounter`](ProgramCounter) trait, as
/// the step functionality is needed to move on after an instruction.
///
/// Every handler computes its step relative to the address the instruction was fetched from, so
/// no state is changed when a handler fails.
pub trait ChipOpcodes: ProgramCounter {
    /// will calculate the programs step by a single step
    fn calc(&mut self, instruction: &Instruction) -> Result<Operation, ProcessError> {
        let mut operation = Operation::None;
        let step_op = |(step, op)| {
            operation = op;
            step
        };

        let step = match *instruction {
            Instruction::System(op) => self.system(op).map(step_op)?,
            Instruction::Jump { nnn } => self.jump(nnn),
            Instruction::Call { nnn } => self.call(nnn)?,
            Instruction::SkipEqual { x, nn } => self.skip_equal(x, nn),
            Instruction::SkipNotEqual { x, nn } => self.skip_not_equal(x, nn),
            Instruction::SkipRegistersEqual { x, y } => self.skip_registers_equal(x, y),
            Instruction::Load { x, nn } => self.load(x, nn),
            Instruction::Add { x, nn } => self.add(x, nn),
            Instruction::Arithmetic { ops, x, y } => self.arithmetic(ops, x, y),
            Instruction::SkipRegistersNotEqual { x, y } => self.skip_registers_not_equal(x, y),
            Instruction::SetIndex { nnn } => self.set_index(nnn),
            Instruction::JumpOffset { nnn } => self.jump_offset(nnn),
            Instruction::Random { x, nn } => self.random(x, nn),
            Instruction::Draw { x, y, n } => self.draw(x, y, n).map(step_op)?,
            Instruction::Key { ops, x } => self.key(ops, x),
            Instruction::Misc { ops, x } => self.misc(ops, x).map(step_op)?,
            Instruction::Unknown(opcode) => {
                return Err(ProcessError::InvalidOpcode {
                    opcode,
                    pc: self.program_counter(),
                })
            }
        };

        self.step(step);
        Ok(operation)
    }

    /// A multiuse opcode base for type `0NNN`
    ///
    /// - `0NNN` - Call     -                       - Calls machine code routine at address `NNN`, handled like `2NNN`.
    /// - `00E0` - Display  - `disp_clear()`        - Clears the screen.
    /// - `00EE` - Flow     - `return;`             - Returns from a subroutine.
    fn system(&mut self, op: System) -> Result<(ProgramCounterStep, Operation), ProcessError>;

    /// - `1NNN` - Flow     - `goto NNN;`           - Jumps to address `NNN`.
    fn jump(&self, nnn: u16) -> ProgramCounterStep;

    /// - `2NNN` - Flow     - `*(0xNNN)()`          - Calls subroutine at `NNN`.
    fn call(&mut self, nnn: u16) -> Result<ProgramCounterStep, ProcessError>;

    /// - `3XNN` - Cond     - `if(Vx==NN)`          - Skips the next instruction if `VX` equals `NN`.
    fn skip_equal(&self, x: usize, nn: u8) -> ProgramCounterStep;

    /// - `4XNN` - Cond     - `if(Vx!=NN)`          - Skips the next instruction if `VX` doesn't equal `NN`.
    fn skip_not_equal(&self, x: usize, nn: u8) -> ProgramCounterStep;

    /// - `5XY0` - Cond     - `if(Vx==Vy)`          - Skips the next instruction if `VX` equals `VY`. The low nibble is ignored.
    fn skip_registers_equal(&self, x: usize, y: usize) -> ProgramCounterStep;

    /// - `6XNN` - Const    - `Vx = NN`             - Sets `VX` to `NN`.
    fn load(&mut self, x: usize, nn: u8) -> ProgramCounterStep;

    /// - `7XNN` - Const    - `Vx += NN`            - Adds `NN` to `VX`. (Carry flag is not changed)
    fn add(&mut self, x: usize, nn: u8) -> ProgramCounterStep;

    /// A mutiuse opcode base for type `8XYT` (T is a sub opcode)
    ///
    /// - `8XY0` - Assign   - `Vx=Vy`               - Sets `VX` to the value of `VY`.
    /// - `8XY1` - BitOp    - `Vx=Vx|Vy`            - Sets `VX` to `VX` or `VY`.
    /// - `8XY2` - BitOp    - `Vx=Vx&Vy`            - Sets `VX` to `VX` and `VY`.
    /// - `8XY3` - BitOp    - `Vx=Vx^Vy`            - Sets `VX` to `VX` xor `VY`.
    /// - `8XY4` - Math     - `Vx += Vy`            - Adds `VY` to `VX`. `VF` is set to `1` when there's a carry, and to `0` when there isn't.
    /// - `8XY5` - Math     - `Vx -= Vy`            - `VY` is subtracted from `VX`. `VF` is set to `0` when there's a borrow, and `1` when there isn't.
    /// - `8XY6` - BitOp    - `Vx>>=1`              - Stores the least significant bit of `VX` in `VF` and then shifts `VX` to the right by `1`.
    /// - `8XY7` - Math     - `Vx=Vy-Vx`            - Sets `VX` to `VY` minus `VX`. `VF` is set to `0` when there's a borrow, and `1` when there isn't.
    /// - `8XYE` - BitOp    - `Vx<<=1`              - Stores the most significant bit of `VX` in `VF` and then shifts `VX` to the left by `1`.
    fn arithmetic(&mut self, ops: Arithmetic, x: usize, y: usize) -> ProgramCounterStep;

    /// - `9XY0` - Cond     - `if(Vx!=Vy)`          - Skips the next instruction if `VX` doesn't equal `VY`. The low nibble is ignored.
    fn skip_registers_not_equal(&self, x: usize, y: usize) -> ProgramCounterStep;

    /// - `ANNN` - MEM      - `I = NNN`             - Sets `I` to the address `NNN`.
    fn set_index(&mut self, nnn: u16) -> ProgramCounterStep;

    /// - `BNNN` - Flow     - `PC=V0+NNN`           - Jumps to the address `NNN` plus `V0`.
    fn jump_offset(&self, nnn: u16) -> ProgramCounterStep;

    /// - `CXNN` - Rand     - `Vx=rand()&NN`        - Sets `VX` to a random byte and `NN`.
    fn random(&mut self, x: usize, nn: u8) -> ProgramCounterStep;

    /// - `DXYN` - Disp     - `draw(Vx,Vy,N)`       - Draws a sprite at coordinate `(VX, VY)` that has a width of `8` pixels and a height of `N` pixels. Each row of `8` pixels is read as bit-coded starting from memory location `I`; `I` value doesn’t change after the execution of this instruction. `VF` is set to `1` if any screen pixels are flipped from set to unset when the sprite is drawn, and to `0` if that doesn’t happen.
    fn draw(
        &mut self,
        x: usize,
        y: usize,
        n: usize,
    ) -> Result<(ProgramCounterStep, Operation), ProcessError>;

    /// A multiuse opcode base for type `EXTT` (T is a sub opcode)
    ///
    /// - `EX9E` - KeyOp    - `if(key()==Vx)`       - Skips the next instruction if the key stored in `VX` is pressed.
    /// - `EXA1` - KeyOp    - `if(key()!=Vx)`       - Skips the next instruction if the key stored in `VX` isn't pressed.
    fn key(&self, ops: KeyCondition, x: usize) -> ProgramCounterStep;

    /// A multiuse opcode base for type `FXTT` (T is a sub opcode)
    ///
    /// - `FX07` - Timer    - `Vx = get_delay()`    - Sets `VX` to the value of the delay timer.
    /// - `FX0A` - KeyOp    - `Vx = get_key()`      - A key press is awaited, and then stored in `VX`. The instruction is repeated until a key is down.
    /// - `FX15` - Timer    - `delay_timer(Vx)`     - Sets the delay timer to `VX`.
    /// - `FX18` - Sound    - `sound_timer(Vx)`     - Sets the sound timer to `VX`.
    /// - `FX1E` - MEM      - `I +=Vx`              - Adds `VX` to `I`. `VF` is not affected.
    /// - `FX29` - MEM      - `I=sprite_addr[Vx]`   - Sets `I` to the location of the sprite for the character in `VX`.
    /// - `FX33` - BCD      - `246 / 100 => 2` `246 / 10 => 24 % 10 => 4` `246 % 10 => 6` - Stores the binary-coded decimal representation of `VX` at `I`, `I+1` and `I+2`.
    /// - `FX55` - MEM      - `reg_dump(Vx,&I)`     - Stores `V0` to `VX` (including `VX`) in memory starting at address `I`. `I` itself is left unmodified.
    /// - `FX65` - MEM      - `reg_load(Vx,&I)`     - Fills `V0` to `VX` (including `VX`) with values from memory starting at address `I`. `I` itself is left unmodified.
    fn misc(&mut self, ops: Misc, x: usize) -> Result<(ProgramCounterStep, Operation), ProcessError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_simple() {
        assert_eq!(Instruction::from(0x00E0), Instruction::System(System::Clear));
        assert_eq!(Instruction::from(0x00EE), Instruction::System(System::Return));
    }

    #[test]
    fn test_decode_unknown() {
        let value: Opcode = 0x8009;
        assert_eq!(Instruction::from(value), Instruction::Unknown(value));
    }

    #[test]
    fn test_decode_multiple() {
        let tests = [
            // Zero
            (0x00E0, Instruction::System(System::Clear)),
            (0x00EE, Instruction::System(System::Return)),
            (0x0123, Instruction::System(System::MachineCall { nnn: 0x123 })),
            (0x1919, Instruction::Jump { nnn: 0x919 }),
            (0x2222, Instruction::Call { nnn: 0x222 }),
            (0x3123, Instruction::SkipEqual { x: 0x1, nn: 0x23 }),
            (0x4123, Instruction::SkipNotEqual { x: 0x1, nn: 0x23 }),
            (0x5120, Instruction::SkipRegistersEqual { x: 0x1, y: 0x2 }),
            (0x5121, Instruction::SkipRegistersEqual { x: 0x1, y: 0x2 }),
            (0x6123, Instruction::Load { x: 0x1, nn: 0x23 }),
            (0x7123, Instruction::Add { x: 0x1, nn: 0x23 }),
            (
                0x8120,
                Instruction::Arithmetic {
                    ops: Arithmetic::Assign,
                    x: 0x1,
                    y: 0x2,
                },
            ),
            (
                0x8125,
                Instruction::Arithmetic {
                    ops: Arithmetic::Sub,
                    x: 0x1,
                    y: 0x2,
                },
            ),
            (
                0x812E,
                Instruction::Arithmetic {
                    ops: Arithmetic::ShiftLeft,
                    x: 0x1,
                    y: 0x2,
                },
            ),
            (0x8128, Instruction::Unknown(0x8128)),
            (0x9120, Instruction::SkipRegistersNotEqual { x: 0x1, y: 0x2 }),
            (0x912F, Instruction::SkipRegistersNotEqual { x: 0x1, y: 0x2 }),
            (0xA123, Instruction::SetIndex { nnn: 0x123 }),
            (0xB123, Instruction::JumpOffset { nnn: 0x123 }),
            (0xC1F0, Instruction::Random { x: 0x1, nn: 0xF0 }),
            (0xD125, Instruction::Draw { x: 0x1, y: 0x2, n: 0x5 }),
            (
                0xE19E,
                Instruction::Key {
                    ops: KeyCondition::Pressed,
                    x: 0x1,
                },
            ),
            (
                0xE1A1,
                Instruction::Key {
                    ops: KeyCondition::NotPressed,
                    x: 0x1,
                },
            ),
            (0xE1A2, Instruction::Unknown(0xE1A2)),
            (
                0xF10A,
                Instruction::Misc {
                    ops: Misc::WaitForKey,
                    x: 0x1,
                },
            ),
            (
                0xF165,
                Instruction::Misc {
                    ops: Misc::LoadRegisters,
                    x: 0x1,
                },
            ),
            (0xF1FF, Instruction::Unknown(0xF1FF)),
        ];

        for (opcode, expected) in tests.iter() {
            assert_eq!(Instruction::from(*opcode), *expected, "{:#06X}", opcode);
        }
    }

    #[test]
    fn test_step_wraps_into_memory() {
        assert_eq!(ProgramCounterStep::Next.apply(0xFFE), 0x000);
        assert_eq!(ProgramCounterStep::Skip.apply(0xFFE), 0x002);
    }
}
