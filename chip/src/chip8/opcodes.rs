use crate::{
    definitions::{cpu, display, memory},
    opcode::{
        Arithmetic, ChipOpcodes, KeyCondition, Misc, Operation, ProgramCounterStep, System,
    },
    ProcessError,
};

use super::ChipSet;

impl ChipSet {
    /// Calculates the memory address `I + offset`, wrapped into the memory
    #[inline]
    fn index_address(&self, offset: usize) -> usize {
        (self.index_register as usize + offset) & memory::ADDRESS_MASK
    }

    /// The address of the instruction following the current one
    #[inline]
    fn next_instruction(&self) -> u16 {
        ProgramCounterStep::Next.apply(self.program_counter)
    }
}

impl ChipOpcodes for ChipSet {
    fn system(&mut self, op: System) -> Result<(ProgramCounterStep, Operation), ProcessError> {
        match op {
            System::Clear => {
                self.display.clear();
                self.draw_flag = true;
                Ok((ProgramCounterStep::Next, Operation::Draw))
            }
            System::Return => {
                let pc = self.pop_stack().map_err(|err| self.stack_error(err))?;
                log::debug!("return to {:#06X}", pc);
                Ok((ProgramCounterStep::Jump(pc), Operation::None))
            }
            System::MachineCall { nnn } => Ok((self.call(nnn)?, Operation::None)),
        }
    }

    fn jump(&self, nnn: u16) -> ProgramCounterStep {
        ProgramCounterStep::Jump(nnn)
    }

    fn call(&mut self, nnn: u16) -> Result<ProgramCounterStep, ProcessError> {
        // the return address is the opcode after the call
        let ret = self.next_instruction();
        self.push_stack(ret).map_err(|err| self.stack_error(err))?;
        log::debug!("call {:#06X}, returning to {:#06X}", nnn, ret);
        Ok(ProgramCounterStep::Jump(nnn))
    }

    fn skip_equal(&self, x: usize, nn: u8) -> ProgramCounterStep {
        ProgramCounterStep::cond(self.registers[x] == nn)
    }

    fn skip_not_equal(&self, x: usize, nn: u8) -> ProgramCounterStep {
        ProgramCounterStep::cond(self.registers[x] != nn)
    }

    fn skip_registers_equal(&self, x: usize, y: usize) -> ProgramCounterStep {
        ProgramCounterStep::cond(self.registers[x] == self.registers[y])
    }

    fn load(&mut self, x: usize, nn: u8) -> ProgramCounterStep {
        self.registers[x] = nn;
        ProgramCounterStep::Next
    }

    fn add(&mut self, x: usize, nn: u8) -> ProgramCounterStep {
        // let VX overflow, but ignore carry
        self.registers[x] = self.registers[x].wrapping_add(nn);
        ProgramCounterStep::Next
    }

    fn arithmetic(&mut self, ops: Arithmetic, x: usize, y: usize) -> ProgramCounterStep {
        let vx = self.registers[x];
        let vy = self.registers[y];

        // the flag is written last, so that it wins if X is VF
        let (res, flag) = match ops {
            Arithmetic::Assign => (vy, None),
            Arithmetic::Or => (vx | vy, None),
            Arithmetic::And => (vx & vy, None),
            Arithmetic::Xor => (vx ^ vy, None),
            Arithmetic::Add => {
                let (res, carry) = vx.overflowing_add(vy);
                (res, Some(carry as u8))
            }
            Arithmetic::Sub => {
                let (res, borrow) = vx.overflowing_sub(vy);
                (res, Some(!borrow as u8))
            }
            Arithmetic::ShiftRight => (vx >> 1, Some(vx & 0x1)),
            Arithmetic::SubReverse => {
                let (res, borrow) = vy.overflowing_sub(vx);
                (res, Some(!borrow as u8))
            }
            Arithmetic::ShiftLeft => (vx << 1, Some(vx >> 7)),
        };

        self.registers[x] = res;
        if let Some(flag) = flag {
            self.registers[cpu::register::LAST] = flag;
        }
        ProgramCounterStep::Next
    }

    fn skip_registers_not_equal(&self, x: usize, y: usize) -> ProgramCounterStep {
        ProgramCounterStep::cond(self.registers[x] != self.registers[y])
    }

    fn set_index(&mut self, nnn: u16) -> ProgramCounterStep {
        self.index_register = nnn;
        ProgramCounterStep::Next
    }

    fn jump_offset(&self, nnn: u16) -> ProgramCounterStep {
        ProgramCounterStep::Jump(nnn + self.registers[0] as u16)
    }

    fn random(&mut self, x: usize, nn: u8) -> ProgramCounterStep {
        // using a fill bytes call here, as the trait RngCore does not
        // support random u8.
        let mut rand = [0u8; 1];
        self.rng.fill_bytes(&mut rand);
        self.registers[x] = rand[0] & nn;
        ProgramCounterStep::Next
    }

    fn draw(
        &mut self,
        x: usize,
        y: usize,
        n: usize,
    ) -> Result<(ProgramCounterStep, Operation), ProcessError> {
        // see https://tobiasvl.github.io/blog/write-a-chip-8-emulator/
        const BYTE: usize = 8;

        let coorx = self.registers[x] as usize;
        let coory = self.registers[y] as usize;
        let mut collision = false;

        for row in 0..n {
            let sprite = self.memory[self.index_address(row)];

            // most significant bit is the left most pixel
            for column in 0..BYTE {
                let mask = 0x80 >> column;
                if sprite & mask == 0 {
                    continue;
                }
                collision |= self.display.toggle_pixel(coorx + column, coory + row);
            }
        }

        self.registers[cpu::register::LAST] = collision as u8;
        self.draw_flag = true;

        Ok((ProgramCounterStep::Next, Operation::Draw))
    }

    fn key(&self, ops: KeyCondition, x: usize) -> ProgramCounterStep {
        let pressed = self.keyboard.is_pressed(self.registers[x] as usize);
        match ops {
            KeyCondition::Pressed => ProgramCounterStep::cond(pressed),
            KeyCondition::NotPressed => ProgramCounterStep::cond(!pressed),
        }
    }

    fn misc(&mut self, ops: Misc, x: usize) -> Result<(ProgramCounterStep, Operation), ProcessError> {
        match ops {
            Misc::GetDelayTimer => {
                self.registers[x] = self.delay_timer.get_value();
            }
            Misc::WaitForKey => match self.keyboard.pressed() {
                Some(key) => {
                    log::debug!("key {:#X} pressed, continuing", key);
                    self.registers[x] = key as u8;
                }
                None => {
                    // don't move the counter, so the instruction is fetched again
                    return Ok((ProgramCounterStep::None, Operation::Wait));
                }
            },
            Misc::SetDelayTimer => {
                self.delay_timer.set_value(self.registers[x]);
            }
            Misc::SetSoundTimer => {
                self.sound_timer.set_value(self.registers[x]);
            }
            Misc::AddIndex => {
                // VF is not affected
                self.index_register = self.index_register.wrapping_add(self.registers[x] as u16);
            }
            Misc::FontSprite => {
                let digit = (self.registers[x] & 0x0F) as usize;
                self.index_register = (display::fontset::LOCATION
                    + display::fontset::GLYPH_SIZE * digit) as u16;
            }
            Misc::BinaryCodedDecimal => {
                let r = self.registers[x];
                let digits = [r / 100, r / 10 % 10, r % 10];
                for (offset, digit) in digits.iter().enumerate() {
                    let address = self.index_address(offset);
                    self.memory[address] = *digit;
                }
            }
            Misc::StoreRegisters => {
                for offset in 0..=x {
                    let address = self.index_address(offset);
                    self.memory[address] = self.registers[offset];
                }
            }
            Misc::LoadRegisters => {
                for offset in 0..=x {
                    self.registers[offset] = self.memory[self.index_address(offset)];
                }
            }
        }
        Ok((ProgramCounterStep::Next, Operation::None))
    }
}
