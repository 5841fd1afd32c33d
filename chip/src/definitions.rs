/// The definitions

pub mod memory {
    /// The size of the chipset ram
    pub const SIZE: usize = 0x1000; // 4096

    /// Mask used to keep every address inside of the ram
    pub const ADDRESS_MASK: usize = SIZE - 1;

    /// opcode information
    pub mod opcodes {
        /// The step used for calculating the program counter increments
        pub const SIZE: usize = 2;
    }
}

/// The definitions for the cpu
pub mod cpu {
    /// The starting point for the program
    pub const PROGRAM_COUNTER: usize = 0x0200;

    /// The definitions needed for the register
    pub mod register {
        /// The size of the chip set registers
        pub const SIZE: usize = 16;
        /// The last entry of the registers, used as the flag register `VF`
        pub const LAST: usize = SIZE - 1;
    }

    /// The stack definitions
    pub mod stack {
        /// The count of nesting entries
        pub const SIZE: usize = 16;
    }
}

/// The rom definitions
pub mod rom {
    use super::{cpu, memory};

    /// The largest rom that fits between the program start and the end of the ram
    pub const MAX_SIZE: usize = memory::SIZE - cpu::PROGRAM_COUNTER; // 3584
}

/// The timer definitions
pub mod timer {
    /// The amount of times per second the driver is expected to tick the timers
    pub const HERTZ: u32 = 60;
}

/// The runner defaults
pub mod runner {
    /// The amount of hertz the emulation shall run at.
    pub const CLOCK_SPEED: u32 = 600;
    /// Sound is enabled if not requested otherwise.
    pub const SOUND_ENABLED: bool = true;
}

/// The display definitions
pub mod display {
    /// The amount of pixels horizontally
    pub const WIDTH: usize = 64;
    /// The amount of pixels vertically
    pub const HEIGHT: usize = 32;
    /// The amount of pixels the display has
    pub const RESOLUTION: usize = WIDTH * HEIGHT;
    /// Bytes used per pixel in the packed buffer (one `u32` for the host renderer)
    pub const PIXEL_SIZE: usize = 4;
    /// The size of the packed pixel buffer
    pub const BUFFER_SIZE: usize = RESOLUTION * PIXEL_SIZE;
    /// Packed byte value of a pixel that is turned on
    pub const PIXEL_ON: u8 = 0xFF;
    /// Packed byte value of a pixel that is turned off
    pub const PIXEL_OFF: u8 = 0x00;

    /// The fontset information
    pub mod fontset {
        /// Is the location of the beginning to the font in memory
        pub const LOCATION: usize = 0x50;
        /// The amount of bytes a single glyph takes up
        pub const GLYPH_SIZE: usize = 5;
        /// The font set character to be rendered on the screen
        pub const FONTSET: [u8; 80] = [
            0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
            0x20, 0x60, 0x20, 0x20, 0x70, // 1
            0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
            0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
            0x90, 0x90, 0xF0, 0x10, 0x10, // 4
            0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
            0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
            0xF0, 0x10, 0x20, 0x40, 0x40, // 7
            0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
            0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
            0xF0, 0x90, 0xF0, 0x90, 0x90, // A
            0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
            0xF0, 0x80, 0x80, 0x80, 0xF0, // C
            0xE0, 0x90, 0x90, 0x90, 0xE0, // D
            0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
            0xF0, 0x80, 0xF0, 0x80, 0x80, // F
        ];
    }
}

/// The definitions needed for correct keyboard definitions.
pub mod keyboard {
    /// all the different keyboard entries
    pub const SIZE: usize = 16;
}
