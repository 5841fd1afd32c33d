use {
    crate::{
        definitions::{cpu, display, memory},
        devices::{KeyEvent, Keyboard},
        display::FrameBuffer,
        opcode::{self, Instruction, Opcode, Operation, ProgramCounter, ProgramCounterStep},
        resources::{self, Rom},
        timer::Timer,
        ProcessError, RomError, StackError,
    },
    rand::RngCore,
    tinyvec::ArrayVec,
};

/// The ChipSet struct represents the current state
/// of the system, it contains all the structures
/// needed for emulating an instant on the
/// Chip8 CPU.
pub struct ChipSet {
    /// name of the loaded rom
    pub(super) name: String,
    /// all two bytes long and stored big-endian
    pub(super) opcode: Opcode,
    /// - `0x000-0x1FF` - Chip 8 interpreter (contains font set in emu)
    /// - `0x050-0x0A0` - Used for the built in `4x5` pixel font set (`0-F`)
    /// - `0x200-0xFFF` - Program ROM and work RAM
    pub(super) memory: Box<[u8; memory::SIZE]>,
    /// `8-bit` data registers named `V0` to `VF`. The `VF` register doubles as a flag for some
    /// instructions; thus, it should be avoided. In an addition operation, `VF` is the carry flag,
    /// while in subtraction, it is the "no borrow" flag. In the draw instruction `VF` is set upon
    /// pixel collision.
    pub(super) registers: [u8; cpu::register::SIZE],
    /// The index for the register, this is a special register entry
    /// called index `I`
    pub(super) index_register: u16,
    /// The program counter is a CPU register in the computer processor which has the address of the
    /// next instruction to be executed from memory.
    pub(super) program_counter: u16,
    /// The stack is only used to store return addresses when subroutines are called. The original
    /// [RCA 1802](https://de.wikipedia.org/wiki/RCA1802) version allocated `48` bytes for up to
    /// `12` levels of nesting; modern implementations usually have more.
    /// (here we are using `16`)
    pub(super) stack: ArrayVec<[u16; cpu::stack::SIZE]>,
    /// Delay timer: This timer is intended to be used for timing the events of games. Its value
    /// can be set and read.
    pub(super) delay_timer: Timer,
    /// Sound timer: This timer is used for sound effects. When its value is nonzero, a beeping
    /// sound is made.
    pub(super) sound_timer: Timer,
    pub(super) display: FrameBuffer,
    /// Set whenever the display changed, cleared by the driver once it has drawn the display.
    pub(super) draw_flag: bool,
    pub(super) keyboard: Keyboard,
    /// Set while `FX0A` is waiting for a key to be pressed.
    pub(super) waiting: bool,
    /// This stores the random number generator, used by the chipset.
    /// It is stored into the chipset, so as to enable simple mocking
    /// of the given type.
    pub(super) rng: Box<dyn RngCore + Send>,
}

impl Default for ChipSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ChipSet {
    /// will create a new chipset object, with the font set loaded and no program
    pub fn new() -> Self {
        // initialize all the memory with 0
        let mut ram = Box::new([0; memory::SIZE]);

        // load fonts
        ram[display::fontset::LOCATION
            ..(display::fontset::LOCATION + display::fontset::FONTSET.len())]
            .copy_from_slice(&display::fontset::FONTSET);

        Self {
            name: String::new(),
            opcode: 0,
            memory: ram,
            registers: [0; cpu::register::SIZE],
            index_register: 0,
            program_counter: cpu::PROGRAM_COUNTER as u16,
            stack: ArrayVec::new(),
            delay_timer: Timer::default(),
            sound_timer: Timer::default(),
            display: FrameBuffer::new(),
            draw_flag: false,
            keyboard: Keyboard::new(),
            waiting: false,
            rng: Box::new(rand::rngs::OsRng),
        }
    }

    /// will replace the random number generator used by `CXNN`
    pub fn with_rng<R>(mut self, rng: R) -> Self
    where
        R: RngCore + Send + 'static,
    {
        self.rng = Box::new(rng);
        self
    }

    /// will create a new chipset with the rom already loaded
    pub fn with_rom(rom: &Rom) -> Self {
        let mut chip = Self::new();
        chip.load_rom(rom);
        chip
    }

    /// will write the rom data into memory
    pub fn load_rom(&mut self, rom: &Rom) {
        self.name = rom.get_name().to_string();
        self.copy_program(rom.get_data());
    }

    /// will check and write the raw program into memory, nothing
    /// but the program area is touched
    pub fn load(&mut self, data: &[u8]) -> Result<(), RomError> {
        resources::validate(data)?;
        self.copy_program(data);
        Ok(())
    }

    fn copy_program(&mut self, data: &[u8]) {
        log::debug!("Loading program '{}' with {} bytes", self.name, data.len());
        self.memory[cpu::PROGRAM_COUNTER..(cpu::PROGRAM_COUNTER + data.len())]
            .copy_from_slice(data);
    }

    /// will get the next opcode from memory
    pub(super) fn set_opcode(&mut self) {
        // will build the opcode given from the pointer
        self.opcode = opcode::build_opcode(&self.memory[..], self.program_counter as usize);
    }

    /// will advance the program by a single step
    pub fn next(&mut self) -> Result<Operation, ProcessError> {
        // import here as to not bloat the namespace
        use crate::opcode::ChipOpcodes;
        // get next opcode
        self.set_opcode();
        let instruction = Instruction::from(self.opcode);
        log::trace!(
            "{:#06X}: {:#06X} {:?}",
            self.program_counter,
            self.opcode,
            instruction
        );
        // run the opcode
        let operation = self.calc(&instruction)?;
        self.waiting = operation == Operation::Wait;
        Ok(operation)
    }

    /// Will apply a key event coming from the driver, unknown keys are ignored.
    pub fn handle_key_event(&mut self, event: KeyEvent, key: usize) {
        self.keyboard.handle_event(event, key)
    }

    /// Will set the value of the given key
    pub fn set_key(&mut self, key: usize, to: bool) {
        self.keyboard.set_key(key, to)
    }

    /// Will get the current state of the keyboard
    pub fn get_keyboard(&self) -> &[bool] {
        self.keyboard.get_keys()
    }

    /// Counts the delay timer down by one.
    pub fn tick_delay_timer(&mut self) {
        self.delay_timer.tick()
    }

    /// Counts the sound timer down by one.
    pub fn tick_sound_timer(&mut self) {
        self.sound_timer.tick()
    }

    /// Counts both timers down by one.
    pub fn tick_timers(&mut self) {
        self.tick_delay_timer();
        self.tick_sound_timer();
    }

    /// Checks if the tone shall be played.
    pub fn should_play_sound(&self) -> bool {
        self.sound_timer.is_active()
    }

    /// will return the sound timer
    pub fn get_sound_timer(&self) -> u8 {
        self.sound_timer.get_value()
    }

    /// will return the delay timer
    pub fn get_delay_timer(&self) -> u8 {
        self.delay_timer.get_value()
    }

    /// Will return the current display
    pub fn get_display(&self) -> &FrameBuffer {
        &self.display
    }

    /// Will return if the display changed since the flag was cleared.
    pub fn get_draw_flag(&self) -> bool {
        self.draw_flag
    }

    /// Will set the draw flag, usually to clear it after drawing.
    pub fn set_draw_flag(&mut self, to: bool) {
        self.draw_flag = to;
    }

    /// Will return if the chip is waiting for a key press.
    pub fn is_waiting(&self) -> bool {
        self.waiting
    }

    pub fn get_program_counter(&self) -> u16 {
        self.program_counter
    }

    pub fn get_index_register(&self) -> u16 {
        self.index_register
    }

    pub fn get_registers(&self) -> &[u8] {
        &self.registers
    }

    pub fn get_memory(&self) -> &[u8] {
        &self.memory[..]
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    /// Will push the return address to the stack
    pub(super) fn push_stack(&mut self, pointer: u16) -> Result<(), StackError> {
        if self.stack.len() == self.stack.capacity() {
            Err(StackError::Full)
        } else {
            self.stack.push(pointer);
            Ok(())
        }
    }

    /// Will pop the last return address from the stack
    pub(super) fn pop_stack(&mut self) -> Result<u16, StackError> {
        self.stack.pop().ok_or(StackError::Empty)
    }

    /// Wraps the stack error with the address of the current instruction
    pub(super) fn stack_error(&self, source: StackError) -> ProcessError {
        ProcessError::Stack {
            source,
            pc: self.program_counter,
        }
    }
}

impl ProgramCounter for ChipSet {
    fn step(&mut self, step: ProgramCounterStep) {
        self.program_counter = step.apply(self.program_counter);
    }

    fn program_counter(&self) -> u16 {
        self.program_counter
    }
}
