use crate::{
    chip8::ChipSet,
    definitions::{runner, timer},
    devices::{DisplayCommands, KeyEvent, SoundCommands},
    ProcessError,
};

/// The settings of the driver loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    clock_speed: u32,
    sound_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            clock_speed: runner::CLOCK_SPEED,
            sound_enabled: runner::SOUND_ENABLED,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// The amount of instructions executed per second.
    pub fn clock_speed(mut self, hertz: u32) -> Self {
        self.clock_speed = hertz;
        self
    }

    pub fn sound_enabled(mut self, enabled: bool) -> Self {
        self.sound_enabled = enabled;
        self
    }

    pub fn get_clock_speed(&self) -> u32 {
        self.clock_speed
    }

    pub fn is_sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    /// The amount of instructions executed between two timer ticks, at least one.
    ///
    /// # Example
    /// ```rust
    /// # use chip::Config;
    /// assert_eq!(Config::default().instructions_per_frame(), 10);
    /// assert_eq!(Config::new().clock_speed(30).instructions_per_frame(), 1);
    /// ```
    pub fn instructions_per_frame(&self) -> u32 {
        (self.clock_speed / timer::HERTZ).max(1)
    }
}

/// Drives the chip frame by frame, one frame being the time between two timer ticks.
///
/// Pacing the frames to the wall clock is up to the caller.
pub struct Runner<D, S>
where
    D: DisplayCommands,
    S: SoundCommands,
{
    chip: ChipSet,
    config: Config,
    display: D,
    sound: S,
}

impl<D, S> Runner<D, S>
where
    D: DisplayCommands,
    S: SoundCommands,
{
    pub fn new(chip: ChipSet, config: Config, display: D, sound: S) -> Self {
        Self {
            chip,
            config,
            display,
            sound,
        }
    }

    pub fn chip(&self) -> &ChipSet {
        &self.chip
    }

    pub fn chip_mut(&mut self) -> &mut ChipSet {
        &mut self.chip
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Will forward the key event to the chip.
    pub fn handle_key_event(&mut self, event: KeyEvent, key: usize) {
        self.chip.handle_key_event(event, key)
    }

    /// Will run a single frame.
    ///
    /// Executes the configured amount of instructions, ticks both timers, draws the display if
    /// it changed and plays the tone if the sound timer is running. A fatal error stops the frame
    /// and is handed back, the runner shall not be used anymore afterwards.
    pub fn run_frame(&mut self) -> Result<(), ProcessError> {
        for _ in 0..self.config.instructions_per_frame() {
            if let Err(err) = self.chip.next() {
                log::error!("Stopping execution: {}", err);
                return Err(err);
            }
        }

        self.chip.tick_timers();

        if self.chip.get_draw_flag() {
            self.display.display(self.chip.get_display().pixels());
            self.chip.set_draw_flag(false);
        }

        if self.config.sound_enabled && self.chip.should_play_sound() {
            self.sound.beep();
        }

        Ok(())
    }

    /// Will run the given amount of frames, stopping at the first error.
    pub fn run_frames(&mut self, frames: usize) -> Result<(), ProcessError> {
        for _ in 0..frames {
            self.run_frame()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        definitions::display,
        devices::{MockDisplayCommands, MockSoundCommands},
        opcode::Opcode,
    };

    /// Sets the sound timer, draws the `0` glyph at `(5, 0)` and loops forever.
    const PROGRAM: [Opcode; 5] = [0x6005, 0xF018, 0xA050, 0xD015, 0x1208];

    fn setup_chip(program: &[Opcode]) -> ChipSet {
        let data: Vec<u8> = program.iter().flat_map(|op| op.to_be_bytes()).collect();
        let mut chip = ChipSet::new();
        chip.load(&data).expect("the test program is valid");
        chip
    }

    #[test]
    fn test_config() {
        let config = Config::default();
        assert_eq!(config.get_clock_speed(), 600);
        assert!(config.is_sound_enabled());

        let config = config.clock_speed(1200).sound_enabled(false);
        assert_eq!(config.instructions_per_frame(), 20);
        assert!(!config.is_sound_enabled());
    }

    #[test]
    fn test_run_frames_draws_once_and_beeps() {
        let mut display_mock = MockDisplayCommands::new();
        display_mock
            .expect_display()
            .withf(|pixels| {
                let lit = pixels
                    .chunks_exact(display::PIXEL_SIZE)
                    .filter(|pixel| pixel[0] == display::PIXEL_ON)
                    .count();
                // the zero glyph has 14 pixels turned on
                pixels.len() == display::BUFFER_SIZE && lit == 14
            })
            .times(1)
            .return_const(());

        let mut sound_mock = MockSoundCommands::new();
        sound_mock.expect_beep().times(2).return_const(());

        let config = Config::new().clock_speed(300);
        let mut runner = Runner::new(setup_chip(&PROGRAM), config, display_mock, sound_mock);

        assert_eq!(runner.run_frames(2), Ok(()));
        assert!(!runner.chip().get_draw_flag());
        assert_eq!(runner.chip().get_sound_timer(), 3);
        assert_eq!(runner.chip().get_program_counter(), 0x208);
    }

    #[test]
    fn test_run_frame_without_sound() {
        let mut display_mock = MockDisplayCommands::new();
        display_mock.expect_display().times(1).return_const(());

        let mut sound_mock = MockSoundCommands::new();
        sound_mock.expect_beep().never();

        let config = Config::new().clock_speed(300).sound_enabled(false);
        let mut runner = Runner::new(setup_chip(&PROGRAM), config, display_mock, sound_mock);

        assert_eq!(runner.run_frame(), Ok(()));
        assert!(runner.chip().should_play_sound());
    }

    #[test]
    fn test_run_frame_stops_on_error() {
        let mut display_mock = MockDisplayCommands::new();
        display_mock.expect_display().never();
        let mut sound_mock = MockSoundCommands::new();
        sound_mock.expect_beep().never();

        let mut runner = Runner::new(
            setup_chip(&[0x6001, 0x8009]),
            Config::default(),
            display_mock,
            sound_mock,
        );

        let err = runner.run_frames(3).unwrap_err();
        assert_eq!(
            err,
            ProcessError::InvalidOpcode {
                opcode: 0x8009,
                pc: 0x202
            }
        );
        assert_eq!(err.pc(), 0x202);
    }

    #[test]
    fn test_run_frame_waits_for_key() {
        let mut display_mock = MockDisplayCommands::new();
        display_mock.expect_display().never();
        let mut sound_mock = MockSoundCommands::new();
        sound_mock.expect_beep().never();

        // wait for a key into V3 and loop
        let mut runner = Runner::new(
            setup_chip(&[0xF30A, 0x1202]),
            Config::default(),
            display_mock,
            sound_mock,
        );

        assert_eq!(runner.run_frame(), Ok(()));
        assert!(runner.chip().is_waiting());
        assert_eq!(runner.chip().get_program_counter(), 0x200);

        runner.handle_key_event(KeyEvent::Down, 0x7);
        assert_eq!(runner.run_frame(), Ok(()));
        assert!(!runner.chip().is_waiting());
        assert_eq!(runner.chip().get_registers()[3], 0x7);
        assert_eq!(runner.chip().get_program_counter(), 0x202);
    }
}
