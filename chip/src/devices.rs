use crate::definitions::keyboard;

#[cfg_attr(test, mockall::automock)]
/// The traits responsible for the display based code
pub trait DisplayCommands {
    /// Will display all the pixels, packed as described in [`FrameBuffer`](crate::display::FrameBuffer).
    fn display(&mut self, pixels: &[u8]);
}

#[cfg_attr(test, mockall::automock)]
/// The trait responsible for the sound output
pub trait SoundCommands {
    /// Will play the tone for a single frame.
    fn beep(&mut self);
}

/// The direction of a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Down,
    Up,
}

/// Input is done with a hex keyboard that has 16 keys ranging `0-F`. The `8`, `4`, `6`, and
/// `2` keys are typically used for directional input. Three opcodes are used to detect input.
/// One skips an instruction if a specific key is pressed, while another does the same if a
/// specific key is not pressed. The third waits for a key press, and then stores it in one of
/// the data registers.
#[derive(Default, Debug, Clone)]
pub struct Keyboard {
    keys: [bool; keyboard::SIZE],
}

impl Keyboard {
    pub fn new() -> Self {
        Keyboard::default()
    }

    /// Will apply the event to the given key, keys outside of `0-F` are ignored.
    pub fn handle_event(&mut self, event: KeyEvent, key: usize) {
        self.set_key(key, event == KeyEvent::Down)
    }

    /// Will set the value of the given key, keys outside of `0-F` are ignored.
    pub fn set_key(&mut self, key: usize, to: bool) {
        match self.keys.get_mut(key) {
            Some(state) => *state = to,
            None => log::warn!("Ignoring event for unknown key {:#X}", key),
        }
    }

    /// Will return if the key is currently down, unknown keys are never down.
    pub fn is_pressed(&self, key: usize) -> bool {
        self.keys.get(key).copied().unwrap_or(false)
    }

    /// Will return the highest key that is currently down.
    pub fn pressed(&self) -> Option<usize> {
        self.keys.iter().rposition(|&down| down)
    }

    pub fn get_keys(&self) -> &[bool] {
        &self.keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_event() {
        let mut kb = Keyboard::new();
        assert_eq!(kb.pressed(), None);

        kb.handle_event(KeyEvent::Down, 0xA);
        assert!(kb.is_pressed(0xA));
        assert_eq!(kb.pressed(), Some(0xA));

        kb.handle_event(KeyEvent::Up, 0xA);
        assert!(!kb.is_pressed(0xA));
        assert_eq!(kb.pressed(), None);
    }

    #[test]
    fn test_unknown_key_is_ignored() {
        let mut kb = Keyboard::new();
        kb.handle_event(KeyEvent::Down, keyboard::SIZE);
        kb.handle_event(KeyEvent::Down, usize::MAX);

        assert!(kb.get_keys().iter().all(|&down| !down));
        assert!(!kb.is_pressed(keyboard::SIZE));
    }

    #[test]
    fn test_pressed_reports_highest_key() {
        let mut kb = Keyboard::new();
        kb.set_key(0x2, true);
        kb.set_key(0x7, true);
        assert_eq!(kb.pressed(), Some(0x7));
    }
}
