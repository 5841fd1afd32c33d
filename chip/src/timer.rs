/// Represents a timer inside of the chip
/// infrastruture, it will count down to
/// zero from what ever number given, once
/// per tick of the driver (usually at 60Hz).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    value: u8,
}

impl Timer {
    /// Will create a new timer with the given value.
    pub fn new(value: u8) -> Self {
        Self { value }
    }

    /// Will set the value from which the timer shall count down from.
    pub fn set_value(&mut self, value: u8) {
        self.value = value;
    }

    /// Will get the value that the counter is currently at.
    pub fn get_value(&self) -> u8 {
        self.value
    }

    /// Will count down by one, the timer stops at zero.
    pub fn tick(&mut self) {
        self.value = self.value.saturating_sub(1);
    }

    /// Checks if the timer is still counting.
    pub fn is_active(&self) -> bool {
        self.value != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer() {
        let mut timer = Timer::new(5);
        for _ in 0..5 {
            assert!(timer.is_active());
            timer.tick();
        }
        assert_eq!(timer.get_value(), 0);
        assert!(!timer.is_active());

        // stays at zero
        timer.tick();
        assert_eq!(timer.get_value(), 0);
    }

    #[test]
    fn test_set_value() {
        let mut timer = Timer::default();
        assert!(!timer.is_active());
        timer.set_value(2);
        assert_eq!(timer.get_value(), 2);
        timer.tick();
        assert_eq!(timer.get_value(), 1);
    }
}
