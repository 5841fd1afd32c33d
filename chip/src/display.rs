//! The monochrome framebuffer of the chip.
//!
//! The pixels are stored packed, four bytes per pixel, so that a host renderer can blit
//! [`FrameBuffer::pixels`](FrameBuffer::pixels) straight into a `32 bit` texture. A pixel is on
//! when its bytes are [`PIXEL_ON`](crate::definitions::display::PIXEL_ON) and off when they are
//! [`PIXEL_OFF`](crate::definitions::display::PIXEL_OFF).
use crate::definitions::display::{
    BUFFER_SIZE, HEIGHT, PIXEL_OFF, PIXEL_ON, PIXEL_SIZE, WIDTH,
};

/// The graphics of the Chip 8 are black and white and the screen has a total of `2048` pixels
/// `(64 x 32)`. Coordinates outside of the screen wrap around to the opposite edge.
#[derive(Clone)]
pub struct FrameBuffer {
    raw: Box<[u8; BUFFER_SIZE]>,
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self {
            raw: Box::new([PIXEL_OFF; BUFFER_SIZE]),
        }
    }
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculates the offset of the first byte of the pixel, with the coordinates wrapped
    /// onto the screen.
    #[inline]
    fn offset(x: usize, y: usize) -> usize {
        ((y % HEIGHT) * WIDTH + (x % WIDTH)) * PIXEL_SIZE
    }

    /// Will return if the pixel at the given coordinates is on.
    pub fn get_pixel(&self, x: usize, y: usize) -> bool {
        self.raw[Self::offset(x, y)] == PIXEL_ON
    }

    /// Will flip the pixel at the given coordinates.
    ///
    /// Returns `true` if the pixel was on before, so the flip turned it off.
    pub fn toggle_pixel(&mut self, x: usize, y: usize) -> bool {
        let offset = Self::offset(x, y);
        let was_on = self.raw[offset] == PIXEL_ON;
        let value = if was_on { PIXEL_OFF } else { PIXEL_ON };
        self.raw[offset..offset + PIXEL_SIZE].fill(value);
        was_on
    }

    /// Will turn every pixel off.
    pub fn clear(&mut self) {
        self.raw.fill(PIXEL_OFF);
    }

    /// Will return the packed pixel data, row by row.
    pub fn pixels(&self) -> &[u8] {
        &self.raw[..]
    }

    /// Will return an iterator over the rows of the display, with every pixel as a `bool`.
    pub fn rows(&self) -> impl Iterator<Item = Vec<bool>> + '_ {
        self.raw.chunks_exact(WIDTH * PIXEL_SIZE).map(|row| {
            row.chunks_exact(PIXEL_SIZE)
                .map(|pixel| pixel[0] == PIXEL_ON)
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_clear() {
        let fb = FrameBuffer::new();
        assert_eq!(fb.pixels().len(), BUFFER_SIZE);
        assert!(fb.pixels().iter().all(|&b| b == PIXEL_OFF));
    }

    #[test]
    fn test_toggle_pixel() {
        let mut fb = FrameBuffer::new();

        assert!(!fb.toggle_pixel(3, 4));
        assert!(fb.get_pixel(3, 4));

        let offset = (4 * WIDTH + 3) * PIXEL_SIZE;
        assert_eq!(&fb.pixels()[offset..offset + PIXEL_SIZE], &[PIXEL_ON; PIXEL_SIZE]);

        assert!(fb.toggle_pixel(3, 4));
        assert!(!fb.get_pixel(3, 4));
        assert_eq!(&fb.pixels()[offset..offset + PIXEL_SIZE], &[PIXEL_OFF; PIXEL_SIZE]);
    }

    #[test]
    fn test_wraparound() {
        let mut fb = FrameBuffer::new();

        fb.toggle_pixel(WIDTH + 1, HEIGHT + 2);
        assert!(fb.get_pixel(1, 2));
        assert!(fb.get_pixel(WIDTH + 1, 2));
        assert!(fb.get_pixel(1, 2 * HEIGHT + 2));
    }

    #[test]
    fn test_clear() {
        let mut fb = FrameBuffer::new();
        for i in 0..WIDTH {
            fb.toggle_pixel(i, i);
        }
        fb.clear();

        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                assert!(!fb.get_pixel(x, y));
            }
        }
    }

    #[test]
    fn test_rows() {
        let mut fb = FrameBuffer::new();
        fb.toggle_pixel(WIDTH - 1, HEIGHT - 1);

        let rows: Vec<_> = fb.rows().collect();
        assert_eq!(rows.len(), HEIGHT);
        assert!(rows.iter().all(|row| row.len() == WIDTH));
        assert!(rows[HEIGHT - 1][WIDTH - 1]);
        assert_eq!(rows.iter().flatten().filter(|&&p| p).count(), 1);
    }
}
