//! Platform abstraction layer
//!
//! The host engine owns the window, timing and the pixel buffer. The game
//! only sees it through two seams:
//! - [`InputSource`]: level-triggered key polling
//! - [`Surface`]: a fixed-size pixel write target

use crate::renderer::Color;
use crate::sim::TickInput;

/// Keys the game polls each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Fire,
    Confirm,
    Quit,
}

/// Host key state ("is pressed now", not edge-triggered)
pub trait InputSource {
    fn is_pressed(&self, key: Key) -> bool;
}

/// Pixel-addressable surface supplied by the host
pub trait Surface {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    /// Write one pixel. Callers guarantee `x < width()` and `y < height()`.
    fn set_pixel(&mut self, x: usize, y: usize, color: Color);
    /// Fill the whole surface
    fn clear(&mut self, color: Color) {
        for y in 0..self.height() {
            for x in 0..self.width() {
                self.set_pixel(x, y, color);
            }
        }
    }
}

impl TickInput {
    /// Sample the simulation controls from the host
    pub fn poll(input: &impl InputSource) -> Self {
        Self {
            left: input.is_pressed(Key::Left),
            right: input.is_pressed(Key::Right),
            thrust: input.is_pressed(Key::Up),
            brake: input.is_pressed(Key::Down),
            fire: input.is_pressed(Key::Fire),
            restart: input.is_pressed(Key::Confirm),
        }
    }
}

/// Fixed set of held keys
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub(crate) struct HeldKeys(pub Vec<Key>);

#[cfg(test)]
impl InputSource for HeldKeys {
    fn is_pressed(&self, key: Key) -> bool {
        self.0.contains(&key)
    }
}
