//! Packed 32-bit pixel color

use bytemuck::{Pod, Zeroable};

/// ARGB packed as `(a << 24) | (r << 16) | (g << 8) | b`
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Color(pub u32);

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = Color(0);
    pub const ASTEROID: Color = Color::rgb(128, 128, 128);
    pub const BULLET: Color = Color::rgb(255, 255, 0);
    pub const SHIP: Color = Color::rgb(255, 255, 255);
    pub const TEXT: Color = Color::rgb(255, 255, 255);
    pub const HUD_BACKDROP: Color = Color::rgb(0, 0, 0);
    pub const PANEL: Color = Color::rgba(0, 0, 0, 128);
    pub const GAME_OVER: Color = Color::rgb(255, 0, 0);
    pub const VICTORY: Color = Color::rgb(0, 255, 0);
}
