//! Software rasterizer for draw commands
//!
//! All writes go through [`put`], which drops anything outside the surface.

use glam::Vec2;

use super::color::Color;
use super::commands::DrawCommand;
use super::glyphs::{ADVANCE, glyph};
use crate::platform::Surface;

/// Rasterize a frame's commands in order
pub fn rasterize<S: Surface + ?Sized>(surface: &mut S, commands: &[DrawCommand]) {
    for command in commands {
        match command {
            DrawCommand::Clear(color) => surface.clear(*color),
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => fill_circle(surface, center.x as i32, center.y as i32, *radius as i32, *color),
            DrawCommand::Rect { x, y, w, h, color } => fill_rect(surface, *x, *y, *w, *h, *color),
            DrawCommand::Triangle { a, b, c, color } => fill_triangle(surface, *a, *b, *c, *color),
            DrawCommand::Text { x, y, text, color } => draw_text(surface, *x, *y, text, *color),
        }
    }
}

/// Write a pixel if it lies on the surface
#[inline]
pub fn put<S: Surface + ?Sized>(surface: &mut S, x: i32, y: i32, color: Color) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x < surface.width() && y < surface.height() {
        surface.set_pixel(x, y, color);
    }
}

pub fn fill_rect<S: Surface + ?Sized>(surface: &mut S, x: i32, y: i32, w: i32, h: i32, color: Color) {
    for py in y..y + h {
        for px in x..x + w {
            put(surface, px, py, color);
        }
    }
}

/// Scans only the part of the bounding box that lies on the surface
pub fn fill_circle<S: Surface + ?Sized>(surface: &mut S, cx: i32, cy: i32, radius: i32, color: Color) {
    if radius < 0 || surface.width() == 0 || surface.height() == 0 {
        return;
    }
    let (cx, cy, r) = (i64::from(cx), i64::from(cy), i64::from(radius));
    let max_x = surface.width() as i64 - 1;
    let max_y = surface.height() as i64 - 1;
    let r2 = r * r;
    for y in (cy - r).max(0)..=(cy + r).min(max_y) {
        for x in (cx - r).max(0)..=(cx + r).min(max_x) {
            let (dx, dy) = (x - cx, y - cy);
            if dx * dx + dy * dy <= r2 {
                surface.set_pixel(x as usize, y as usize, color);
            }
        }
    }
}

/// Bounding-box scan with a barycentric inside test
pub fn fill_triangle<S: Surface + ?Sized>(surface: &mut S, a: Vec2, b: Vec2, c: Vec2, color: Color) {
    let v0 = c - b;
    let v1 = a - b;
    let dot00 = v0.dot(v0);
    let dot01 = v0.dot(v1);
    let dot11 = v1.dot(v1);
    let denom = dot00 * dot11 - dot01 * dot01;
    if denom.abs() < f32::EPSILON {
        return;
    }
    let inv = 1.0 / denom;

    let min = a.min(b).min(c);
    let max = a.max(b).max(c);

    for y in min.y as i32..=max.y as i32 {
        for x in min.x as i32..=max.x as i32 {
            let v2 = Vec2::new(x as f32, y as f32) - b;
            let dot02 = v0.dot(v2);
            let dot12 = v1.dot(v2);
            let u = (dot11 * dot02 - dot01 * dot12) * inv;
            let v = (dot00 * dot12 - dot01 * dot02) * inv;
            if u >= 0.0 && v >= 0.0 && u + v <= 1.0 {
                put(surface, x, y, color);
            }
        }
    }
}

pub fn draw_text<S: Surface + ?Sized>(surface: &mut S, x: i32, y: i32, text: &str, color: Color) {
    for (i, ch) in text.chars().enumerate() {
        let cell_x = x + i as i32 * ADVANCE;
        for &(dx, dy, w, h) in glyph(ch) {
            fill_rect(surface, cell_x + dx, y + dy, w, h, color);
        }
    }
}
