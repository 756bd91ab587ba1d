//! Scene description
//!
//! [`build_frame`] turns a borrowed [`GameState`] into a flat list of draw
//! commands. It never mutates the state.

use glam::Vec2;

use super::color::{Color, colors};
use crate::sim::{GamePhase, GameState, Ship};

/// One primitive the rasterizer knows how to fill
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole surface
    Clear(Color),
    /// Filled circle
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    /// Filled axis-aligned rectangle (top-left corner, size)
    Rect {
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        color: Color,
    },
    /// Filled triangle
    Triangle { a: Vec2, b: Vec2, c: Vec2, color: Color },
    /// Bitmap label, top-left anchored
    Text {
        x: i32,
        y: i32,
        text: String,
        color: Color,
    },
}

/// Triangle vertices for the ship: nose, left wing, right wing
pub fn ship_triangle(ship: &Ship) -> [Vec2; 3] {
    let (sin, cos) = ship.angle.sin_cos();
    let s = ship.size;
    let nose = ship.pos + Vec2::new(cos, sin) * s;
    let back = ship.pos - Vec2::new(cos, sin) * (s / 2.0);
    let side = Vec2::new(sin, -cos) * (s / 2.0);
    [nose, back + side, back - side]
}

/// Describe the current frame
pub fn build_frame<R>(state: &GameState<R>) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(state.asteroids.len() + state.bullets.len() + 16);
    let w = state.tuning.screen_width as i32;
    let h = state.tuning.screen_height as i32;

    commands.push(DrawCommand::Clear(colors::BACKGROUND));

    for asteroid in state.asteroids.iter().filter(|a| a.active) {
        commands.push(DrawCommand::Circle {
            center: asteroid.pos,
            radius: asteroid.size,
            color: colors::ASTEROID,
        });
    }

    for bullet in state.bullets.iter().filter(|b| b.active) {
        commands.push(DrawCommand::Rect {
            x: bullet.pos.x as i32 - 1,
            y: bullet.pos.y as i32 - 1,
            w: 3,
            h: 3,
            color: colors::BULLET,
        });
    }

    if state.ship.alive {
        let [a, b, c] = ship_triangle(&state.ship);
        commands.push(DrawCommand::Triangle {
            a,
            b,
            c,
            color: colors::SHIP,
        });
    }

    // HUD
    label(&mut commands, 10, 10, "LIVES:", colors::TEXT);
    number_box(&mut commands, 70, 10, 30, state.lives as u32);
    label(&mut commands, w - 150, 10, "SCORE:", colors::TEXT);
    number_box(&mut commands, w - 50, 10, 100, state.score);

    match state.phase {
        GamePhase::Playing => {}
        GamePhase::GameOver => end_panel(&mut commands, w, h, "GAME OVER", colors::GAME_OVER, state.score),
        GamePhase::Won => end_panel(&mut commands, w, h, "VICTORY!", colors::VICTORY, state.score),
    }

    commands
}

fn label(commands: &mut Vec<DrawCommand>, x: i32, y: i32, text: &str, color: Color) {
    commands.push(DrawCommand::Text {
        x,
        y,
        text: text.to_string(),
        color,
    });
}

/// Number on a black backdrop so it stays readable over asteroids
fn number_box(commands: &mut Vec<DrawCommand>, x: i32, y: i32, backdrop_width: i32, value: u32) {
    commands.push(DrawCommand::Rect {
        x: x - 5,
        y: y - 2,
        w: backdrop_width,
        h: 20,
        color: colors::HUD_BACKDROP,
    });
    label(commands, x, y, &value.to_string(), colors::TEXT);
}

fn end_panel(commands: &mut Vec<DrawCommand>, w: i32, h: i32, title: &str, title_color: Color, score: u32) {
    let (cx, cy) = (w / 2, h / 2);
    commands.push(DrawCommand::Rect {
        x: cx - 100,
        y: cy - 50,
        w: 200,
        h: 100,
        color: colors::PANEL,
    });
    label(commands, cx - 40, cy - 45, title, title_color);
    label(commands, cx - 30, cy - 15, "FINAL SCORE:", colors::TEXT);
    number_box(commands, cx - 10, cy + 8, 100, score);
    label(commands, cx - 20, cy + 38, "PRESS ENTER", colors::TEXT);
}
