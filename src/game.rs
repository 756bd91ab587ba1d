//! Host lifecycle contract
//!
//! Constructing a [`Game`] yields a freshly initialized run. The host then
//! calls [`Game::update`] and [`Game::render`] once per frame, strictly in
//! that order, and finally [`Game::finalize`]. [`Game::initialize`] starts
//! a new run on the same random stream.

use rand_pcg::Pcg32;

use crate::platform::{InputSource, Key, Surface};
use crate::renderer::{DrawCommand, build_frame, rasterize};
use crate::sim::{GameState, RandomSource, TickInput, tick};
use crate::tuning::Tuning;

/// Game instance holding all state
#[derive(Debug)]
pub struct Game<R = Pcg32> {
    state: GameState<R>,
    quit_requested: bool,
}

impl Game<Pcg32> {
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self::from_state(GameState::with_tuning(seed, tuning))
    }
}

impl<R: RandomSource> Game<R> {
    pub fn from_state(state: GameState<R>) -> Self {
        Self {
            state,
            quit_requested: false,
        }
    }

    /// Reset to a fresh run: full lives, zero score, new asteroid field.
    /// Not needed right after construction.
    pub fn initialize(&mut self) {
        self.state.reset();
        self.quit_requested = false;
        log::info!(
            "Game initialized: {} lives, {} asteroids",
            self.state.lives,
            self.state.asteroids.len()
        );
    }

    /// Advance one frame. A held quit key latches the quit request; the
    /// frame itself still runs to completion.
    pub fn update(&mut self, dt: f32, input: &impl InputSource) {
        if input.is_pressed(Key::Quit) && !self.quit_requested {
            log::info!("Quit requested on frame {}", self.state.frame);
            self.quit_requested = true;
        }
        tick(&mut self.state, &TickInput::poll(input), dt);
    }
}

impl<R> Game<R> {
    /// Draw commands for the current state
    pub fn render(&self) -> Vec<DrawCommand> {
        build_frame(&self.state)
    }

    /// Rasterize the current state onto a host surface
    pub fn render_to<S: Surface + ?Sized>(&self, surface: &mut S) {
        rasterize(surface, &self.render());
    }

    /// Release in-memory collections
    pub fn finalize(&mut self) {
        self.state.bullets.clear();
        self.state.asteroids.clear();
        log::info!("Game finalized");
    }

    /// One-way signal for the host to stop after this frame
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn state(&self) -> &GameState<R> {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState<R> {
        &mut self.state
    }
}
