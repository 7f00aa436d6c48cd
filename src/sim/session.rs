//! One play-through: the ship, the rock pool, score and game-over state

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::obstacle::Obstacle;
use super::ship::Ship;
use crate::consts::*;
use crate::surface::{Surface, colors};

/// Lifecycle of a session. There is no way back from `Ended`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Constructed, entities not yet spawned
    Initializing,
    /// Ticking
    Running,
    /// Stopped; the loop exits at its next iteration
    Ended,
}

/// Score for a given survival time: one point per full 100ms
#[inline]
pub fn score_for_elapsed(elapsed_ns: u64) -> u64 {
    elapsed_ns / NANOS_PER_POINT
}

/// Summary logged when a session's loop exits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionReport {
    pub seed: u64,
    pub score: u64,
    pub ticks: u64,
    pub elapsed_ms: u64,
    pub alive: bool,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct Session {
    /// RNG seed, kept for the report
    pub seed: u64,
    rng: Pcg32,
    pub ship: Ship,
    pub obstacles: Vec<Obstacle>,
    pub score: u64,
    /// Cleared by the first collision, never set again
    pub alive: bool,
    pub phase: Phase,
    /// Number of `update` calls since `init`
    pub ticks: u64,
    start_ns: u64,
    last_ns: u64,
}

impl Session {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            ship: Ship::new(SHIP_START_X, SHIP_START_Y),
            obstacles: Vec::new(),
            score: 0,
            alive: true,
            phase: Phase::Initializing,
            ticks: 0,
            start_ns: 0,
            last_ns: 0,
        }
    }

    /// Spawn the ship and the rock pool and start the score clock
    pub fn init(&mut self, now_ns: u64) {
        if self.phase != Phase::Initializing {
            log::warn!("Session {} already initialized", self.seed);
            return;
        }
        self.ship = Ship::new(SHIP_START_X, SHIP_START_Y);
        self.obstacles = (0..OBSTACLE_COUNT)
            .map(|_| Obstacle::new(&mut self.rng))
            .collect();
        self.start_ns = now_ns;
        self.last_ns = now_ns;
        self.phase = Phase::Running;
        log::debug!(
            "Session {} running with {} obstacles",
            self.seed,
            self.obstacles.len()
        );
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// End the session. The loop notices at the top of its next iteration.
    pub fn stop(&mut self) {
        if self.phase != Phase::Ended {
            self.phase = Phase::Ended;
            log::info!("Session {} stopped at score {}", self.seed, self.score);
        }
    }

    /// Advance the simulation by one tick
    pub fn update(&mut self, now_ns: u64) {
        if self.phase == Phase::Initializing {
            return;
        }
        self.ticks += 1;

        if self.alive {
            self.ship.update();
            let ship_rect = self.ship.rect();
            for obstacle in &mut self.obstacles {
                obstacle.update(&mut self.rng);
                if self.alive && ship_rect.intersects(&obstacle.rect()) {
                    self.alive = false;
                    log::info!(
                        "Ship hit at ({:.1}, {:.1}) on tick {}",
                        self.ship.pos.x,
                        self.ship.pos.y,
                        self.ticks
                    );
                }
            }
        }

        // Keeps counting after game over; the frozen frame hides it
        self.last_ns = self.last_ns.max(now_ns);
        self.score = score_for_elapsed(self.last_ns - self.start_ns);
    }

    /// Draw the current frame. Drawing the game-over overlay ends the session.
    pub fn render(&mut self, surface: &mut dyn Surface) {
        surface.clear();
        surface.draw_rect(0.0, 0.0, ARENA_WIDTH, ARENA_HEIGHT, colors::BACKGROUND);
        surface.draw_text(&self.score_text(), 0.0, 20.0, 20.0, colors::SCORE_TEXT);
        self.ship.render(surface);
        for obstacle in &self.obstacles {
            obstacle.render(surface);
        }
        if !self.alive {
            self.render_game_over(surface);
        }
        surface.present();
    }

    fn render_game_over(&mut self, surface: &mut dyn Surface) {
        surface.draw_rect(0.0, 0.0, ARENA_WIDTH, ARENA_HEIGHT, colors::BACKGROUND);
        surface.draw_text("GAME OVER", 175.0, 200.0, 50.0, colors::GAME_OVER_TEXT);
        surface.draw_text(&self.score_text(), 250.0, 250.0, 20.0, colors::SCORE_TEXT);
        self.stop();
    }

    pub fn score_text(&self) -> String {
        format!("SCORE: {}", self.score)
    }

    pub fn report(&self) -> SessionReport {
        SessionReport {
            seed: self.seed,
            score: self.score,
            ticks: self.ticks,
            elapsed_ms: (self.last_ns - self.start_ns) / 1_000_000,
            alive: self.alive,
        }
    }
}
