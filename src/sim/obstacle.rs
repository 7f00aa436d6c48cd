//! Falling rocks

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;
use crate::surface::{Surface, colors};

/// A single falling obstacle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    /// Top-left corner
    pub pos: Vec2,
    /// Fall speed in units/second. Grows every tick for the whole session.
    pub velocity: f32,
    /// Times this obstacle has wrapped back to the top
    pub respawns: u32,
}

/// Random spawn column, an integer in [0, OBSTACLE_SPAWN_RANGE)
fn spawn_x<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.random_range(0..OBSTACLE_SPAWN_RANGE) as f32
}

impl Obstacle {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            pos: Vec2::new(spawn_x(rng), 0.0),
            velocity: OBSTACLE_START_VELOCITY,
            respawns: 0,
        }
    }

    /// Advance one tick. Acceleration is a fixed per-tick increment, and
    /// velocity survives a respawn.
    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.velocity += OBSTACLE_ACCELERATION;
        self.pos.y += self.velocity / TICKS_PER_SEC as f32;
        if self.pos.y > OBSTACLE_RESPAWN_Y {
            self.pos = Vec2::new(spawn_x(rng), 0.0);
            self.respawns += 1;
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::square(self.pos, OBSTACLE_SIZE)
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        surface.draw_rect(
            self.pos.x.trunc(),
            self.pos.y.trunc(),
            OBSTACLE_SIZE,
            OBSTACLE_SIZE,
            colors::OBSTACLE,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_new_obstacle_defaults() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..200 {
            let o = Obstacle::new(&mut rng);
            assert_eq!(o.pos.y, 0.0);
            assert_eq!(o.velocity, OBSTACLE_START_VELOCITY);
            assert!(o.pos.x >= 0.0 && o.pos.x < OBSTACLE_SPAWN_RANGE as f32);
            assert_eq!(o.pos.x.fract(), 0.0);
        }
    }

    #[test]
    fn test_first_tick_moves_by_velocity_over_tick_rate() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut o = Obstacle::new(&mut rng);
        o.update(&mut rng);
        let expected_v = OBSTACLE_START_VELOCITY + OBSTACLE_ACCELERATION;
        assert!((o.velocity - expected_v).abs() < 1e-4);
        assert!((o.pos.y - expected_v / TICKS_PER_SEC as f32).abs() < 1e-4);
    }

    #[test]
    fn test_respawn_keeps_velocity() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut o = Obstacle::new(&mut rng);
        o.pos.y = OBSTACLE_RESPAWN_Y - 0.5;
        o.velocity = 500.0;
        o.update(&mut rng);

        assert_eq!(o.pos.y, 0.0);
        assert_eq!(o.respawns, 1);
        assert!((o.velocity - 500.01).abs() < 1e-3);
    }

    #[test]
    fn test_just_below_bound_keeps_falling() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut o = Obstacle::new(&mut rng);
        o.velocity = 60.0;
        o.pos.y = OBSTACLE_RESPAWN_Y - 2.0;
        o.update(&mut rng);
        assert!((o.pos.y - (OBSTACLE_RESPAWN_Y - 1.0)).abs() < 1e-2);
        assert_eq!(o.respawns, 0);
    }

    #[test]
    fn test_parked_obstacle_respawns_on_next_tick() {
        let mut rng = Pcg32::seed_from_u64(11);
        let mut o = Obstacle::new(&mut rng);
        o.pos.y = 1000.0;
        o.update(&mut rng);
        assert_eq!(o.pos.y, 0.0);
    }

    proptest! {
        #[test]
        fn prop_y_monotonic_until_respawn(seed in any::<u64>(), ticks in 1usize..2000) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut o = Obstacle::new(&mut rng);
            for _ in 0..ticks {
                let prev_y = o.pos.y;
                let prev_respawns = o.respawns;
                o.update(&mut rng);
                if o.respawns == prev_respawns {
                    prop_assert!(o.pos.y >= prev_y);
                    prop_assert!(o.pos.y <= OBSTACLE_RESPAWN_Y);
                } else {
                    prop_assert_eq!(o.pos.y, 0.0);
                }
            }
        }

        #[test]
        fn prop_velocity_grows_every_tick(seed in any::<u64>(), ticks in 1u32..5000) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut o = Obstacle::new(&mut rng);
            let mut prev = o.velocity;
            for _ in 0..ticks {
                o.update(&mut rng);
                prop_assert!(o.velocity > prev);
                prop_assert!((o.velocity - prev - OBSTACLE_ACCELERATION).abs() < 1e-3);
                prev = o.velocity;
            }
            let expected = OBSTACLE_START_VELOCITY as f64 + ticks as f64 * OBSTACLE_ACCELERATION as f64;
            prop_assert!((o.velocity as f64 - expected).abs() < 0.5);
        }
    }
}
