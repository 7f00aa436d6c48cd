//! The player's ship

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;
use crate::input::{Key, KeyHandler};
use crate::surface::{Surface, colors};

/// Set of held direction keys, one bit per direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Direction(u8);

impl Direction {
    pub const LEFT: u8 = 1;
    pub const RIGHT: u8 = 2;
    pub const UP: u8 = 4;
    pub const DOWN: u8 = 8;

    fn bit(key: Key) -> u8 {
        match key {
            Key::Left => Self::LEFT,
            Key::Right => Self::RIGHT,
            Key::Up => Self::UP,
            Key::Down => Self::DOWN,
        }
    }

    pub fn press(&mut self, key: Key) {
        self.0 |= Self::bit(key);
    }

    pub fn release(&mut self, key: Key) {
        self.0 &= !Self::bit(key);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.0 & Self::bit(key) != 0
    }

    pub fn bits(&self) -> u8 {
        self.0
    }

    /// Per-axis unit step: each component is -1, 0 or +1. Opposing keys
    /// cancel. Diagonals are left unnormalized, so they cover more ground.
    pub fn axis(&self) -> Vec2 {
        let mut v = Vec2::ZERO;
        if self.is_held(Key::Left) {
            v.x -= 1.0;
        }
        if self.is_held(Key::Right) {
            v.x += 1.0;
        }
        if self.is_held(Key::Up) {
            v.y -= 1.0;
        }
        if self.is_held(Key::Down) {
            v.y += 1.0;
        }
        v
    }
}

/// Player-controlled square
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    /// Top-left corner
    pub pos: Vec2,
    /// Velocity used by the last update, in axis steps
    pub vel: Vec2,
    pub direction: Direction,
}

impl Ship {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
            direction: Direction::default(),
        }
    }

    /// Advance one tick. The ship is not kept inside the arena.
    pub fn update(&mut self) {
        self.vel = self.direction.axis();
        self.pos += self.vel * SHIP_SPEED / TICKS_PER_SEC as f32;
    }

    pub fn rect(&self) -> Rect {
        Rect::square(self.pos, SHIP_SIZE)
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        surface.draw_rect(
            self.pos.x.trunc(),
            self.pos.y.trunc(),
            SHIP_SIZE,
            SHIP_SIZE,
            colors::SHIP,
        );
    }
}

impl KeyHandler for Ship {
    fn on_key_down(&mut self, key: Key) {
        self.direction.press(key);
    }

    fn on_key_up(&mut self, key: Key) {
        self.direction.release(key);
    }
}
