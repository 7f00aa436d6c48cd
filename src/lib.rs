//! Space Dodge - steer a ship through a rain of falling rocks
//!
//! Core modules:
//! - `sim`: Simulation (ship, obstacles, collisions, session state)
//! - `game_loop`: Fixed timestep loop running a session on its own thread
//! - `renderer`: wgpu rendering pipeline and the double-buffered frame surface
//! - `launcher`: Native window, title screen and start trigger
//! - `settings`: Presentation options

pub mod clock;
pub mod error;
pub mod game_loop;
pub mod input;
pub mod launcher;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod surface;
pub mod timing;
pub mod ui;

pub use error::{LaunchError, RenderError};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Simulation ticks per second
    pub const TICKS_PER_SEC: u32 = 60;
    /// Nanoseconds of simulated time covered by one tick
    pub const NANOS_PER_TICK: f64 = 1_000_000_000.0 / TICKS_PER_SEC as f64;

    /// Arena dimensions (drawable area, in pixels)
    pub const ARENA_WIDTH: f32 = 640.0;
    pub const ARENA_HEIGHT: f32 = 480.0;

    /// Ship defaults
    pub const SHIP_SIZE: f32 = 35.0;
    /// Ship speed along each axis (units/second)
    pub const SHIP_SPEED: f32 = 150.0;
    /// Ship spawn point. Not centered; these are the historical values.
    pub const SHIP_START_X: f32 = 275.0;
    pub const SHIP_START_Y: f32 = 400.0;

    /// Obstacle defaults
    pub const OBSTACLE_SIZE: f32 = 15.0;
    pub const OBSTACLE_COUNT: usize = 10;
    pub const OBSTACLE_START_VELOCITY: f32 = 275.0;
    /// Added to obstacle velocity once per tick, never scaled by elapsed time
    pub const OBSTACLE_ACCELERATION: f32 = 0.01;
    /// Spawn x is drawn from [0, OBSTACLE_SPAWN_RANGE)
    pub const OBSTACLE_SPAWN_RANGE: u32 = 650;
    /// Obstacles respawn once they fall past this y
    pub const OBSTACLE_RESPAWN_Y: f32 = 600.0;

    /// One score point per 100ms survived
    pub const NANOS_PER_POINT: u64 = 100_000_000;
}
