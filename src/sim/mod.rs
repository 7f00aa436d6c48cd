//! Simulation module
//!
//! All gameplay logic lives here:
//! - Fixed timestep only (one `update` per tick)
//! - Seeded RNG only
//! - Draws through the `Surface` trait, never a concrete renderer

pub mod collision;
pub mod obstacle;
pub mod session;
pub mod ship;

pub use collision::Rect;
pub use obstacle::Obstacle;
pub use session::{Phase, Session, SessionReport, score_for_elapsed};
pub use ship::{Direction, Ship};
