//! Presentation settings
//!
//! Gameplay tuning lives in `consts`; this only covers how the game is shown.

use serde::{Deserialize, Serialize};
use winit::dpi::LogicalSize;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Window client area, in logical pixels
    pub window_width: u32,
    pub window_height: u32,
    /// Window title on the title screen
    pub launcher_title: String,
    /// Window title once a session is running
    pub game_title: String,
    /// Sync presentation to the display refresh
    pub vsync: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: 640,
            window_height: 480,
            launcher_title: "SPACE DODGE : How long can you survive?".to_string(),
            game_title: "Controls: Use the arrow keys for movement".to_string(),
            vsync: true,
        }
    }
}

impl Settings {
    pub fn window_size(&self) -> LogicalSize<u32> {
        LogicalSize::new(self.window_width, self.window_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH};

    #[test]
    fn test_default_window_matches_arena() {
        let settings = Settings::default();
        assert_eq!(settings.window_width as f32, ARENA_WIDTH);
        assert_eq!(settings.window_height as f32, ARENA_HEIGHT);
        assert_eq!(settings.window_size(), LogicalSize::new(640, 480));
        assert!(settings.vsync);
    }
}
