//! Presentation surface abstraction
//!
//! The simulation draws through this trait only. The wgpu-backed
//! implementation lives in `renderer::frame`; `RecordingSurface` keeps the
//! draw calls in memory for tests and headless runs.

/// RGBA color, components in 0..=1
pub type Color = [f32; 4];

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = [0.0, 0.0, 0.0, 1.0];
    pub const SHIP: Color = [0.5, 0.5, 0.5, 1.0];
    pub const OBSTACLE: Color = [1.0, 1.0, 1.0, 1.0];
    pub const SCORE_TEXT: Color = [0.0, 0.0, 1.0, 1.0];
    pub const GAME_OVER_TEXT: Color = [1.0, 0.0, 0.0, 1.0];
    pub const TITLE_TEXT: Color = [1.0, 0.8, 0.2, 1.0];
    pub const BUTTON: Color = [0.15, 0.15, 0.3, 1.0];
    pub const BUTTON_TEXT: Color = [1.0, 1.0, 1.0, 1.0];
}

/// A double-buffered drawing target in arena pixel coordinates
/// (origin top-left, y pointing down).
pub trait Surface {
    /// Discard everything drawn into the back buffer
    fn clear(&mut self);

    /// Fill an axis-aligned rectangle
    fn draw_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);

    /// Draw a single line of text; `y` is the baseline
    fn draw_text(&mut self, text: &str, x: f32, y: f32, font_size: f32, color: Color);

    /// Flip the back buffer to the front
    fn present(&mut self);
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Color,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        font_size: f32,
        color: Color,
    },
    Present,
}

/// Surface that records draw calls instead of rasterizing them
#[derive(Debug, Default)]
pub struct RecordingSurface {
    /// Calls since the last `clear`
    pub back: Vec<DrawCommand>,
    /// Calls of the most recently presented frame
    pub front: Vec<DrawCommand>,
    /// Number of `present` calls so far
    pub frames_presented: u64,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text lines of the last presented frame, in draw order
    pub fn presented_text(&self) -> Vec<&str> {
        self.front
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.back.clear();
        self.back.push(DrawCommand::Clear);
    }

    fn draw_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.back.push(DrawCommand::Rect { x, y, w, h, color });
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, font_size: f32, color: Color) {
        self.back.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            font_size,
            color,
        });
    }

    fn present(&mut self) {
        self.back.push(DrawCommand::Present);
        self.front = std::mem::take(&mut self.back);
        self.frames_presented += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_flips_back_buffer() {
        let mut surface = RecordingSurface::new();
        surface.clear();
        surface.draw_rect(1.0, 2.0, 3.0, 4.0, colors::SHIP);
        surface.draw_text("HI", 0.0, 20.0, 20.0, colors::SCORE_TEXT);
        assert!(surface.front.is_empty());

        surface.present();
        assert!(surface.back.is_empty());
        assert_eq!(surface.front.len(), 4);
        assert_eq!(surface.front[0], DrawCommand::Clear);
        assert_eq!(surface.front[3], DrawCommand::Present);
        assert_eq!(surface.presented_text(), vec!["HI"]);
        assert_eq!(surface.frames_presented, 1);
    }
}
