//! Title screen with the start button

use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH};
use crate::renderer::font::text_width;
use crate::sim::Rect;
use crate::surface::{Surface, colors};

const TITLE: &str = "SPACE DODGE";
const TAGLINE: &str = "HOW LONG CAN YOU SURVIVE?";
const BUTTON_LABEL: &str = "START";
const PROMPT: &str = "PRESS ENTER TO PLAY";
const CONTROLS: &str = "ARROW KEYS TO MOVE - ESC TO QUIT";

#[derive(Debug, Clone)]
pub struct TitleScreen {
    pub start_button: Rect,
}

impl Default for TitleScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl TitleScreen {
    pub fn new() -> Self {
        let (w, h) = (220.0, 60.0);
        Self {
            start_button: Rect::new((ARENA_WIDTH - w) / 2.0, 250.0, w, h),
        }
    }

    /// Whether an arena-space point lies on the start button
    pub fn hits_start(&self, x: f32, y: f32) -> bool {
        self.start_button.intersects(&Rect::new(x, y, 0.0, 0.0))
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        surface.clear();
        surface.draw_rect(0.0, 0.0, ARENA_WIDTH, ARENA_HEIGHT, colors::BACKGROUND);
        draw_centered(surface, TITLE, 150.0, 60.0, colors::TITLE_TEXT);
        draw_centered(surface, TAGLINE, 200.0, 20.0, colors::SCORE_TEXT);

        let b = &self.start_button;
        surface.draw_rect(b.min.x, b.min.y, b.size.x, b.size.y, colors::BUTTON);
        let label_size = 30.0;
        // Baseline that vertically centers the 7-row glyphs in the button
        let baseline = b.min.y + (b.size.y + label_size * 0.7) / 2.0;
        draw_centered(surface, BUTTON_LABEL, baseline, label_size, colors::BUTTON_TEXT);

        draw_centered(surface, PROMPT, 380.0, 20.0, colors::BUTTON_TEXT);
        draw_centered(surface, CONTROLS, 440.0, 15.0, colors::SHIP);
        surface.present();
    }
}

fn draw_centered(surface: &mut dyn Surface, text: &str, y: f32, size: f32, color: [f32; 4]) {
    let x = (ARENA_WIDTH - text_width(text, size)) / 2.0;
    surface.draw_text(text, x, y, size, color);
}
