//! Double-buffered frame surface
//!
//! A [`FrameSurface`] lives on the simulation thread and tessellates draw
//! calls into a private back buffer. `present` swaps that buffer into the
//! shared [`FrontBuffer`], which the window thread uploads to the GPU.

use std::sync::{Arc, Mutex, MutexGuard};

use super::font;
use super::vertex::{Vertex, quad};
use crate::surface::{Color, Surface};

#[derive(Debug, Default)]
struct Front {
    vertices: Vec<Vertex>,
    generation: u64,
}

/// Most recently presented frame, shared between threads
#[derive(Debug, Clone, Default)]
pub struct FrontBuffer {
    inner: Arc<Mutex<Front>>,
}

impl FrontBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Front> {
        // A panicking presenter cannot leave the vertex list half-swapped
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Exchange `back` with the front frame
    pub fn swap(&self, back: &mut Vec<Vertex>) {
        let mut front = self.lock();
        std::mem::swap(&mut front.vertices, back);
        front.generation += 1;
    }

    /// Number of frames presented so far
    pub fn generation(&self) -> u64 {
        self.lock().generation
    }

    /// Copy of the front frame
    pub fn snapshot(&self) -> Vec<Vertex> {
        self.lock().vertices.clone()
    }
}

/// [`Surface`] that produces triangle lists in arena pixel coordinates
#[derive(Debug)]
pub struct FrameSurface {
    back: Vec<Vertex>,
    front: FrontBuffer,
}

impl FrameSurface {
    pub fn new(front: FrontBuffer) -> Self {
        Self {
            back: Vec::with_capacity(1024),
            front,
        }
    }

    pub fn front(&self) -> &FrontBuffer {
        &self.front
    }
}

impl Surface for FrameSurface {
    fn clear(&mut self) {
        self.back.clear();
    }

    fn draw_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.back.extend_from_slice(&quad(x, y, w, h, color));
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, font_size: f32, color: Color) {
        for [rx, ry, rw, rh] in font::text_rects(text, x, y, font_size) {
            self.draw_rect(rx, ry, rw, rh, color);
        }
    }

    fn present(&mut self) {
        self.front.swap(&mut self.back);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::colors;

    #[test]
    fn test_nothing_visible_until_present() {
        let front = FrontBuffer::new();
        let mut surface = FrameSurface::new(front.clone());
        surface.clear();
        surface.draw_rect(0.0, 0.0, 10.0, 10.0, colors::SHIP);
        assert!(front.snapshot().is_empty());
        assert_eq!(front.generation(), 0);

        surface.present();
        assert_eq!(front.snapshot().len(), 6);
        assert_eq!(front.generation(), 1);
    }

    #[test]
    fn test_clear_starts_fresh_frame() {
        let front = FrontBuffer::new();
        let mut surface = FrameSurface::new(front.clone());

        surface.clear();
        surface.draw_rect(0.0, 0.0, 10.0, 10.0, colors::SHIP);
        surface.draw_rect(20.0, 0.0, 10.0, 10.0, colors::SHIP);
        surface.present();

        // Back buffer now holds the previous front; clear must drop it
        surface.clear();
        surface.draw_rect(5.0, 5.0, 1.0, 1.0, colors::OBSTACLE);
        surface.present();

        let frame = front.snapshot();
        assert_eq!(frame.len(), 6);
        assert!(frame.iter().all(|v| v.color == colors::OBSTACLE));
    }

    #[test]
    fn test_text_becomes_quads() {
        let front = FrontBuffer::new();
        let mut surface = FrameSurface::new(front.clone());
        surface.clear();
        surface.draw_text("-", 0.0, 7.0, 10.0, colors::SCORE_TEXT);
        surface.present();
        assert_eq!(front.snapshot().len(), 6);
    }

    #[test]
    fn test_present_from_another_thread() {
        let front = FrontBuffer::new();
        let mut surface = FrameSurface::new(front.clone());
        std::thread::spawn(move || {
            surface.clear();
            surface.draw_rect(1.0, 1.0, 1.0, 1.0, colors::SHIP);
            surface.present();
        })
        .join()
        .unwrap();
        assert_eq!(front.generation(), 1);
        assert_eq!(front.snapshot()[0].position, [1.0, 1.0]);
    }
}
