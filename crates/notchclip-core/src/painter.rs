//! Drawing seam between the animation variants and a concrete backend.
//!
//! Variants never touch a canvas directly; they issue primitive draw calls
//! against a [`Painter`]. The browser frontend implements it on top of a 2D
//! canvas context, host tests implement it with a recorder.

use crate::color::Rgba;
use glam::Vec2;

/// Pixel extent of the drawable area. Device-pixel ratio is fixed at 1.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
}

impl Surface {
    /// Negative or non-finite extents collapse to zero.
    pub fn new(width: f32, height: f32) -> Self {
        let sanitize = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        Self {
            width: sanitize(width),
            height: sanitize(height),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

pub trait Painter {
    /// Wipe the whole surface, then flood it with `background` if given.
    fn clear(&mut self, surface: Surface, background: Option<Rgba>);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba);
    /// Called once after a frame's draw calls; backends apply post effects here.
    fn present(&mut self) {}
}
