use crate::color::Rgba;
use crate::painter::{Painter, Surface};
use glam::Vec2;

/// How the renderer paces redraws.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopMode {
    /// Redraw every display refresh until stopped.
    Continuous,
    /// Redraw only after something invalidated the picture.
    OnDemand,
}

/// Host-facing presentation of a layer: what the backend must set up before
/// the first frame, independent of what the variant draws.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Presentation {
    pub background: Option<Rgba>,
    /// Block size of the pixelation post-process, if any.
    pub pixelate: Option<u32>,
    /// Whether the layer receives pointer events.
    pub interactive: bool,
    pub mode: LoopMode,
}

/// Identifies one particle to restore, scoped to the field generation that
/// issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ResetTicket {
    pub generation: u64,
    pub index: usize,
}

/// Particles disturbed by one pointer-down, all due back at the same time.
#[derive(Clone, Debug, PartialEq)]
pub struct RippleBatch {
    pub due_in_ms: u32,
    pub tickets: Vec<ResetTicket>,
}

/// One interchangeable behavior of the animated field renderer.
pub trait FieldVariant {
    fn name(&self) -> &'static str;

    fn presentation(&self) -> Presentation;

    /// Adopt a new surface extent.
    fn resize(&mut self, surface: Surface);

    /// Draw one frame at animation time `time` (seconds).
    fn draw(&mut self, painter: &mut dyn Painter, surface: Surface, time: f64);

    fn pointer_down(&mut self, _point: Vec2) -> Option<RippleBatch> {
        None
    }

    /// Apply a due reset batch; returns whether anything visible changed.
    fn release(&mut self, _batch: &RippleBatch) -> bool {
        false
    }
}
