//! Pixel-grid "water" field with a transient shrink ripple on pointer-down.
//!
//! The field keeps one [`Particle`] per grid cell in row-major order. A resize
//! discards every particle and rebuilds the grid from scratch; the generation
//! counter makes resets issued before the rebuild harmless.

use crate::color::Rgba;
use crate::constants::*;
use crate::error::{ensure_positive, ConfigError};
use crate::painter::{Painter, Surface};
use crate::variant::{FieldVariant, LoopMode, Presentation, ResetTicket, RippleBatch};
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleParams {
    pub cell_size: f32,
    pub color: Rgba,
    pub background: Rgba,
    pub pixelate_block: u32,
    pub ripple_radius: f32,
    pub ripple_depth: f32,
    pub reset_after_ms: u32,
}

impl Default for ParticleParams {
    fn default() -> Self {
        Self {
            cell_size: CELL_SIZE,
            color: Rgba::from_hex(PARTICLE_RGB, PARTICLE_ALPHA),
            background: Rgba::from_hex(WATER_BACKGROUND_RGB, 1.0),
            pixelate_block: PIXELATE_BLOCK,
            ripple_radius: RIPPLE_RADIUS,
            ripple_depth: RIPPLE_DEPTH,
            reset_after_ms: RIPPLE_RESET_MS,
        }
    }
}

impl ParticleParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive("cell_size", self.cell_size as f64)?;
        ensure_positive("ripple_radius", self.ripple_radius as f64)?;
        ensure_positive("pixelate_block", self.pixelate_block as f64)?;
        if !(0.0..=1.0).contains(&self.ripple_depth) {
            return Err(ConfigError::RippleDepthOutOfRange(self.ripple_depth));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    /// Top-left corner; scaling pivots here.
    pub pos: Vec2,
    pub size: f32,
    pub scale: f32,
    pub alpha: f32,
}

/// Column and row counts covering `surface` with `cell_size` squares.
#[inline]
pub fn grid_dims(surface: Surface, cell_size: f32) -> (usize, usize) {
    if surface.is_empty() || cell_size <= 0.0 {
        return (0, 0);
    }
    let cols = (surface.width / cell_size).ceil() as usize;
    let rows = (surface.height / cell_size).ceil() as usize;
    (cols, rows)
}

/// Scale for a particle at `distance` from the pointer, or `None` when it is
/// outside the (exclusive) ripple radius. The pointer's own cell shrinks to
/// `1 - depth`; the scale eases back to 1 towards the rim.
#[inline]
pub fn ripple_scale(distance: f32, radius: f32, depth: f32) -> Option<f32> {
    if distance < radius {
        Some(1.0 - (1.0 - distance / radius) * depth)
    } else {
        None
    }
}

pub struct ParticleField {
    params: ParticleParams,
    cols: usize,
    rows: usize,
    particles: Vec<Particle>,
    generation: u64,
}

impl ParticleField {
    pub fn new(params: ParticleParams) -> Result<Self, ConfigError> {
        params.validate()?;
        Ok(Self {
            params,
            cols: 0,
            rows: 0,
            particles: Vec::new(),
            generation: 0,
        })
    }

    pub fn params(&self) -> &ParticleParams {
        &self.params
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn dims(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Discard every particle and lay out a fresh grid for `surface`.
    pub fn rebuild(&mut self, surface: Surface) {
        let size = self.params.cell_size;
        let (cols, rows) = grid_dims(surface, size);
        self.generation += 1;
        self.cols = cols;
        self.rows = rows;
        self.particles.clear();
        self.particles.reserve(cols * rows);
        for row in 0..rows {
            for col in 0..cols {
                self.particles.push(Particle {
                    pos: Vec2::new(col as f32 * size, row as f32 * size),
                    size,
                    scale: 1.0,
                    alpha: self.params.color.a,
                });
            }
        }
        log::debug!(
            "[particles] rebuilt gen={} cols={} rows={} count={}",
            self.generation,
            cols,
            rows,
            self.particles.len()
        );
    }

    /// Shrink every particle within the ripple radius of `point`.
    pub fn press(&mut self, point: Vec2) -> Option<RippleBatch> {
        let radius = self.params.ripple_radius;
        let depth = self.params.ripple_depth;
        let generation = self.generation;
        let mut tickets = Vec::new();
        for (index, p) in self.particles.iter_mut().enumerate() {
            if let Some(scale) = ripple_scale(p.pos.distance(point), radius, depth) {
                p.scale = scale;
                tickets.push(ResetTicket { generation, index });
            }
        }
        if tickets.is_empty() {
            return None;
        }
        log::debug!(
            "[particles] ripple at ({:.1},{:.1}) touched {}",
            point.x,
            point.y,
            tickets.len()
        );
        Some(RippleBatch {
            due_in_ms: self.params.reset_after_ms,
            tickets,
        })
    }

    /// Restore every ticketed particle still belonging to this generation.
    /// Returns the number of particles restored.
    pub fn restore(&mut self, batch: &RippleBatch) -> usize {
        let mut restored = 0;
        for t in &batch.tickets {
            if t.generation != self.generation {
                continue;
            }
            if let Some(p) = self.particles.get_mut(t.index) {
                p.scale = 1.0;
                restored += 1;
            }
        }
        restored
    }
}

impl FieldVariant for ParticleField {
    fn name(&self) -> &'static str {
        "particle-field"
    }

    fn presentation(&self) -> Presentation {
        Presentation {
            background: Some(self.params.background),
            pixelate: Some(self.params.pixelate_block),
            interactive: true,
            mode: LoopMode::OnDemand,
        }
    }

    fn resize(&mut self, surface: Surface) {
        self.rebuild(surface);
    }

    fn draw(&mut self, painter: &mut dyn Painter, surface: Surface, _time: f64) {
        painter.clear(surface, Some(self.params.background));
        let color = self.params.color;
        for p in &self.particles {
            let side = p.size * p.scale;
            painter.fill_rect(p.pos, Vec2::splat(side), color.with_alpha(p.alpha));
        }
    }

    fn pointer_down(&mut self, point: Vec2) -> Option<RippleBatch> {
        self.press(point)
    }

    fn release(&mut self, batch: &RippleBatch) -> bool {
        self.restore(batch) > 0
    }
}
