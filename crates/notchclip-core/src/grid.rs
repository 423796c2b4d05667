//! Scrolling translucent grid with pulsing intersection dots.
//!
//! Nothing is retained between frames: every line and dot is recomputed from
//! the animation time and its loop position.

use crate::color::Rgba;
use crate::constants::*;
use crate::error::{ensure_positive, ConfigError};
use crate::painter::{Painter, Surface};
use crate::variant::{FieldVariant, LoopMode, Presentation};
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub struct GridParams {
    pub grid_size: f32,
    pub scroll_x_per_sec: f64,
    pub scroll_y_per_sec: f64,
    pub ink: Rgba,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            scroll_x_per_sec: GRID_SCROLL_X_PER_SEC,
            scroll_y_per_sec: GRID_SCROLL_Y_PER_SEC,
            ink: Rgba::from_hex(GRID_INK_RGB, 1.0),
        }
    }
}

impl GridParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive("grid_size", self.grid_size as f64)?;
        ensure_positive("scroll_x_per_sec", self.scroll_x_per_sec)?;
        ensure_positive("scroll_y_per_sec", self.scroll_y_per_sec)?;
        Ok(())
    }

    /// Seconds after which the horizontal and vertical scroll repeat.
    pub fn scroll_periods(&self) -> (f64, f64) {
        let g = self.grid_size as f64;
        (g / self.scroll_x_per_sec, g / self.scroll_y_per_sec)
    }
}

/// Scroll offsets in `[0, grid_size)` for animation time `time`.
#[inline]
pub fn scroll_offset(params: &GridParams, time: f64) -> (f32, f32) {
    let g = params.grid_size;
    // Narrowing to f32 can round a value just under `g` up to `g`.
    let wrap = |distance: f64| {
        let v = distance.rem_euclid(g as f64) as f32;
        if v >= g {
            0.0
        } else {
            v
        }
    };
    (
        wrap(time * params.scroll_x_per_sec),
        wrap(time * params.scroll_y_per_sec),
    )
}

#[inline]
pub fn vertical_line_alpha(time: f64, x: f32) -> f32 {
    let phase = time + x as f64 * GRID_PHASE_PER_PX;
    GRID_LINE_ALPHA_BASE + phase.sin() as f32 * GRID_LINE_ALPHA_SWING
}

#[inline]
pub fn horizontal_line_alpha(time: f64, y: f32) -> f32 {
    let phase = time + y as f64 * GRID_PHASE_PER_PX;
    GRID_LINE_ALPHA_BASE + phase.cos() as f32 * GRID_LINE_ALPHA_SWING
}

#[inline]
pub fn dot_radius(time: f64, x: f32, y: f32) -> f32 {
    let phase = time + (x as f64 + y as f64) * GRID_PHASE_PER_PX;
    GRID_DOT_RADIUS_BASE + phase.sin() as f32 * GRID_DOT_RADIUS_SWING
}

/// Line positions along one axis: start one cell before the edge and stop
/// once a line would fall a full cell past `extent`.
pub fn line_positions(offset: f32, grid_size: f32, extent: f32) -> impl Iterator<Item = f32> {
    let start = -grid_size + offset;
    let end = extent + grid_size;
    let count = if grid_size > 0.0 && end > start {
        ((end - start) / grid_size).ceil() as usize
    } else {
        0
    };
    (0..count)
        .map(move |i| start + i as f32 * grid_size)
        .filter(move |p| *p < end)
}

pub struct GridLines {
    params: GridParams,
}

impl GridLines {
    pub fn new(params: GridParams) -> Result<Self, ConfigError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &GridParams {
        &self.params
    }
}

impl FieldVariant for GridLines {
    fn name(&self) -> &'static str {
        "grid-lines"
    }

    fn presentation(&self) -> Presentation {
        Presentation {
            background: None,
            pixelate: None,
            interactive: false,
            mode: LoopMode::Continuous,
        }
    }

    // Lines are laid out from the surface passed to each draw.
    fn resize(&mut self, _surface: Surface) {}

    fn draw(&mut self, painter: &mut dyn Painter, surface: Surface, time: f64) {
        painter.clear(surface, None);
        if surface.is_empty() {
            return;
        }
        let g = self.params.grid_size;
        let ink = self.params.ink;
        let (ox, oy) = scroll_offset(&self.params, time);
        let xs: Vec<f32> = line_positions(ox, g, surface.width).collect();
        let ys: Vec<f32> = line_positions(oy, g, surface.height).collect();

        for &x in &xs {
            painter.stroke_line(
                Vec2::new(x, 0.0),
                Vec2::new(x, surface.height),
                GRID_LINE_WIDTH,
                ink.with_alpha(vertical_line_alpha(time, x)),
            );
        }
        for &y in &ys {
            painter.stroke_line(
                Vec2::new(0.0, y),
                Vec2::new(surface.width, y),
                GRID_LINE_WIDTH,
                ink.with_alpha(horizontal_line_alpha(time, y)),
            );
        }

        let dot = ink.with_alpha(GRID_DOT_ALPHA);
        for &x in &xs {
            for &y in &ys {
                painter.fill_circle(Vec2::new(x, y), dot_radius(time, x, y), dot);
            }
        }
    }
}
