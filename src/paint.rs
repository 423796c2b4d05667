use crate::dom;
use crate::style::{css_color, pixelated_extent};
use glam::Vec2;
use notchclip_core::{Painter, Rgba, Surface};
use std::f64::consts::TAU;
use web_sys as web;

/// Offscreen buffers for the pixelation pass: the scene is drawn at full
/// size, squeezed into `small` at one texel per block, then blown back up
/// without smoothing.
struct PixelateBuffers {
    block: u32,
    scene: web::HtmlCanvasElement,
    scene_ctx: web::CanvasRenderingContext2d,
    small: web::HtmlCanvasElement,
    small_ctx: web::CanvasRenderingContext2d,
}

impl PixelateBuffers {
    fn new(document: &web::Document, block: u32) -> anyhow::Result<Self> {
        let scene = dom::create_canvas(document)?;
        let scene_ctx = dom::context_2d(&scene)?;
        let small = dom::create_canvas(document)?;
        let small_ctx = dom::context_2d(&small)?;
        Ok(Self {
            block: block.max(1),
            scene,
            scene_ctx,
            small,
            small_ctx,
        })
    }
}

pub struct CanvasPainter {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    pixelate: Option<PixelateBuffers>,
    width: u32,
    height: u32,
    last_fill: Option<Rgba>,
}

impl CanvasPainter {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = dom::context_2d(&canvas)?;
        Ok(Self {
            width: canvas.width(),
            height: canvas.height(),
            canvas,
            ctx,
            pixelate: None,
            last_fill: None,
        })
    }

    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }

    /// Route drawing through the pixelation buffers. Falls back to direct
    /// drawing when the buffers cannot be created.
    pub fn enable_pixelate(&mut self, document: &web::Document, block: u32) {
        match PixelateBuffers::new(document, block) {
            Ok(buffers) => {
                self.pixelate = Some(buffers);
                self.resize(self.width, self.height);
            }
            Err(e) => log::warn!("[paint] pixelation disabled: {:?}", e),
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        dom::set_canvas_size(&self.canvas, width, height);
        if let Some(px) = &self.pixelate {
            dom::set_canvas_size(&px.scene, width, height);
            let (sw, sh) = pixelated_extent(width, height, px.block);
            dom::set_canvas_size(&px.small, sw, sh);
        }
        // Resizing a canvas resets its context state.
        self.last_fill = None;
    }

    /// Wipe the visible canvas and free the offscreen buffers.
    pub fn release(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.width as f64, self.height as f64);
        self.pixelate = None;
        self.resize(0, 0);
    }

    #[inline]
    fn target(&self) -> &web::CanvasRenderingContext2d {
        match &self.pixelate {
            Some(px) => &px.scene_ctx,
            None => &self.ctx,
        }
    }

    fn set_fill(&mut self, color: Rgba) {
        if self.last_fill != Some(color) {
            self.target().set_fill_style_str(&css_color(color));
            self.last_fill = Some(color);
        }
    }
}

impl Painter for CanvasPainter {
    fn clear(&mut self, surface: Surface, background: Option<Rgba>) {
        let (w, h) = (surface.width as f64, surface.height as f64);
        self.target().clear_rect(0.0, 0.0, w, h);
        if let Some(bg) = background {
            self.set_fill(bg);
            self.target().fill_rect(0.0, 0.0, w, h);
        }
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        let ctx = self.target();
        ctx.set_stroke_style_str(&css_color(color));
        ctx.set_line_width(width as f64);
        ctx.begin_path();
        ctx.move_to(from.x as f64, from.y as f64);
        ctx.line_to(to.x as f64, to.y as f64);
        ctx.stroke();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.set_fill(color);
        let ctx = self.target();
        ctx.begin_path();
        let _ = ctx.arc(
            center.x as f64,
            center.y as f64,
            radius.max(0.0) as f64,
            0.0,
            TAU,
        );
        ctx.fill();
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba) {
        self.set_fill(color);
        self.target()
            .fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
    }

    fn present(&mut self) {
        let Some(px) = &self.pixelate else {
            return;
        };
        let (w, h) = (self.width as f64, self.height as f64);
        let (sw, sh) = (px.small.width() as f64, px.small.height() as f64);
        let block = px.block as f64;
        px.small_ctx.set_image_smoothing_enabled(false);
        px.small_ctx.clear_rect(0.0, 0.0, sw, sh);
        let _ = px.small_ctx.draw_image_with_html_canvas_element_and_dw_and_dh(
            &px.scene,
            0.0,
            0.0,
            w / block,
            h / block,
        );
        self.ctx.set_image_smoothing_enabled(false);
        self.ctx.clear_rect(0.0, 0.0, w, h);
        let _ = self.ctx.draw_image_with_html_canvas_element_and_dw_and_dh(
            &px.small,
            0.0,
            0.0,
            sw * block,
            sh * block,
        );
    }
}
