use crate::input::{viewport_extent, ClientRect};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn canvas_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    let el = document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?;
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not a canvas: {:?}", id, e))
}

/// Detached canvas used as an intermediate buffer.
pub fn create_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

#[inline]
pub fn viewport(window: &web::Window) -> (f32, f32) {
    let w = window.inner_width().ok().and_then(|v| v.as_f64());
    let h = window.inner_height().ok().and_then(|v| v.as_f64());
    viewport_extent(w, h)
}

#[inline]
pub fn client_rect(canvas: &web::HtmlCanvasElement) -> ClientRect {
    let rect = canvas.get_bounding_client_rect();
    ClientRect {
        left: rect.left() as f32,
        top: rect.top() as f32,
        width: rect.width() as f32,
        height: rect.height() as f32,
    }
}

#[inline]
pub fn set_canvas_size(canvas: &web::HtmlCanvasElement, width: u32, height: u32) {
    if canvas.width() != width {
        canvas.set_width(width);
    }
    if canvas.height() != height {
        canvas.set_height(height);
    }
}
