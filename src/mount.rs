use crate::dom;
use crate::env::{WebEnv, WebRenderer};
use crate::paint::CanvasPainter;
use notchclip_core::{FieldVariant, GridLines, GridParams, ParticleField, ParticleParams};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

trait MountedLayer {
    fn unmount(&self);
    fn is_running(&self) -> bool;
    fn frames(&self) -> u64;
}

impl<V: FieldVariant + 'static> MountedLayer for Rc<RefCell<WebRenderer<V>>> {
    fn unmount(&self) {
        match self.try_borrow_mut() {
            Ok(mut r) => r.unmount(),
            Err(_) => log::warn!("[mount] unmount while renderer busy; skipped"),
        }
    }

    fn is_running(&self) -> bool {
        self.try_borrow().map(|r| r.is_running()).unwrap_or(false)
    }

    fn frames(&self) -> u64 {
        self.try_borrow().map(|r| r.frames_drawn()).unwrap_or(0)
    }
}

/// JS-owned handle to a mounted background. Freeing it unmounts the layer.
#[wasm_bindgen]
pub struct BackgroundHandle {
    layer: Box<dyn MountedLayer>,
}

#[wasm_bindgen]
impl BackgroundHandle {
    /// Stop the frame loop and detach all listeners. Idempotent.
    pub fn unmount(&self) {
        self.layer.unmount();
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.layer.is_running()
    }

    #[wasm_bindgen(getter)]
    pub fn frames(&self) -> f64 {
        self.layer.frames() as f64
    }
}

impl Drop for BackgroundHandle {
    fn drop(&mut self) {
        self.layer.unmount();
    }
}

fn mount_layer<V: FieldVariant + 'static>(
    canvas_id: &str,
    variant: V,
) -> anyhow::Result<BackgroundHandle> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, canvas_id)?;
    let painter = CanvasPainter::new(canvas)?;
    let renderer = Rc::new_cyclic(|weak| {
        let env = WebEnv::new(window, document, painter, weak.clone());
        RefCell::new(WebRenderer::mount(env, variant))
    });
    Ok(BackgroundHandle {
        layer: Box::new(renderer),
    })
}

fn mount_or_skip<V: FieldVariant + 'static>(
    canvas_id: &str,
    variant: anyhow::Result<V>,
) -> Option<BackgroundHandle> {
    match variant.and_then(|v| mount_layer(canvas_id, v)) {
        Ok(handle) => Some(handle),
        Err(e) => {
            log::warn!("[mount] #{} not mounted: {:?}", canvas_id, e);
            None
        }
    }
}

/// Mount the scrolling grid-line background on the canvas with `canvas_id`.
/// Returns `undefined` when the canvas is missing or has no 2D context.
#[wasm_bindgen]
pub fn mount_grid_background(canvas_id: &str) -> Option<BackgroundHandle> {
    let variant = GridLines::new(GridParams::default()).map_err(anyhow::Error::from);
    mount_or_skip(canvas_id, variant)
}

/// Mount the pixelated water background on the canvas with `canvas_id`.
#[wasm_bindgen]
pub fn mount_water_background(canvas_id: &str) -> Option<BackgroundHandle> {
    let variant = ParticleField::new(ParticleParams::default()).map_err(anyhow::Error::from);
    mount_or_skip(canvas_id, variant)
}
