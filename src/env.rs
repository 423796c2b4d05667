use crate::constants::{LAYER_Z_INDEX, POINTER_DOWN_EVENT, RESIZE_EVENT};
use crate::dom;
use crate::frame::FrameStats;
use crate::input;
use crate::paint::CanvasPainter;
use crate::style::layer_style;
use glam::Vec2;
use gloo_timers::callback::Timeout;
use notchclip_core::{
    Environment, FieldRenderer, FieldVariant, HostEvent, Presentation, RippleBatch, Surface,
};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type WebRenderer<V> = FieldRenderer<WebEnv, V>;

/// A listener registered by [`WebEnv::listen`]; removing it needs the same
/// target and event name.
#[derive(Clone, Copy, Debug)]
pub struct Listener(HostEvent);

/// Browser host for one background layer.
///
/// The closures only hold a `Weak` to the renderer that owns this env, so a
/// callback arriving after the renderer is gone is a no-op.
pub struct WebEnv {
    window: web::Window,
    document: web::Document,
    painter: CanvasPainter,
    on_frame: Closure<dyn FnMut(f64)>,
    on_resize: Closure<dyn FnMut()>,
    on_pointer_down: Closure<dyn FnMut(web::PointerEvent)>,
    reset_sink: Rc<dyn Fn(RippleBatch)>,
}

impl WebEnv {
    pub fn new<V: FieldVariant + 'static>(
        window: web::Window,
        document: web::Document,
        painter: CanvasPainter,
        renderer: Weak<RefCell<WebRenderer<V>>>,
    ) -> Self {
        let on_frame = {
            let renderer = renderer.clone();
            let mut stats = FrameStats::new("background");
            Closure::wrap(Box::new(move |timestamp: f64| {
                let Some(r) = renderer.upgrade() else {
                    return;
                };
                let Ok(mut r) = r.try_borrow_mut() else {
                    return;
                };
                let before = r.frames_drawn();
                r.on_frame(timestamp);
                if r.frames_drawn() > before {
                    stats.record();
                }
            }) as Box<dyn FnMut(f64)>)
        };

        let on_resize = {
            let renderer = renderer.clone();
            Closure::wrap(Box::new(move || {
                if let Some(r) = renderer.upgrade() {
                    if let Ok(mut r) = r.try_borrow_mut() {
                        r.on_resize();
                    }
                }
            }) as Box<dyn FnMut()>)
        };

        let on_pointer_down = {
            let renderer = renderer.clone();
            let canvas = painter.canvas().clone();
            Closure::wrap(Box::new(move |ev: web::PointerEvent| {
                let Some(r) = renderer.upgrade() else {
                    return;
                };
                let Ok(mut r) = r.try_borrow_mut() else {
                    return;
                };
                let surface = r.surface();
                let point = input::client_to_surface(
                    Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
                    dom::client_rect(&canvas),
                    surface.width,
                    surface.height,
                );
                r.on_pointer_down(point);
            }) as Box<dyn FnMut(_)>)
        };

        let reset_sink: Rc<dyn Fn(RippleBatch)> = Rc::new(move |batch: RippleBatch| {
            if let Some(r) = renderer.upgrade() {
                match r.try_borrow_mut() {
                    Ok(mut r) => r.on_reset(&batch),
                    Err(_) => log::warn!("[particles] reset skipped: renderer busy"),
                }
            }
        });

        Self {
            window,
            document,
            painter,
            on_frame,
            on_resize,
            on_pointer_down,
            reset_sink,
        }
    }

    fn listener_fn(&self, event: HostEvent) -> &js_sys::Function {
        match event {
            HostEvent::Resize => self.on_resize.as_ref().unchecked_ref(),
            HostEvent::PointerDown => self.on_pointer_down.as_ref().unchecked_ref(),
        }
    }

    fn target(&self, event: HostEvent) -> &web::EventTarget {
        match event {
            HostEvent::Resize => self.window.as_ref(),
            HostEvent::PointerDown => self.painter.canvas().as_ref(),
        }
    }
}

#[inline]
fn event_name(event: HostEvent) -> &'static str {
    match event {
        HostEvent::Resize => RESIZE_EVENT,
        HostEvent::PointerDown => POINTER_DOWN_EVENT,
    }
}

impl Environment for WebEnv {
    type FrameHandle = i32;
    type ListenerHandle = Listener;
    type Painter = CanvasPainter;

    fn viewport(&self) -> (f32, f32) {
        dom::viewport(&self.window)
    }

    fn configure(&mut self, presentation: &Presentation) {
        let _ = self.painter.canvas().set_attribute(
            "style",
            &layer_style(LAYER_Z_INDEX, presentation.interactive),
        );
        if let Some(block) = presentation.pixelate {
            self.painter.enable_pixelate(&self.document, block);
        }
    }

    fn resize_surface(&mut self, surface: Surface) {
        self.painter
            .resize(surface.width.ceil() as u32, surface.height.ceil() as u32);
    }

    fn request_frame(&mut self) -> Option<i32> {
        match self
            .window
            .request_animation_frame(self.on_frame.as_ref().unchecked_ref())
        {
            Ok(id) => Some(id),
            Err(e) => {
                log::warn!("[loop] requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: i32) {
        let _ = self.window.cancel_animation_frame(handle);
    }

    fn listen(&mut self, event: HostEvent) -> Listener {
        let _ = self
            .target(event)
            .add_event_listener_with_callback(event_name(event), self.listener_fn(event));
        Listener(event)
    }

    fn unlisten(&mut self, handle: Listener) {
        let Listener(event) = handle;
        let _ = self
            .target(event)
            .remove_event_listener_with_callback(event_name(event), self.listener_fn(event));
    }

    fn schedule_reset(&mut self, batch: RippleBatch) {
        let sink = self.reset_sink.clone();
        Timeout::new(batch.due_in_ms, move || sink(batch)).forget();
    }

    fn painter(&mut self) -> &mut CanvasPainter {
        &mut self.painter
    }

    fn release_surface(&mut self) {
        self.painter.release();
    }
}
