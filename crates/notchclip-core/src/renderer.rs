//! The animated field renderer: one owned object per mounted layer.
//!
//! All host handles (the outstanding frame request and every listener) are
//! held here and released exactly once by [`FieldRenderer::unmount`].

use crate::clock::AnimationClock;
use crate::frame_loop::{LoopControl, LoopState, Tick};
use crate::painter::{Painter, Surface};
use crate::variant::{FieldVariant, Presentation, RippleBatch};
use glam::Vec2;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HostEvent {
    Resize,
    PointerDown,
}

/// Everything the renderer needs from its host.
pub trait Environment {
    type FrameHandle;
    type ListenerHandle;
    type Painter: Painter;

    /// Current viewport extent in CSS pixels.
    fn viewport(&self) -> (f32, f32);
    fn configure(&mut self, presentation: &Presentation);
    fn resize_surface(&mut self, surface: Surface);
    /// `None` when the host refused to schedule a frame.
    fn request_frame(&mut self) -> Option<Self::FrameHandle>;
    fn cancel_frame(&mut self, handle: Self::FrameHandle);
    fn listen(&mut self, event: HostEvent) -> Self::ListenerHandle;
    fn unlisten(&mut self, handle: Self::ListenerHandle);
    /// Deliver `batch` back through [`FieldRenderer::on_reset`] once it is due.
    fn schedule_reset(&mut self, batch: RippleBatch);
    fn painter(&mut self) -> &mut Self::Painter;
    /// Drop whatever backs the drawing surface; called once, last, on unmount.
    fn release_surface(&mut self) {}
}

pub struct FieldRenderer<E: Environment, V: FieldVariant> {
    env: E,
    variant: V,
    surface: Surface,
    clock: AnimationClock,
    control: LoopControl,
    frame: Option<E::FrameHandle>,
    listeners: SmallVec<[E::ListenerHandle; 2]>,
    mounted: bool,
}

impl<E: Environment, V: FieldVariant> FieldRenderer<E, V> {
    pub fn mount(mut env: E, mut variant: V) -> Self {
        let presentation = variant.presentation();
        env.configure(&presentation);
        let (w, h) = env.viewport();
        let surface = Surface::new(w, h);
        env.resize_surface(surface);
        variant.resize(surface);

        let mut listeners = SmallVec::new();
        listeners.push(env.listen(HostEvent::Resize));
        if presentation.interactive {
            listeners.push(env.listen(HostEvent::PointerDown));
        }

        log::info!(
            "[mount] {} surface={}x{} mode={:?}",
            variant.name(),
            surface.width,
            surface.height,
            presentation.mode
        );
        let mut renderer = Self {
            env,
            variant,
            surface,
            clock: AnimationClock::new(),
            control: LoopControl::new(presentation.mode),
            frame: None,
            listeners,
            mounted: true,
        };
        if renderer.control.start() {
            renderer.request_frame();
        }
        renderer
    }

    pub fn on_frame(&mut self, timestamp_ms: f64) {
        // The host has consumed the request that invoked us.
        self.frame = None;
        match self.control.tick() {
            Tick::Draw { reschedule } => {
                let time = self.clock.advance(timestamp_ms);
                let surface = self.surface;
                let painter = self.env.painter();
                self.variant.draw(&mut *painter, surface, time);
                painter.present();
                if reschedule {
                    self.request_frame();
                }
            }
            Tick::Halt => {
                log::debug!("[loop] {} halted", self.variant.name());
            }
        }
    }

    pub fn on_resize(&mut self) {
        if !self.mounted {
            return;
        }
        let (w, h) = self.env.viewport();
        let surface = Surface::new(w, h);
        self.surface = surface;
        self.env.resize_surface(surface);
        self.variant.resize(surface);
        self.invalidate();
    }

    pub fn on_pointer_down(&mut self, point: Vec2) {
        if !self.mounted {
            return;
        }
        if let Some(batch) = self.variant.pointer_down(point) {
            self.env.schedule_reset(batch);
            self.invalidate();
        }
    }

    pub fn on_reset(&mut self, batch: &RippleBatch) {
        if !self.mounted {
            return;
        }
        if self.variant.release(batch) {
            self.invalidate();
        }
    }

    /// Stop the loop and release every host handle. Safe to call repeatedly.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.control.stop();
        if let Some(handle) = self.frame.take() {
            self.env.cancel_frame(handle);
        }
        for handle in self.listeners.drain(..) {
            self.env.unlisten(handle);
        }
        self.control.settle();
        self.env.release_surface();
        log::info!(
            "[mount] {} unmounted after {} frames",
            self.variant.name(),
            self.control.frames()
        );
    }

    fn invalidate(&mut self) {
        if self.control.invalidate() {
            self.request_frame();
        }
    }

    // A refused request leaves the loop running with nothing outstanding, so
    // the next resize, press or reset can try again.
    fn request_frame(&mut self) {
        self.frame = self.env.request_frame();
        if self.frame.is_none() {
            log::warn!("[loop] {} frame request refused", self.variant.name());
            self.control.request_failed();
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_running(&self) -> bool {
        self.control.state() == LoopState::Running
    }

    pub fn frames_drawn(&self) -> u64 {
        self.control.frames()
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn variant(&self) -> &V {
        &self.variant
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    pub fn env_mut(&mut self) -> &mut E {
        &mut self.env
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl<E: Environment, V: FieldVariant> Drop for FieldRenderer<E, V> {
    fn drop(&mut self) {
        self.unmount();
    }
}
