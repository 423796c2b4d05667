// Fake host used by the lifecycle tests: records every frame request,
// listener and reset timer so teardown can be checked by counting.

#![allow(dead_code)]

use glam::Vec2;
use notchclip_core::{
    Environment, FieldRenderer, FieldVariant, HostEvent, Painter, Presentation, Rgba, RippleBatch,
    Surface,
};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear(Option<Rgba>),
    Line { from: Vec2, to: Vec2, color: Rgba },
    Circle { center: Vec2, radius: f32, color: Rgba },
    Rect { origin: Vec2, size: Vec2, color: Rgba },
    Present,
}

#[derive(Default)]
pub struct RecordingPainter {
    pub ops: Vec<DrawOp>,
}

impl RecordingPainter {
    pub fn lines(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Line { .. }))
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Circle { .. }))
    }

    pub fn rects(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Rect { .. }))
    }

    pub fn presents(&self) -> usize {
        self.ops.iter().filter(|op| **op == DrawOp::Present).count()
    }
}

impl Painter for RecordingPainter {
    fn clear(&mut self, _surface: Surface, background: Option<Rgba>) {
        self.ops.push(DrawOp::Clear(background));
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, _width: f32, color: Rgba) {
        self.ops.push(DrawOp::Line { from, to, color });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            color,
        });
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba) {
        self.ops.push(DrawOp::Rect {
            origin,
            size,
            color,
        });
    }

    fn present(&mut self) {
        self.ops.push(DrawOp::Present);
    }
}

#[derive(Default)]
pub struct FakeEnv {
    pub viewport: (f32, f32),
    pub now_ms: f64,
    pub painter: RecordingPainter,
    pub presentation: Option<Presentation>,
    pub surfaces: Vec<Surface>,

    pub next_frame_id: u32,
    pub outstanding_frames: Vec<u32>,
    pub frames_requested: u32,
    pub frames_cancelled: u32,
    /// Number of upcoming frame requests the host refuses.
    pub refuse_frames: u32,

    pub next_listener_id: u32,
    pub active_listeners: Vec<(u32, HostEvent)>,
    pub listens: u32,
    pub unlistens: u32,

    pub timers: Vec<(f64, RippleBatch)>,
    pub released: u32,
}

impl FakeEnv {
    pub fn with_viewport(width: f32, height: f32) -> Self {
        Self {
            viewport: (width, height),
            ..Self::default()
        }
    }

    pub fn is_listening(&self, event: HostEvent) -> bool {
        self.active_listeners.iter().any(|(_, e)| *e == event)
    }
}

impl Environment for FakeEnv {
    type FrameHandle = u32;
    type ListenerHandle = u32;
    type Painter = RecordingPainter;

    fn viewport(&self) -> (f32, f32) {
        self.viewport
    }

    fn configure(&mut self, presentation: &Presentation) {
        self.presentation = Some(*presentation);
    }

    fn resize_surface(&mut self, surface: Surface) {
        self.surfaces.push(surface);
    }

    fn request_frame(&mut self) -> Option<u32> {
        self.frames_requested += 1;
        if self.refuse_frames > 0 {
            self.refuse_frames -= 1;
            return None;
        }
        self.next_frame_id += 1;
        self.outstanding_frames.push(self.next_frame_id);
        Some(self.next_frame_id)
    }

    fn cancel_frame(&mut self, handle: u32) {
        self.frames_cancelled += 1;
        self.outstanding_frames.retain(|id| *id != handle);
    }

    fn listen(&mut self, event: HostEvent) -> u32 {
        self.next_listener_id += 1;
        self.listens += 1;
        self.active_listeners.push((self.next_listener_id, event));
        self.next_listener_id
    }

    fn unlisten(&mut self, handle: u32) {
        self.unlistens += 1;
        self.active_listeners.retain(|(id, _)| *id != handle);
    }

    fn schedule_reset(&mut self, batch: RippleBatch) {
        let due = self.now_ms + batch.due_in_ms as f64;
        self.timers.push((due, batch));
    }

    fn painter(&mut self) -> &mut RecordingPainter {
        &mut self.painter
    }

    fn release_surface(&mut self) {
        self.released += 1;
    }
}

/// Drives a renderer the way a browser would: one outstanding frame request
/// is served per `pump`, timers fire when the fake clock passes them. Frame
/// timestamps run on their own clock so pumping never fires a timer.
pub struct Harness<V: FieldVariant> {
    pub renderer: FieldRenderer<FakeEnv, V>,
    frame_ms: f64,
}

impl<V: FieldVariant> Harness<V> {
    pub fn mount(width: f32, height: f32, variant: V) -> Self {
        Self::mount_in(FakeEnv::with_viewport(width, height), variant)
    }

    pub fn mount_in(env: FakeEnv, variant: V) -> Self {
        Self {
            renderer: FieldRenderer::mount(env, variant),
            frame_ms: 0.0,
        }
    }

    pub fn env(&self) -> &FakeEnv {
        self.renderer.env()
    }

    pub fn env_mut(&mut self) -> &mut FakeEnv {
        self.renderer.env_mut()
    }

    /// Serve the oldest outstanding frame request, if any, one 60 Hz refresh
    /// after the previous one. Returns whether a callback ran.
    pub fn pump(&mut self) -> bool {
        let env = self.renderer.env_mut();
        if env.outstanding_frames.is_empty() {
            return false;
        }
        env.outstanding_frames.remove(0);
        self.frame_ms += 1000.0 / 60.0;
        self.renderer.on_frame(self.frame_ms);
        true
    }

    pub fn pump_n(&mut self, n: usize) -> usize {
        (0..n).filter(|_| self.pump()).count()
    }

    /// Advance the clock by `ms`, firing every timer that comes due.
    pub fn advance(&mut self, ms: f64) {
        let env = self.renderer.env_mut();
        env.now_ms += ms;
        let now = env.now_ms;
        let (due, pending): (Vec<_>, Vec<_>) =
            env.timers.drain(..).partition(|(at, _)| *at <= now);
        env.timers = pending;
        for (_, batch) in due {
            self.renderer.on_reset(&batch);
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.renderer.env_mut().viewport = (width, height);
        self.renderer.on_resize();
    }
}
