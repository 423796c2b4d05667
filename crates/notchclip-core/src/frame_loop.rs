use crate::variant::LoopMode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
    Stopping,
}

/// Outcome of a frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Draw this frame; `reschedule` asks the host for the next one.
    Draw { reschedule: bool },
    Halt,
}

/// State machine behind the self-rescheduling frame callback.
///
/// `pending` mirrors whether a frame request is outstanding with the host, so
/// at most one request exists at any time.
#[derive(Clone, Debug)]
pub struct LoopControl {
    state: LoopState,
    mode: LoopMode,
    pending: bool,
    frames: u64,
}

impl LoopControl {
    pub fn new(mode: LoopMode) -> Self {
        Self {
            state: LoopState::Idle,
            mode,
            pending: false,
            frames: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn mode(&self) -> LoopMode {
        self.mode
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Idle -> Running. Returns true when the caller must request a frame.
    pub fn start(&mut self) -> bool {
        if self.state != LoopState::Idle {
            return false;
        }
        self.state = LoopState::Running;
        self.pending = true;
        true
    }

    /// Ask for a redraw. Returns true when the caller must request a frame.
    pub fn invalidate(&mut self) -> bool {
        if self.state != LoopState::Running || self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    pub fn tick(&mut self) -> Tick {
        self.pending = false;
        match self.state {
            LoopState::Running => {
                self.frames += 1;
                let reschedule = self.mode == LoopMode::Continuous;
                self.pending = reschedule;
                Tick::Draw { reschedule }
            }
            LoopState::Stopping => {
                self.state = LoopState::Idle;
                Tick::Halt
            }
            LoopState::Idle => Tick::Halt,
        }
    }

    /// The host refused the frame just asked for; nothing is outstanding.
    pub fn request_failed(&mut self) {
        self.pending = false;
    }

    /// Running -> Stopping. Idempotent: returns false when already stopped.
    pub fn stop(&mut self) -> bool {
        if self.state != LoopState::Running {
            return false;
        }
        self.state = LoopState::Stopping;
        true
    }

    /// Stopping -> Idle once the host has released the outstanding request.
    pub fn settle(&mut self) {
        if self.state == LoopState::Stopping {
            self.state = LoopState::Idle;
            self.pending = false;
        }
    }
}
