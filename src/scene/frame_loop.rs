/// Bookkeeping for a self-rescheduling animation-frame loop.
///
/// The browser side owns the actual callback; this tracks whether the loop
/// is still alive and which request is outstanding so that stopping it can
/// cancel the last one.
#[derive(Debug)]
pub struct LoopState {
    alive: bool,
    pending: Option<i32>,
    frames: u64,
}

impl Default for LoopState {
    fn default() -> Self {
        Self::new()
    }
}

impl LoopState {
    pub fn new() -> Self {
        Self {
            alive: true,
            pending: None,
            frames: 0,
        }
    }

    /// Record the id of a freshly requested frame.
    pub fn scheduled(&mut self, request_id: i32) {
        if self.alive {
            self.pending = Some(request_id);
        }
    }

    /// Called at the top of each frame callback; `false` means the loop has
    /// been stopped and the frame must neither run nor reschedule.
    pub fn begin_frame(&mut self) -> bool {
        self.pending = None;
        if !self.alive {
            return false;
        }
        self.frames += 1;
        true
    }

    /// Stop the loop and hand back the outstanding request to cancel.
    pub fn stop(&mut self) -> Option<i32> {
        self.alive = false;
        self.pending.take()
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn pending(&self) -> Option<i32> {
        self.pending
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
