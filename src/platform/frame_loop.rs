//! Frame scheduling flags for the browser loop
//!
//! At most one animation-frame callback is ever pending. The loop stops on
//! page teardown and after the final game-over frame, and resumes on restart
//! or when the page is shown again.

#[derive(Debug, Clone)]
pub struct FrameLoop {
    running: bool,
    scheduled: bool,
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameLoop {
    pub fn new() -> Self {
        Self {
            running: true,
            scheduled: false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Claim the next frame; returns true if the caller should request one
    pub fn schedule(&mut self) -> bool {
        if !self.running || self.scheduled {
            return false;
        }
        self.scheduled = true;
        true
    }

    /// Called at the top of each frame callback; false means skip the frame
    pub fn begin_frame(&mut self) -> bool {
        self.scheduled = false;
        self.running
    }

    /// Page hidden: pending callbacks become no-ops
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Restart or page shown again; returns true if a frame must be requested
    pub fn resume(&mut self) -> bool {
        self.running = true;
        self.schedule()
    }
}
