use crate::camera::Camera;
use crate::graph::SceneGraph;
use crate::render::RenderTarget;

/// Flags shared between the input dispatcher (writer) and the frame
/// driver (reader). Owned by the application context; there is exactly
/// one writer, the event-loop thread.
#[derive(Debug, Clone, Copy)]
pub struct RunState {
    looping: bool,
    active: bool,
}

impl RunState {
    pub fn new() -> Self {
        Self {
            looping: true,
            active: false,
        }
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Stop rescheduling. Terminal: nothing sets the flag back.
    pub fn cancel(&mut self) {
        self.looping = false;
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

impl Default for RunState {
    fn default() -> Self {
        Self::new()
    }
}

/// Loop phase. `Stopped` is terminal within a process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Stopped,
}

/// What the host should do after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Schedule the next frame.
    Continue,
    /// Final frame submitted; do not reschedule.
    Finished,
    /// The driver had already stopped; nothing was submitted.
    Idle,
}

/// Cooperative frame driver: the host calls `tick` once per redraw
/// callback and yields back to its scheduler between calls. Cancellation
/// is observed at the scheduling check, so exactly one frame is submitted
/// after the cancelling event.
#[derive(Debug)]
pub struct FrameDriver {
    phase: Phase,
    frames_submitted: u64,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self {
            phase: Phase::Running,
            frames_submitted: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn frames_submitted(&self) -> u64 {
        self.frames_submitted
    }

    /// Run one frame: apply the spin mutation while the activate flag is
    /// held, submit the scene, and report whether to reschedule.
    pub fn tick(
        &mut self,
        state: &RunState,
        graph: &mut SceneGraph,
        camera: &Camera,
        target: &mut dyn RenderTarget,
    ) -> Tick {
        if self.phase == Phase::Stopped {
            return Tick::Idle;
        }

        if state.is_active() {
            graph.advance_spin();
        }

        match target.submit(graph, camera) {
            Ok(()) => self.frames_submitted += 1,
            // A dropped frame is not fatal; the surface usually recovers
            // on the next present.
            Err(err) => log::error!("frame submit failed: {err}"),
        }

        if state.is_looping() {
            Tick::Continue
        } else {
            self.phase = Phase::Stopped;
            Tick::Finished
        }
    }
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new()
    }
}
