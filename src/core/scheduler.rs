use super::background::paint_background;
use super::connections::ConnectionRenderer;
use super::field::PointField;
use super::pointer::PointerState;
use super::surface::DrawSurface;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchedulerState {
    Running,
    Paused,
}

/// What the host should do right after `start`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Startup {
    /// Request the first frame and keep going.
    Animate,
    /// Reduced motion: render once, never request frames.
    StaticFrame,
}

/// Outcome of a visibility change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility<H> {
    /// Stopped; cancel this outstanding frame request if there is one.
    Cancel(Option<H>),
    /// Running again; request a frame if `wants_frame` says so.
    Resume,
    Unchanged,
}

/// Drives one tick per display refresh and owns the time counter.
///
/// `H` is the host's frame-request handle (`requestAnimationFrame` id in the
/// browser). At most one request is tracked; it is cleared when the frame
/// fires and handed back for cancellation on pause.
#[derive(Debug)]
pub struct FrameScheduler<H = i32> {
    state: SchedulerState,
    time: u64,
    reduced_motion: bool,
    started: bool,
    pending: Option<H>,
}

impl<H> FrameScheduler<H> {
    pub fn new(reduced_motion: bool) -> Self {
        Self {
            state: SchedulerState::Paused,
            time: 0,
            reduced_motion,
            started: false,
            pending: None,
        }
    }

    pub fn start(&mut self) -> Startup {
        self.started = true;
        if self.reduced_motion {
            self.state = SchedulerState::Paused;
            Startup::StaticFrame
        } else {
            self.state = SchedulerState::Running;
            Startup::Animate
        }
    }

    pub fn set_visible(&mut self, visible: bool) -> Visibility<H> {
        match (visible, self.state) {
            (false, SchedulerState::Running) => {
                self.state = SchedulerState::Paused;
                Visibility::Cancel(self.pending.take())
            }
            (true, SchedulerState::Paused) if self.started && !self.reduced_motion => {
                self.state = SchedulerState::Running;
                Visibility::Resume
            }
            _ => Visibility::Unchanged,
        }
    }

    /// Record an outstanding frame request.
    pub fn arm(&mut self, handle: H) {
        self.pending = Some(handle);
    }

    /// The host invoked the frame callback, consuming the outstanding request.
    pub fn frame_fired(&mut self) {
        self.pending = None;
    }

    /// True when running with no request outstanding.
    pub fn wants_frame(&self) -> bool {
        self.state == SchedulerState::Running && self.pending.is_none()
    }

    /// Advance one tick and render it. Does nothing unless running.
    pub fn tick<S: DrawSurface>(
        &mut self,
        field: &mut PointField,
        renderer: &ConnectionRenderer,
        surface: &mut S,
        pointer: &PointerState,
    ) -> bool {
        if self.state != SchedulerState::Running {
            return false;
        }
        self.time += 1;
        self.render(field, renderer, surface, pointer);
        true
    }

    /// Render one frame at the current time without moving the clock.
    pub fn render_static<S: DrawSurface>(
        &self,
        field: &mut PointField,
        renderer: &ConnectionRenderer,
        surface: &mut S,
        pointer: &PointerState,
    ) {
        self.render(field, renderer, surface, pointer);
    }

    fn render<S: DrawSurface>(
        &self,
        field: &mut PointField,
        renderer: &ConnectionRenderer,
        surface: &mut S,
        pointer: &PointerState,
    ) {
        paint_background(
            renderer.config(),
            field.width(),
            field.height(),
            pointer,
            surface,
        );
        field.advance(self.time);
        renderer.draw(field.points(), pointer, self.time, surface);
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn time(&self) -> u64 {
        self.time
    }

    pub fn is_running(&self) -> bool {
        self.state == SchedulerState::Running
    }

    /// Reduced motion is on; every visual change needs an explicit render.
    pub fn is_static(&self) -> bool {
        self.reduced_motion
    }
}
