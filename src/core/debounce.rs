/// Keeps at most one pending timer so a burst of events collapses into one call.
///
/// `H` is whatever the host hands back for a scheduled timer (a `setTimeout`
/// id in the browser).
#[derive(Debug)]
pub struct Debouncer<H> {
    pub delay_ms: i32,
    pending: Option<H>,
}

impl<H> Debouncer<H> {
    pub fn new(delay_ms: i32) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    /// Track a newly scheduled timer; returns the one it supersedes, which the
    /// caller must cancel.
    pub fn replace(&mut self, handle: H) -> Option<H> {
        self.pending.replace(handle)
    }

    /// The timer ran; nothing is pending any more.
    pub fn fire(&mut self) -> Option<H> {
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
