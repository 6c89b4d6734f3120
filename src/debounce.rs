use std::time::Duration;

/// Quiet period before a search box value is acted on. The live search
/// script is rendered with this window.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// In-process form of the browser's debounce rule: bursts collapse into the
/// last value once input has been quiet for `window`. Time is passed in by
/// the caller.
#[cfg(test)]
#[derive(Debug)]
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<(T, std::time::Instant)>,
}

#[cfg(test)]
impl<T> Debouncer<T> {
    pub fn new(window: Duration) -> Self {
        Debouncer {
            window,
            pending: None,
        }
    }

    /// Record an input event. Any earlier pending value is dropped and the
    /// quiet period restarts.
    pub fn push(&mut self, value: T, now: std::time::Instant) {
        self.pending = Some((value, now));
    }

    /// When the pending value becomes due, if there is one.
    pub fn deadline(&self) -> Option<std::time::Instant> {
        self.pending.as_ref().map(|(_, at)| *at + self.window)
    }

    /// Take the pending value if the quiet period has elapsed.
    pub fn poll(&mut self, now: std::time::Instant) -> Option<T> {
        match self.deadline() {
            Some(due) if now >= due => self.pending.take().map(|(v, _)| v),
            _ => None,
        }
    }
}
