//! Cooperative scheduled delays
//!
//! Replaces engine coroutine timers with an explicit, cancellable task queue.
//! The scheduler is advanced from the frame tick; no threads, no wall clock.
//! Handles are never reused, so a cancelled or superseded delay cannot fire
//! into a later phase.

/// Opaque handle to a pending delay, valid for one scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone)]
struct PendingTimer<E> {
    handle: TimerHandle,
    remaining: f32,
    event: E,
}

/// Single-threaded delay scheduler
///
/// `advance` burns down every pending delay by the frame dt and reports the
/// events whose delays elapsed, in expiry order.
#[derive(Debug, Clone)]
pub struct Scheduler<E> {
    next_handle: u64,
    pending: Vec<PendingTimer<E>>,
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self {
            next_handle: 1,
            pending: Vec::new(),
        }
    }
}

impl<E: Copy> Scheduler<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `event` to fire after `secs` of advanced time
    pub fn schedule_after(&mut self, secs: f32, event: E) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.pending.push(PendingTimer {
            handle,
            remaining: secs.max(0.0),
            event,
        });
        handle
    }

    /// Cancel a pending delay. Returns false if it already fired or was
    /// cancelled earlier.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|t| t.handle != handle);
        self.pending.len() != before
    }

    /// Drop every pending delay (restart / game over)
    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Advance time by `dt`, appending elapsed events to `fired` in expiry
    /// order. Events scheduled while handling a fired event are not advanced
    /// until the next call.
    pub fn advance(&mut self, dt: f32, fired: &mut Vec<E>) {
        for timer in &mut self.pending {
            timer.remaining -= dt;
        }
        let mut elapsed: Vec<&PendingTimer<E>> =
            self.pending.iter().filter(|t| t.remaining <= 0.0).collect();
        // Most-overshot delay expired first
        elapsed.sort_by(|a, b| {
            a.remaining
                .partial_cmp(&b.remaining)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        fired.extend(elapsed.iter().map(|t| t.event));
        self.pending.retain(|t| t.remaining > 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_after_duration() {
        let mut sched = Scheduler::new();
        sched.schedule_after(0.5, "spawn");

        let mut fired = Vec::new();
        sched.advance(0.3, &mut fired);
        assert!(fired.is_empty());

        sched.advance(0.3, &mut fired);
        assert_eq!(fired, vec!["spawn"]);
        assert_eq!(sched.pending_count(), 0);
    }

    #[test]
    fn test_cancel_prevents_firing() {
        let mut sched = Scheduler::new();
        let handle = sched.schedule_after(0.2, "spawn");
        assert!(sched.cancel(handle));
        assert!(!sched.cancel(handle));

        let mut fired = Vec::new();
        sched.advance(1.0, &mut fired);
        assert!(fired.is_empty());
    }

    #[test]
    fn test_cancel_all() {
        let mut sched = Scheduler::new();
        sched.schedule_after(0.1, "a");
        sched.schedule_after(0.2, "b");
        sched.cancel_all();

        let mut fired = Vec::new();
        sched.advance(1.0, &mut fired);
        assert!(fired.is_empty());
        assert_eq!(sched.pending_count(), 0);
    }

    #[test]
    fn test_expiry_order_within_one_advance() {
        let mut sched = Scheduler::new();
        sched.schedule_after(0.8, "late");
        sched.schedule_after(0.2, "early");

        let mut fired = Vec::new();
        sched.advance(1.0, &mut fired);
        assert_eq!(fired, vec!["early", "late"]);
    }

    #[test]
    fn test_handles_are_unique() {
        let mut sched = Scheduler::new();
        let a = sched.schedule_after(0.1, "a");
        let mut fired = Vec::new();
        sched.advance(0.2, &mut fired);

        // A handle from a fired timer never matches a fresh one
        let b = sched.schedule_after(0.1, "b");
        assert_ne!(a, b);
        assert!(!sched.cancel(a));
    }

    #[test]
    fn test_zero_duration_fires_on_next_advance() {
        let mut sched = Scheduler::new();
        sched.schedule_after(0.0, "now");
        let mut fired = Vec::new();
        sched.advance(0.0, &mut fired);
        assert_eq!(fired, vec!["now"]);
    }
}
