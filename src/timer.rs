//! Auto-dismiss timers.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use toastie_core::{Toast, ToastId};

/// A pending auto-dismiss for one toast.
///
/// Timers don’t run on their own; whoever owns one checks [`DismissTimer::is_due`] when the
/// clock moves. Cancellation is shared with every [`TimerHandle`], and dropping the timer
/// cancels it.
#[derive(Debug)]
pub struct DismissTimer {
    toast: ToastId,
    deadline: Instant,
    cancelled: Arc<AtomicBool>,
}

/// Observes whether a timer has been cancelled.
#[derive(Debug, Clone)]
pub struct TimerHandle(Arc<AtomicBool>);

impl TimerHandle {
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

impl DismissTimer {
    /// Arms a timer for `toast` starting at `now`.
    ///
    /// Returns None for toasts that don’t auto-dismiss.
    pub fn arm(toast: &Toast, now: Instant) -> Option<DismissTimer> {
        if !toast.auto_dismisses() {
            return None;
        }
        // too far out to ever fire
        let deadline = now.checked_add(toast.duration())?;
        tracing::trace!(toast = %toast.id(), ?deadline, "armed dismiss timer");
        Some(DismissTimer {
            toast: toast.id(),
            deadline,
            cancelled: Arc::new(AtomicBool::new(false)),
        })
    }

    /// The toast this timer belongs to.
    pub fn toast(&self) -> ToastId {
        self.toast
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Whether the timer should fire at `now`.
    pub fn is_due(&self, now: Instant) -> bool {
        !self.is_cancelled() && now >= self.deadline
    }

    pub fn cancel(&self) {
        if !self.cancelled.swap(true, Ordering::SeqCst) {
            tracing::trace!(toast = %self.toast, "cancelled dismiss timer");
        }
    }

    pub fn handle(&self) -> TimerHandle {
        TimerHandle(Arc::clone(&self.cancelled))
    }
}

impl Drop for DismissTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn zero_duration_never_arms() {
        let toast = Toast::info("stay").with_duration(Duration::ZERO);
        assert!(DismissTimer::arm(&toast, Instant::now()).is_none());
    }

    #[test]
    fn unreachable_deadline_never_arms() {
        let toast = Toast::info("forever").with_duration(Duration::MAX);
        assert!(DismissTimer::arm(&toast, Instant::now()).is_none());
    }

    #[test]
    fn fires_at_deadline() {
        let now = Instant::now();
        let toast = Toast::info("hi");
        let timer = DismissTimer::arm(&toast, now).unwrap();
        assert_eq!(timer.toast(), toast.id());
        assert!(!timer.is_due(now));
        assert!(!timer.is_due(now + Duration::from_millis(1999)));
        assert!(timer.is_due(now + Duration::from_secs(2)));
    }

    #[test]
    fn cancelled_timers_never_fire() {
        let now = Instant::now();
        let timer = DismissTimer::arm(&Toast::info("hi"), now).unwrap();
        let handle = timer.handle();
        timer.cancel();
        assert!(handle.is_cancelled());
        assert!(!timer.is_due(now + Duration::from_secs(60)));
    }

    #[test]
    fn dropping_cancels() {
        let timer = DismissTimer::arm(&Toast::info("hi"), Instant::now()).unwrap();
        let handle = timer.handle();
        drop(timer);
        assert!(handle.is_cancelled());
    }
}
