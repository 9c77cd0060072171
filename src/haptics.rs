use toastie_core::HapticFeedback;

/// Plays haptic feedback on a device.
///
/// Controllers call this once when a toast with a haptic first appears.
pub trait HapticEngine: Send + Sync {
    fn perform(&self, feedback: HapticFeedback);
}

/// Doesn’t do anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHaptics;

impl HapticEngine for NoHaptics {
    fn perform(&self, feedback: HapticFeedback) {
        tracing::trace!(?feedback, "haptic feedback (no engine)");
    }
}

impl<F: Fn(HapticFeedback) + Send + Sync> HapticEngine for F {
    fn perform(&self, feedback: HapticFeedback) {
        self(feedback)
    }
}
