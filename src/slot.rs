use crate::gesture::{DragOutcome, DragState};
use crate::haptics::HapticEngine;
use crate::timer::DismissTimer;
use cgmath::Vector2;
use std::time::Instant;
use toastie_core::{ButtonId, Toast, ToastConfiguration, ToastId};

/// One visible toast: the displayed copy, its auto-dismiss timer, and its drag state.
#[derive(Debug)]
pub(crate) struct ToastSlot {
    toast: Toast,
    timer: Option<DismissTimer>,
    drag: DragState,
}

impl ToastSlot {
    /// Shows `toast`: arms its timer and plays its haptic.
    pub fn present(toast: Toast, now: Instant, haptics: &dyn HapticEngine) -> ToastSlot {
        let timer = DismissTimer::arm(&toast, now);
        if let Some(feedback) = toast.haptic() {
            haptics.perform(feedback);
        }
        ToastSlot {
            toast,
            timer,
            drag: DragState::default(),
        }
    }

    pub fn id(&self) -> ToastId {
        self.toast.id()
    }

    pub fn toast(&self) -> &Toast {
        &self.toast
    }

    pub fn offset(&self) -> Vector2<f64> {
        self.drag.offset()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.timer
            .as_ref()
            .filter(|timer| !timer.is_cancelled())
            .map(DismissTimer::deadline)
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        self.timer.as_ref().map_or(false, |timer| {
            timer.toast() == self.toast.id() && timer.is_due(now)
        })
    }

    pub fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
    }

    pub fn tap_dismisses(&self, config: &ToastConfiguration) -> bool {
        config.tap_to_dismiss && self.toast.is_dismissible()
    }

    fn swipe_allowed(&self, config: &ToastConfiguration) -> bool {
        config.swipe_to_dismiss && self.toast.is_dismissible()
    }

    pub fn drag_changed(&mut self, translation: Vector2<f64>, config: &ToastConfiguration) {
        let allowed = self.swipe_allowed(config);
        self.drag.changed(translation, allowed);
    }

    pub fn drag_ended(
        &mut self,
        translation: Vector2<f64>,
        config: &ToastConfiguration,
    ) -> DragOutcome {
        let allowed = self.swipe_allowed(config);
        self.drag.ended(translation, allowed)
    }

    /// Runs a button action. Returns false if the toast has no such button.
    pub fn press(&self, button: ButtonId) -> bool {
        match self.toast.button(button) {
            Some(button) => {
                tracing::debug!(toast = %self.toast.id(), title = button.title(), "button pressed");
                button.activate();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::haptics::tests::Recorder;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;
    use toastie_core::{HapticFeedback, ToastButton};

    #[test]
    fn presenting_arms_and_plays_once() {
        let haptics = Recorder::default();
        let now = Instant::now();
        let slot = ToastSlot::present(Toast::error("bad"), now, &haptics);
        assert_eq!(haptics.played(), vec![HapticFeedback::Error]);
        assert_eq!(slot.deadline(), Some(now + Duration::from_secs(2)));
        assert!(!slot.is_expired(now));
        assert!(slot.is_expired(now + Duration::from_secs(2)));
    }

    #[test]
    fn no_haptic_no_timer() {
        let haptics = Recorder::default();
        let now = Instant::now();
        let mut slot = ToastSlot::present(
            Toast::info("sticky").with_duration(Duration::ZERO),
            now,
            &haptics,
        );
        assert!(haptics.played().is_empty());
        assert_eq!(slot.deadline(), None);
        assert!(!slot.is_expired(now + Duration::from_secs(3600)));
        slot.cancel_timer();
    }

    #[test]
    fn cancelled_timer_does_not_expire() {
        let now = Instant::now();
        let mut slot = ToastSlot::present(Toast::info("x"), now, &crate::NoHaptics);
        slot.cancel_timer();
        assert!(!slot.is_expired(now + Duration::from_secs(5)));
    }

    #[test]
    fn dismissal_rules_follow_config_and_toast() {
        let now = Instant::now();
        let mut config = ToastConfiguration::default();
        let locked = ToastSlot::present(
            Toast::info("x").with_dismissible(false),
            now,
            &crate::NoHaptics,
        );
        assert!(!locked.tap_dismisses(&config));

        let mut slot = ToastSlot::present(Toast::info("x"), now, &crate::NoHaptics);
        assert!(slot.tap_dismisses(&config));
        config.tap_to_dismiss = false;
        assert!(!slot.tap_dismisses(&config));

        config.swipe_to_dismiss = false;
        slot.drag_changed(Vector2::new(200., 0.), &config);
        assert_eq!(slot.offset(), Vector2::new(0., 0.));
        assert_eq!(slot.drag_ended(Vector2::new(200., 0.), &config), DragOutcome::Reset);
    }

    #[test]
    fn press_runs_action() {
        let count = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&count);
        let button = ToastButton::new("Undo", move || {
            c.fetch_add(1, Ordering::SeqCst);
        });
        let id = button.id();
        let slot = ToastSlot::present(
            Toast::success("saved").with_button(button),
            Instant::now(),
            &crate::NoHaptics,
        );
        assert!(slot.press(id));
        assert!(!slot.press(ToastButton::new("other", || ()).id()));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}
