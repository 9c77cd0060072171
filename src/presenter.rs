//! Single-slot toast presentation.

use crate::gesture::DragOutcome;
use crate::haptics::{HapticEngine, NoHaptics};
use crate::placement::{self, RenderedToast, OVERLAY_Z_INDEX};
use crate::slot::ToastSlot;
use crate::source::ToastSource;
use crate::surface;
use cgmath::Vector2;
use std::sync::Arc;
use std::time::Instant;
use toastie_core::{ButtonId, Toast, ToastConfiguration, ToastId};

/// Presenter state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Visible,
}

/// Shows at most one toast at a time, driven by a [`ToastSource`].
///
/// The presenter keeps its own copy of the visible toast. Call [`Presenter::update`] whenever
/// the source may have changed or time has passed; timers only fire from there.
///
/// When a toast goes away because its timer ran out or the user dismissed it, the presenter
/// writes the dismissal back into the source (unless the source has moved on to another toast
/// in the meantime). When the source itself is dismissed, nothing is written back.
pub struct Presenter<S> {
    source: S,
    config: ToastConfiguration,
    haptics: Arc<dyn HapticEngine>,
    slot: Option<ToastSlot>,
    seen_version: u64,
}

impl<S: ToastSource> Presenter<S> {
    /// Creates a presenter and shows whatever the source currently requests.
    pub fn new(source: S, config: ToastConfiguration, now: Instant) -> Presenter<S> {
        Presenter::with_haptics(source, config, Arc::new(NoHaptics), now)
    }

    pub fn with_haptics(
        source: S,
        config: ToastConfiguration,
        haptics: Arc<dyn HapticEngine>,
        now: Instant,
    ) -> Presenter<S> {
        let seen_version = source.version();
        let mut presenter = Presenter {
            source,
            config,
            haptics,
            slot: None,
            seen_version,
        };
        presenter.reconcile(now);
        presenter
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn config(&self) -> &ToastConfiguration {
        &self.config
    }

    pub fn set_config(&mut self, config: ToastConfiguration) {
        self.config = config;
    }

    pub fn phase(&self) -> Phase {
        match self.slot {
            Some(_) => Phase::Visible,
            None => Phase::Idle,
        }
    }

    /// The toast currently on screen.
    pub fn visible(&self) -> Option<&Toast> {
        self.slot.as_ref().map(ToastSlot::toast)
    }

    /// When the visible toast will dismiss itself.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.slot.as_ref().and_then(ToastSlot::deadline)
    }

    /// Picks up changes from the source. Returns whether anything changed.
    pub fn sync(&mut self, now: Instant) -> bool {
        let version = self.source.version();
        if version == self.seen_version {
            return false;
        }
        self.seen_version = version;
        self.reconcile(now)
    }

    /// Fires the auto-dismiss timer if it’s due. Returns whether anything changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let expired = self
            .slot
            .as_ref()
            .filter(|slot| slot.is_expired(now))
            .map(ToastSlot::id);
        match expired {
            Some(id) => {
                tracing::debug!(toast = %id, "toast timed out");
                self.dismiss()
            }
            None => false,
        }
    }

    /// Syncs, then ticks.
    pub fn update(&mut self, now: Instant) -> bool {
        let synced = self.sync(now);
        let ticked = self.tick(now);
        synced || ticked
    }

    fn reconcile(&mut self, now: Instant) -> bool {
        match self.source.requested() {
            Some(toast) => {
                if self.slot.as_ref().map(ToastSlot::id) == Some(toast.id()) {
                    return false;
                }
                if let Some(mut previous) = self.slot.take() {
                    previous.cancel_timer();
                    tracing::debug!(toast = %previous.id(), "toast replaced");
                }
                tracing::debug!(toast = %toast.id(), kind = ?toast.kind(), "presenting toast");
                self.slot = Some(ToastSlot::present(toast, now, &*self.haptics));
                true
            }
            None => match self.slot.take() {
                Some(mut slot) => {
                    slot.cancel_timer();
                    tracing::debug!(toast = %slot.id(), "toast dismissed by source");
                    true
                }
                None => false,
            },
        }
    }

    /// Dismisses the visible toast and resets the source. Returns false if nothing was visible.
    pub fn dismiss(&mut self) -> bool {
        let mut slot = match self.slot.take() {
            Some(slot) => slot,
            None => return false,
        };
        slot.cancel_timer();
        tracing::debug!(toast = %slot.id(), "dismissing toast");
        self.source.reset_if(slot.id());
        true
    }

    fn visible_slot(&mut self, id: ToastId) -> Option<&mut ToastSlot> {
        self.slot.as_mut().filter(|slot| slot.id() == id)
    }

    /// The user tapped a toast. Returns whether it was dismissed.
    pub fn tap(&mut self, id: ToastId) -> bool {
        let dismisses = match self.slot.as_ref() {
            Some(slot) if slot.id() == id => slot.tap_dismisses(&self.config),
            _ => false,
        };
        dismisses && self.dismiss()
    }

    /// The user is dragging a toast.
    pub fn drag_changed(&mut self, id: ToastId, translation: Vector2<f64>) {
        let config = &self.config;
        if let Some(slot) = self.slot.as_mut().filter(|slot| slot.id() == id) {
            slot.drag_changed(translation, config);
        }
    }

    /// The user let go of a toast. Returns whether it was dismissed.
    pub fn drag_ended(&mut self, id: ToastId, translation: Vector2<f64>) -> bool {
        let config = &self.config;
        let outcome = match self.slot.as_mut().filter(|slot| slot.id() == id) {
            Some(slot) => slot.drag_ended(translation, config),
            None => return false,
        };
        outcome == DragOutcome::Dismiss && self.dismiss()
    }

    /// Dismisses the toast with the given id, if it’s the visible one.
    pub fn dismiss_toast(&mut self, id: ToastId) -> bool {
        self.visible_slot(id).is_some() && self.dismiss()
    }

    /// Runs a button action on the visible toast.
    pub fn press(&mut self, id: ToastId, button: ButtonId) -> bool {
        match self.visible_slot(id) {
            Some(slot) => slot.press(button),
            None => false,
        }
    }

    /// Renders the visible toast.
    pub fn render(&self) -> Option<RenderedToast> {
        let slot = self.slot.as_ref()?;
        let toast = slot.toast();
        Some(RenderedToast {
            view: surface::render(toast, &self.config, slot.offset()),
            placement: placement::overlay_placement(toast.position(), &self.config),
            transition: self.config.transition.resolve(toast.position()),
            z_index: OVERLAY_Z_INDEX,
        })
    }
}
