//! Several toasts at once.

use crate::binding::Binding;
use crate::gesture::DragOutcome;
use crate::haptics::{HapticEngine, NoHaptics};
use crate::placement::{self, RenderedToast, OVERLAY_Z_INDEX};
use crate::slot::ToastSlot;
use crate::surface;
use cgmath::Vector2;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Instant;
use toastie_core::{ButtonId, EdgeInsets, Rect, Toast, ToastConfiguration, ToastId};

/// Shows every toast in a bound list, each with its own timer.
///
/// List order is stacking order: later toasts are drawn on top. The queue never adds toasts
/// to the list; it only removes the ones that get dismissed.
pub struct ToastQueue {
    toasts: Binding<Vec<Toast>>,
    config: ToastConfiguration,
    haptics: Arc<dyn HapticEngine>,
    slots: Vec<ToastSlot>,
    seen_version: u64,
}

impl ToastQueue {
    pub fn new(toasts: Binding<Vec<Toast>>, config: ToastConfiguration, now: Instant) -> ToastQueue {
        ToastQueue::with_haptics(toasts, config, Arc::new(NoHaptics), now)
    }

    pub fn with_haptics(
        toasts: Binding<Vec<Toast>>,
        config: ToastConfiguration,
        haptics: Arc<dyn HapticEngine>,
        now: Instant,
    ) -> ToastQueue {
        let seen_version = toasts.version();
        let mut queue = ToastQueue {
            toasts,
            config,
            haptics,
            slots: Vec::new(),
            seen_version,
        };
        queue.reconcile(now);
        queue
    }

    pub fn binding(&self) -> &Binding<Vec<Toast>> {
        &self.toasts
    }

    pub fn config(&self) -> &ToastConfiguration {
        &self.config
    }

    pub fn set_config(&mut self, config: ToastConfiguration) {
        self.config = config;
    }

    /// Visible toasts, bottom to top.
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.slots.iter().map(ToastSlot::toast)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The earliest pending auto-dismiss.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.slots.iter().filter_map(ToastSlot::deadline).min()
    }

    /// Picks up changes to the list. Returns whether anything changed.
    pub fn sync(&mut self, now: Instant) -> bool {
        let version = self.toasts.version();
        if version == self.seen_version {
            return false;
        }
        self.seen_version = version;
        self.reconcile(now)
    }

    fn reconcile(&mut self, now: Instant) -> bool {
        let toasts = self.toasts.get();
        let mut existing: HashMap<ToastId, ToastSlot> =
            self.slots.drain(..).map(|slot| (slot.id(), slot)).collect();
        let mut seen = HashSet::with_capacity(toasts.len());
        let mut changed = false;

        for toast in toasts {
            let id = toast.id();
            if !seen.insert(id) {
                continue;
            }
            match existing.remove(&id) {
                Some(slot) => self.slots.push(slot),
                None => {
                    tracing::debug!(toast = %id, kind = ?toast.kind(), "queueing toast");
                    self.slots.push(ToastSlot::present(toast, now, &*self.haptics));
                    changed = true;
                }
            }
        }

        for (id, mut slot) in existing {
            slot.cancel_timer();
            tracing::debug!(toast = %id, "toast removed from queue");
            changed = true;
        }
        changed
    }

    /// Fires every due timer. Returns whether anything changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let expired: Vec<ToastId> = self
            .slots
            .iter()
            .filter(|slot| slot.is_expired(now))
            .map(ToastSlot::id)
            .collect();
        for id in &expired {
            tracing::debug!(toast = %id, "queued toast timed out");
            self.dismiss(*id);
        }
        !expired.is_empty()
    }

    /// Syncs, then ticks.
    pub fn update(&mut self, now: Instant) -> bool {
        let synced = self.sync(now);
        let ticked = self.tick(now);
        synced || ticked
    }

    /// Removes one toast from the screen and from the list. Other toasts are untouched.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let index = match self.slots.iter().position(|slot| slot.id() == id) {
            Some(index) => index,
            None => return false,
        };
        let mut slot = self.slots.remove(index);
        slot.cancel_timer();
        tracing::debug!(toast = %id, "dismissing queued toast");
        self.toasts.update(|toasts| {
            let len = toasts.len();
            toasts.retain(|toast| toast.id() != id);
            toasts.len() != len
        });
        true
    }

    fn slot_mut(&mut self, id: ToastId) -> Option<&mut ToastSlot> {
        self.slots.iter_mut().find(|slot| slot.id() == id)
    }

    /// The user tapped a toast. Returns whether it was dismissed.
    pub fn tap(&mut self, id: ToastId) -> bool {
        let config = &self.config;
        let dismisses = self
            .slots
            .iter()
            .any(|slot| slot.id() == id && slot.tap_dismisses(config));
        dismisses && self.dismiss(id)
    }

    pub fn drag_changed(&mut self, id: ToastId, translation: Vector2<f64>) {
        let config = &self.config;
        if let Some(slot) = self.slots.iter_mut().find(|slot| slot.id() == id) {
            slot.drag_changed(translation, config);
        }
    }

    /// The user let go of a toast. Returns whether it was dismissed.
    pub fn drag_ended(&mut self, id: ToastId, translation: Vector2<f64>) -> bool {
        let config = &self.config;
        let outcome = match self.slots.iter_mut().find(|slot| slot.id() == id) {
            Some(slot) => slot.drag_ended(translation, config),
            None => return false,
        };
        outcome == DragOutcome::Dismiss && self.dismiss(id)
    }

    /// Runs a button action on a visible toast.
    pub fn press(&mut self, id: ToastId, button: ButtonId) -> bool {
        match self.slot_mut(id) {
            Some(slot) => slot.press(button),
            None => false,
        }
    }

    /// Renders every visible toast inside `bounds`, bottom to top.
    pub fn render(&self, bounds: Rect, safe_area: EdgeInsets) -> Vec<RenderedToast> {
        self.slots
            .iter()
            .enumerate()
            .map(|(index, slot)| {
                let toast = slot.toast();
                RenderedToast {
                    view: surface::render(toast, &self.config, slot.offset()),
                    placement: placement::queue_placement(toast.position(), bounds, safe_area),
                    transition: self.config.transition.resolve(toast.position()),
                    z_index: OVERLAY_Z_INDEX.saturating_add(index as i32),
                }
            })
            .collect()
    }
}
