//! Swipe-to-dismiss.

use cgmath::{Vector2, Zero};

/// How far a toast has to be dragged along either axis before letting go dismisses it.
pub const SWIPE_DISMISS_THRESHOLD: f64 = 100.;

/// What happens when a drag ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    Dismiss,
    Reset,
}

/// Tracks the drag offset of one toast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    offset: Vector2<f64>,
    dragging: bool,
}

impl Default for DragState {
    fn default() -> DragState {
        DragState {
            offset: Vector2::zero(),
            dragging: false,
        }
    }
}

impl DragState {
    /// Current visual offset.
    pub fn offset(&self) -> Vector2<f64> {
        self.offset
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// The finger moved. Does nothing unless swiping is `allowed`.
    pub fn changed(&mut self, translation: Vector2<f64>, allowed: bool) {
        if !allowed {
            return;
        }
        self.dragging = true;
        self.offset = sanitize(translation);
    }

    /// The finger lifted.
    ///
    /// Dismisses if swiping is `allowed` and the translation passed the threshold on either
    /// axis; otherwise springs back.
    pub fn ended(&mut self, translation: Vector2<f64>, allowed: bool) -> DragOutcome {
        self.dragging = false;
        let translation = sanitize(translation);
        if allowed && passes_threshold(translation) {
            self.offset = translation;
            DragOutcome::Dismiss
        } else {
            self.offset = Vector2::zero();
            DragOutcome::Reset
        }
    }
}

fn passes_threshold(t: Vector2<f64>) -> bool {
    t.x.abs() > SWIPE_DISMISS_THRESHOLD || t.y.abs() > SWIPE_DISMISS_THRESHOLD
}

fn sanitize(t: Vector2<f64>) -> Vector2<f64> {
    if t.x.is_finite() && t.y.is_finite() {
        t
    } else {
        Vector2::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn tracks_while_dragging() {
        let mut drag = DragState::default();
        drag.changed(Vector2::new(30., -4.), true);
        assert!(drag.is_dragging());
        assert_eq!(drag.offset(), Vector2::new(30., -4.));

        // far past the threshold, but nothing commits until release
        drag.changed(Vector2::new(500., 0.), true);
        assert_eq!(drag.offset(), Vector2::new(500., 0.));
        assert_eq!(drag.ended(Vector2::new(500., 0.), true), DragOutcome::Dismiss);
    }

    #[test]
    fn short_swipes_spring_back() {
        let mut drag = DragState::default();
        drag.changed(Vector2::new(100., 100.), true);
        assert_eq!(drag.ended(Vector2::new(100., 100.), true), DragOutcome::Reset);
        assert_eq!(drag.offset(), Vector2::zero());
        assert!(!drag.is_dragging());
    }

    #[test]
    fn disallowed_swipes_do_nothing() {
        let mut drag = DragState::default();
        drag.changed(Vector2::new(300., 0.), false);
        assert_eq!(drag.offset(), Vector2::zero());
        assert_eq!(drag.ended(Vector2::new(300., 0.), false), DragOutcome::Reset);
    }

    proptest! {
        #[test]
        fn dismisses_iff_past_threshold(dx in -300f64..300., dy in -300f64..300.) {
            let mut drag = DragState::default();
            drag.changed(Vector2::new(dx, dy), true);
            let outcome = drag.ended(Vector2::new(dx, dy), true);
            let expected = if dx.abs() > 100. || dy.abs() > 100. {
                DragOutcome::Dismiss
            } else {
                DragOutcome::Reset
            };
            prop_assert_eq!(outcome, expected);
            if outcome == DragOutcome::Reset {
                prop_assert_eq!(drag.offset(), Vector2::zero());
            }
        }

        #[test]
        fn never_dismisses_when_disallowed(dx in -1000f64..1000., dy in -1000f64..1000.) {
            let mut drag = DragState::default();
            prop_assert_eq!(drag.ended(Vector2::new(dx, dy), false), DragOutcome::Reset);
        }
    }
}
