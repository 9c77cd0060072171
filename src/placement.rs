use crate::surface::ToastView;
use cgmath::Point2;
use toastie_core::config::Transition;
use toastie_core::{Alignment, EdgeInsets, Rect, ToastConfiguration, ToastPosition};

/// Z index of toast overlays.
pub const OVERLAY_Z_INDEX: i32 = 999;

/// Distance between queued toasts and the top or bottom safe area edge.
pub const QUEUE_EDGE_DISTANCE: f64 = 50.;

/// Where a rendered toast goes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// Aligned inside the container, then inset.
    Aligned {
        alignment: Alignment,
        insets: EdgeInsets,
    },
    /// Centered on a point in container coordinates.
    Positioned { center: Point2<f64> },
}

/// A toast ready for the host to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedToast {
    pub view: ToastView,
    pub placement: Placement,
    pub transition: Transition,
    pub z_index: i32,
}

/// Placement of the single overlay toast.
pub fn overlay_placement(position: ToastPosition, config: &ToastConfiguration) -> Placement {
    Placement::Aligned {
        alignment: position.alignment(),
        insets: position.edge_insets().with_horizontal(config.horizontal_padding),
    }
}

/// Placement of a queued toast inside `bounds`.
pub fn queue_placement(position: ToastPosition, bounds: Rect, safe_area: EdgeInsets) -> Placement {
    let offset = position.offset();
    let center = bounds.center();
    let safe = bounds.inset_by(safe_area);
    let y = match position {
        ToastPosition::Top => safe.origin.y + QUEUE_EDGE_DISTANCE,
        ToastPosition::Bottom => safe.origin.y + safe.height() - QUEUE_EDGE_DISTANCE,
        ToastPosition::Center => center.y,
        ToastPosition::Custom { .. } => center.y + offset.y,
    };
    Placement::Positioned {
        center: Point2::new(center.x + offset.x, y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector2;

    #[test]
    fn overlay_insets() {
        let config = ToastConfiguration::default();
        assert_eq!(
            overlay_placement(ToastPosition::Top, &config),
            Placement::Aligned {
                alignment: Alignment::Top,
                insets: EdgeInsets::new(15., 16., 0., 16.),
            }
        );
        assert_eq!(
            overlay_placement(ToastPosition::Bottom, &config),
            Placement::Aligned {
                alignment: Alignment::Bottom,
                insets: EdgeInsets::new(0., 16., 50., 16.),
            }
        );
        let custom = ToastPosition::custom(Alignment::TopLeading, Vector2::new(10., 20.));
        assert_eq!(
            overlay_placement(custom, &config),
            Placement::Aligned {
                alignment: Alignment::TopLeading,
                insets: EdgeInsets::new(20., 26., 0., 16.),
            }
        );
    }

    #[test]
    fn queue_positions() {
        let bounds = Rect::sized(400., 800.);
        let safe = EdgeInsets::new(44., 0., 34., 0.);
        let center = |position| match queue_placement(position, bounds, safe) {
            Placement::Positioned { center } => center,
            other => panic!("expected a point, got {:?}", other),
        };
        assert_eq!(center(ToastPosition::Top), Point2::new(200., 94.));
        assert_eq!(center(ToastPosition::Bottom), Point2::new(200., 716.));
        assert_eq!(center(ToastPosition::Center), Point2::new(200., 400.));
        assert_eq!(
            center(ToastPosition::custom(Alignment::Center, Vector2::new(-20., 30.))),
            Point2::new(180., 430.)
        );
    }
}
