//! Where toasts appear.

use crate::rect::EdgeInsets;
use cgmath::{Vector2, Zero};
use serde::{Deserialize, Serialize};

/// A two-dimensional alignment inside a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    TopLeading,
    Top,
    TopTrailing,
    Leading,
    #[default]
    Center,
    Trailing,
    BottomLeading,
    Bottom,
    BottomTrailing,
}

/// Toast display position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ToastPosition {
    #[default]
    Top,
    Bottom,
    Center,
    /// Custom alignment with an offset in points.
    Custom {
        alignment: Alignment,
        offset: Vector2<f64>,
    },
}

impl ToastPosition {
    /// A custom position.
    pub fn custom(alignment: Alignment, offset: Vector2<f64>) -> ToastPosition {
        ToastPosition::Custom { alignment, offset }
    }

    pub fn alignment(&self) -> Alignment {
        match self {
            ToastPosition::Top => Alignment::Top,
            ToastPosition::Bottom => Alignment::Bottom,
            ToastPosition::Center => Alignment::Center,
            ToastPosition::Custom { alignment, .. } => *alignment,
        }
    }

    /// The custom offset, or zero.
    ///
    /// Non-finite offsets are treated as zero.
    pub fn offset(&self) -> Vector2<f64> {
        match self {
            ToastPosition::Custom { offset, .. } if offset.x.is_finite() && offset.y.is_finite() => {
                *offset
            }
            _ => Vector2::zero(),
        }
    }

    /// Padding between a single overlay toast and the edge it’s attached to.
    pub fn edge_insets(&self) -> EdgeInsets {
        match self {
            ToastPosition::Top => EdgeInsets::new(15., 0., 0., 0.),
            ToastPosition::Bottom => EdgeInsets::new(0., 0., 50., 0.),
            ToastPosition::Center => EdgeInsets::zero(),
            ToastPosition::Custom { .. } => {
                let offset = self.offset();
                EdgeInsets::new(offset.y, offset.x, 0., 0.)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_offsets() {
        let pos = ToastPosition::custom(Alignment::TopTrailing, Vector2::new(8., 20.));
        assert_eq!(pos.alignment(), Alignment::TopTrailing);
        assert_eq!(pos.edge_insets(), EdgeInsets::new(20., 8., 0., 0.));
        assert_eq!(ToastPosition::Top.offset(), Vector2::zero());
    }

    #[test]
    fn non_finite_offset_falls_back_to_zero() {
        let pos = ToastPosition::custom(Alignment::Center, Vector2::new(f64::NAN, 3.));
        assert_eq!(pos.offset(), Vector2::zero());
        assert_eq!(pos.edge_insets(), EdgeInsets::zero());
    }
}
