//! Rectangles and insets.

use cgmath::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// A rectangle.
///
/// The y axis points down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Rectangle origin.
    pub origin: Point2<f64>,

    /// Rectangle size.
    pub size: Vector2<f64>,
}

impl Rect {
    /// Creates a new rectangle.
    pub fn new(origin: Point2<f64>, size: Vector2<f64>) -> Rect {
        Rect { origin, size }
    }

    /// Creates a rectangle at the origin with the given size.
    pub fn sized(width: f64, height: f64) -> Rect {
        Rect::new(Point2::new(0., 0.), Vector2::new(width, height))
    }

    pub fn width(&self) -> f64 {
        self.size.x
    }

    pub fn height(&self) -> f64 {
        self.size.y
    }

    /// Returns the center point.
    pub fn center(&self) -> Point2<f64> {
        self.origin + self.size / 2.
    }

    /// Returns a new rectangle shrunk by the given insets.
    ///
    /// Sizes are clamped at zero.
    pub fn inset_by(&self, insets: EdgeInsets) -> Rect {
        Rect {
            origin: Point2::new(
                self.origin.x + insets.leading,
                self.origin.y + insets.top,
            ),
            size: Vector2::new(
                (self.size.x - insets.leading - insets.trailing).max(0.),
                (self.size.y - insets.top - insets.bottom).max(0.),
            ),
        }
    }
}

/// Insets from each edge of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeInsets {
    pub top: f64,
    pub leading: f64,
    pub bottom: f64,
    pub trailing: f64,
}

impl EdgeInsets {
    pub const fn new(top: f64, leading: f64, bottom: f64, trailing: f64) -> EdgeInsets {
        EdgeInsets {
            top,
            leading,
            bottom,
            trailing,
        }
    }

    pub const fn zero() -> EdgeInsets {
        EdgeInsets::new(0., 0., 0., 0.)
    }

    /// Adds `amount` to both horizontal edges.
    pub fn with_horizontal(self, amount: f64) -> EdgeInsets {
        EdgeInsets {
            leading: self.leading + amount,
            trailing: self.trailing + amount,
            ..self
        }
    }
}
