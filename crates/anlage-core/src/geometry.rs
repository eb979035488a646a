//! Geometric primitives for diagram annotation.
//!
//! This module provides the [`Rect`] bounding box used to position overlay
//! shapes above diagram elements.
//!
//! # Coordinate System
//!
//! Anlage uses a coordinate system consistent with SVG:
//!
//! - **Origin**: Top-left corner at `(0, 0)`
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases downward

/// An axis-aligned rectangle in diagram coordinate space.
///
/// Rectangles are defined by their top-left corner plus width and height,
/// matching the geometry attributes of an SVG `<rect>`.
///
/// # Examples
///
/// ```
/// # use anlage_core::geometry::Rect;
/// let r = Rect::new(10.0, 20.0, 100.0, 40.0);
/// assert_eq!(r.max_x(), 110.0);
/// assert_eq!(r.max_y(), 60.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

impl Rect {
    /// Creates a new rectangle from its top-left corner and dimensions.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle from two opposite corners.
    ///
    /// The corners may be given in any order; the result always has
    /// non-negative width and height.
    pub fn from_corners(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        let x = x1.min(x2);
        let y = y1.min(y2);
        Self {
            x,
            y,
            width: (x1 - x2).abs(),
            height: (y1 - y2).abs(),
        }
    }

    /// Returns the x-coordinate of the left edge.
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the top edge.
    pub fn y(self) -> f32 {
        self.y
    }

    /// Returns the width of the rectangle.
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height of the rectangle.
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns the x-coordinate of the right edge.
    pub fn max_x(self) -> f32 {
        self.x + self.width
    }

    /// Returns the y-coordinate of the bottom edge.
    pub fn max_y(self) -> f32 {
        self.y + self.height
    }

    /// Returns this rectangle expanded by `margin` on all four sides.
    ///
    /// Used to draw a tight visual outline around a diagram element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use anlage_core::geometry::Rect;
    /// let r = Rect::new(10.0, 10.0, 20.0, 20.0).padded(3.0);
    /// assert_eq!(r, Rect::new(7.0, 7.0, 26.0, 26.0));
    /// ```
    pub fn padded(self, margin: f32) -> Self {
        Self {
            x: self.x - margin,
            y: self.y - margin,
            width: self.width + margin * 2.0,
            height: self.height + margin * 2.0,
        }
    }

    /// Returns this rectangle translated by the given offsets.
    pub fn translated(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Returns the smallest rectangle containing both `self` and `other`.
    pub fn union(self, other: Self) -> Self {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Self {
            x,
            y,
            width: self.max_x().max(other.max_x()) - x,
            height: self.max_y().max(other.max_y()) - y,
        }
    }
}
