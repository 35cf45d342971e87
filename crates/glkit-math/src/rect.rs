// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::fmt;

use crate::approx::ApproxEq;
use crate::vec2::Vec2;

/// Axis-aligned 2D rectangle given by its minimum corner and size.
///
/// Invariants:
/// - Constructors never produce a negative `width`/`height`; only direct
///   field mutation can.
/// - A rectangle with `width <= 0` or `height <= 0` is empty.
/// - Containment and overlap are inclusive on edges.
#[derive(Debug, Default, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Rect {
    /// Minimum X.
    pub x: f64,
    /// Minimum Y.
    pub y: f64,
    /// Extent along X.
    pub width: f64,
    /// Extent along Y.
    pub height: f64,
}

impl Rect {
    /// Creates a rectangle from its minimum corner and size.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Bounding rectangle of two corners given in any order.
    ///
    /// ```
    /// use glkit_math::{Rect, Vec2};
    /// let r = Rect::from_corners(Vec2::new(4.0, 2.0), Vec2::new(0.0, 0.0));
    /// assert_eq!(r, Rect::new(0.0, 0.0, 4.0, 2.0));
    /// assert_eq!(r.area(), 8.0);
    /// ```
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        let min = a.min(&b);
        let max = a.max(&b);
        Self::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    /// Rectangle of `size` centered on `center`.
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        Self::new(
            center.x - size.x / 2.0,
            center.y - size.y / 2.0,
            size.x,
            size.y,
        )
    }

    /// Bounding rectangle of every rectangle in `rects`; the default (zero)
    /// rectangle when `rects` is empty.
    pub fn union_of(rects: &[Self]) -> Self {
        rects
            .split_first()
            .map_or_else(Self::default, |(first, rest)| {
                rest.iter().fold(*first, |acc, r| acc.union(r))
            })
    }

    /// Overwrites every field in place.
    pub fn set(&mut self, x: f64, y: f64, width: f64, height: f64) {
        *self = Self::new(x, y, width, height);
    }

    /// Minimum corner.
    pub const fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Maximum corner.
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.width, self.y + self.height)
    }

    /// Center point.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// `(width, height)`.
    pub const fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// `width * height`.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// `true` when either extent is zero or negative.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Smallest rectangle containing both `self` and `other`.
    pub fn union(&self, other: &Self) -> Self {
        Self::from_corners(self.min().min(&other.min()), self.max().max(&other.max()))
    }

    /// Smallest rectangle containing `self` and `point`.
    pub fn include(&self, point: &Vec2) -> Self {
        Self::from_corners(self.min().min(point), self.max().max(point))
    }

    /// Expands every edge outward by `amount` (shrinks when negative).
    pub fn grow(&self, amount: f64) -> Self {
        Self::new(
            self.x - amount,
            self.y - amount,
            self.width + 2.0 * amount,
            self.height + 2.0 * amount,
        )
    }

    /// `true` if `point` lies inside or on the boundary.
    pub fn contains(&self, point: &Vec2) -> bool {
        let max = self.max();
        point.x >= self.x && point.x <= max.x && point.y >= self.y && point.y <= max.y
    }

    /// `true` if `other` lies entirely inside `self`.
    pub fn contains_rect(&self, other: &Self) -> bool {
        self.contains(&other.min()) && self.contains(&other.max())
    }

    /// `true` if the rectangles overlap (touching edges count).
    pub fn intersects(&self, other: &Self) -> bool {
        let a_max = self.max();
        let b_max = other.max();
        !(a_max.x < other.x || self.x > b_max.x || a_max.y < other.y || self.y > b_max.y)
    }

    /// Overlapping region, or `None` when the rectangles are disjoint.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if !self.intersects(other) {
            return None;
        }
        Some(Self::from_corners(
            self.min().max(&other.min()),
            self.max().min(&other.max()),
        ))
    }
}

impl ApproxEq for Rect {
    fn approx_eq_eps(&self, other: &Self, eps: f64) -> bool {
        [self.x, self.y, self.width, self.height]
            .approx_eq_eps(&[other.x, other.y, other.width, other.height], eps)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rect({}, {}, {} x {})",
            self.x, self.y, self.width, self.height
        )
    }
}
