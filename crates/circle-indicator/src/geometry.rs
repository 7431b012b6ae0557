//! Dot layout math.
//!
//! Pure functions of (index, config, surface size) so layout can be tested
//! without a display. The row is centered on the surface along the active
//! axis and sits on the surface centerline across it; both orientations use
//! the same formula with the axes swapped.

use embedded_graphics::{
    prelude::*,
    primitives::{Circle, ContainsPoint},
};

use crate::config::{IndicatorConfig, Orientation};

/// Snapshot of everything that decides where the dots go.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotLayout {
    pub count: usize,
    pub radius: f32,
    pub margin: f32,
    pub orientation: Orientation,
    pub size: Size,
}

impl DotLayout {
    pub fn new<C>(config: &IndicatorConfig<C>, size: Size) -> Self {
        Self {
            count: config.count,
            radius: config.radius,
            margin: config.margin,
            orientation: config.orientation,
            size,
        }
    }

    /// Length of the whole row: all diameters plus the gaps between them.
    pub fn total_extent(&self) -> f32 {
        self.count as f32 * self.radius * 2.0 + self.count.saturating_sub(1) as f32 * self.margin
    }

    /// Distance between two adjacent dot centers.
    pub fn pitch(&self) -> f32 {
        self.radius * 2.0 + self.margin
    }

    /// Center of dot `index` along the horizontal axis of the surface.
    pub fn calculate_x(&self, index: usize) -> f32 {
        self.along(self.size.width, index)
    }

    /// Center of dot `index` along the vertical axis of the surface.
    pub fn calculate_y(&self, index: usize) -> f32 {
        self.along(self.size.height, index)
    }

    /// Center of dot `index` along the active axis.
    pub fn axis_center(&self, index: usize) -> f32 {
        match self.orientation {
            Orientation::Horizontal => self.calculate_x(index),
            Orientation::Vertical => self.calculate_y(index),
        }
    }

    /// Centerline coordinate across the active axis.
    pub fn cross_center(&self) -> f32 {
        match self.orientation {
            Orientation::Horizontal => half(self.size.height),
            Orientation::Vertical => half(self.size.width),
        }
    }

    /// Place an axis coordinate on the centerline, returning `(x, y)`.
    pub fn point_at(&self, axis: f32) -> (f32, f32) {
        match self.orientation {
            Orientation::Horizontal => (axis, self.cross_center()),
            Orientation::Vertical => (self.cross_center(), axis),
        }
    }

    /// Center of dot `index` as `(x, y)`.
    pub fn center(&self, index: usize) -> (f32, f32) {
        self.point_at(self.axis_center(index))
    }

    /// Rasterized dot diameter.
    pub fn diameter(&self) -> u32 {
        round_px(self.radius * 2.0).max(0) as u32
    }

    /// Circle primitive for a dot centered at `(x, y)`.
    ///
    /// The circle covers `[x - r, x + r]`, so its first pixel column is
    /// `round(x - r)` for both odd and even diameters.
    pub fn circle_at(&self, (x, y): (f32, f32)) -> Circle {
        let top_left = Point::new(round_px(x - self.radius), round_px(y - self.radius));
        Circle::new(top_left, self.diameter())
    }

    /// Circle primitive for dot `index`.
    pub fn dot(&self, index: usize) -> Circle {
        self.circle_at(self.center(index))
    }

    /// Whether `point` lies inside any dot.
    pub fn dots_contain(&self, point: Point) -> bool {
        (0..self.count).any(|index| self.dot(index).contains(point))
    }

    fn along(&self, extent: u32, index: usize) -> f32 {
        half(extent) - self.total_extent() / 2.0 + self.radius + index as f32 * self.pitch()
    }
}

/// Integer half of a surface extent.
fn half(extent: u32) -> f32 {
    (extent / 2) as f32
}

/// Round half away from zero; `f32::round` needs std.
pub(crate) fn round_px(value: f32) -> i32 {
    if value >= 0.0 {
        (value + 0.5) as i32
    } else {
        (value - 0.5) as i32
    }
}
