//! Page indicator drawing one dot per page plus a moving selected dot.
//!
//! A page host drives the indicator with two calls:
//! - [`CircleIndicator::set_position`] when a page has settled
//! - [`CircleIndicator::set_position_offset`] on every scroll frame between
//!   page `index` and page `index + 1`
//!
//! Every call that changes what is on screen marks the indicator dirty; the
//! host renders it and marks it clean again.

use embedded_graphics::{
    prelude::*,
    primitives::{PointsIter, PrimitiveStyle},
};

use crate::attrs::parse_attributes;
use crate::config::{
    validate_count, validate_margin, validate_radius, IndicatorColor, IndicatorConfig, Mode,
    Orientation,
};
use crate::error::IndicatorError;
use crate::geometry::DotLayout;
use crate::measure::{resolve_size, MeasureSpec};
use crate::widget::Widget;

/// Circular page indicator
#[derive(Debug, Clone)]
pub struct CircleIndicator<C> {
    config: IndicatorConfig<C>,
    size: Size,
    current_index: usize,
    /// Paint position of the selected dot, `None` until first computed.
    selected: Option<(f32, f32)>,
    dirty: bool,
}

impl<C: PixelColor> CircleIndicator<C> {
    /// Create an indicator from a config. The surface starts empty until the
    /// host measures or sizes it.
    ///
    /// # Errors
    ///
    /// Returns an error if the config does not validate.
    pub fn new(config: IndicatorConfig<C>) -> Result<Self, IndicatorError> {
        config.validate()?;
        Ok(Self {
            config,
            size: Size::zero(),
            current_index: 0,
            selected: None,
            dirty: true,
        })
    }

    /// Create an indicator from declarative attributes, see [`crate::attrs`].
    ///
    /// # Errors
    ///
    /// Returns an error if an attribute does not parse or validate.
    pub fn from_attributes(attrs: &[(&str, &str)], density: f32) -> Result<Self, IndicatorError>
    where
        C: IndicatorColor,
    {
        Self::new(parse_attributes(attrs, density)?)
    }

    pub fn config(&self) -> &IndicatorConfig<C> {
        &self.config
    }

    /// Current layout snapshot.
    pub fn layout(&self) -> DotLayout {
        DotLayout::new(&self.config, self.size)
    }

    // ── Driven by the page host ─────────────────────────────────────

    /// A page has settled: move the selected dot onto dot `index`.
    ///
    /// Only marks dirty when the selected dot actually moves, so repeating
    /// the same index is a no-op.
    pub fn set_position(&mut self, index: usize) {
        log::debug!("set_position position = {index}");
        self.current_index = index;
        let center = self.layout().center(index);
        if self.selected != Some(center) {
            self.selected = Some(center);
            self.mark_dirty();
        }
    }

    /// A scroll is in progress from page `index` toward `index + 1`.
    ///
    /// `offset` is in `[0, 1)`. An offset of 0 means the scroll rests on
    /// `index`; negative and non-finite offsets are treated as 0. In
    /// [`Mode::Solo`] the offset never moves the selected dot.
    pub fn set_position_offset(&mut self, index: usize, offset: f32) {
        log::debug!("set_position position = {index}, position_offset = {offset}");
        let offset = if offset.is_finite() { offset.max(0.0) } else { 0.0 };
        if offset <= 0.0 {
            self.current_index = index;
        }

        if self.config.mode == Mode::Solo {
            self.set_position(self.current_index);
            return;
        }

        let layout = self.layout();
        let axis = layout.axis_center(index) + offset * layout.pitch();
        self.selected = Some(layout.point_at(axis));
        self.mark_dirty();
    }

    /// Last settled page index.
    pub fn current_position(&self) -> usize {
        self.current_index
    }

    /// Where the selected dot is painted: the last computed position, or the
    /// center of the current page if none has been computed since the last
    /// geometry change.
    pub fn selected_center(&self) -> (f32, f32) {
        self.selected
            .unwrap_or_else(|| self.layout().center(self.current_index))
    }

    // ── Configuration ───────────────────────────────────────────────

    pub fn count(&self) -> usize {
        self.config.count
    }

    /// # Errors
    ///
    /// [`IndicatorError::InvalidCount`] for 0; the indicator is unchanged.
    pub fn set_count(&mut self, count: usize) -> Result<(), IndicatorError> {
        let count = validate_count(count)?;
        if count != self.config.count {
            self.config.count = count;
            self.geometry_changed();
        }
        Ok(())
    }

    pub fn radius(&self) -> f32 {
        self.config.radius
    }

    /// # Errors
    ///
    /// [`IndicatorError::InvalidRadius`] for a negative or non-finite radius.
    pub fn set_radius(&mut self, radius: f32) -> Result<(), IndicatorError> {
        let radius = validate_radius(radius)?;
        if radius != self.config.radius {
            self.config.radius = radius;
            self.geometry_changed();
        }
        Ok(())
    }

    pub fn margin(&self) -> f32 {
        self.config.margin
    }

    /// # Errors
    ///
    /// [`IndicatorError::InvalidMargin`] for a negative or non-finite margin.
    pub fn set_margin(&mut self, margin: f32) -> Result<(), IndicatorError> {
        let margin = validate_margin(margin)?;
        if margin != self.config.margin {
            self.config.margin = margin;
            self.geometry_changed();
        }
        Ok(())
    }

    pub fn orientation(&self) -> Orientation {
        self.config.orientation
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        if orientation != self.config.orientation {
            self.config.orientation = orientation;
            self.geometry_changed();
        }
    }

    pub fn mode(&self) -> Mode {
        self.config.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        if mode != self.config.mode {
            self.config.mode = mode;
            self.mark_dirty();
        }
    }

    pub fn normal_color(&self) -> C {
        self.config.normal_color
    }

    pub fn set_normal_color(&mut self, color: C) {
        if color != self.config.normal_color {
            self.config.normal_color = color;
            self.mark_dirty();
        }
    }

    pub fn selected_color(&self) -> C {
        self.config.selected_color
    }

    pub fn set_selected_color(&mut self, color: C) {
        if color != self.config.selected_color {
            self.config.selected_color = color;
            self.mark_dirty();
        }
    }

    // ── Layout and drawing ──────────────────────────────────────────

    pub fn size(&self) -> Size {
        self.size
    }

    /// Assign the drawable surface size.
    pub fn set_size(&mut self, size: Size) {
        if size != self.size {
            self.size = size;
            self.geometry_changed();
        }
    }

    /// Resolve host constraints into a surface size and adopt it.
    ///
    /// Exact constraints are taken as-is; anything else keeps the current
    /// extent.
    pub fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
        let size = resolve_size(width, height, self.size);
        self.set_size(size);
        size
    }

    /// Render the dots and the selected dot with the surface origin at (0, 0).
    ///
    /// Use `DrawTargetExt::translated` to place the indicator on a larger
    /// display.
    pub fn render<D: DrawTarget<Color = C>>(&self, display: &mut D) -> Result<(), D::Error> {
        let layout = self.layout();

        let normal_style = PrimitiveStyle::with_fill(self.config.normal_color);
        for index in 0..layout.count {
            layout.dot(index).into_styled(normal_style).draw(display)?;
        }

        let selected = layout.circle_at(self.selected_center());
        match self.config.mode {
            Mode::Inside => {
                // Clip to the union of the dots drawn above
                let color = self.config.selected_color;
                display.draw_iter(
                    selected
                        .points()
                        .filter(|&point| layout.dots_contain(point))
                        .map(|point| Pixel(point, color)),
                )?;
            }
            Mode::Outside | Mode::Solo => {
                selected
                    .into_styled(PrimitiveStyle::with_fill(self.config.selected_color))
                    .draw(display)?;
            }
        }

        Ok(())
    }

    /// Layout inputs changed: the stored selected position is stale and is
    /// recomputed from the current page on the next position update.
    fn geometry_changed(&mut self) {
        log::debug!(
            "indicator geometry changed: count = {}, radius = {}, margin = {}, {:?}, {:?}",
            self.config.count,
            self.config.radius,
            self.config.margin,
            self.config.orientation,
            self.size
        );
        self.selected = None;
        self.mark_dirty();
    }
}

impl<C> Widget for CircleIndicator<C> {
    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
