//! Indicator configuration types and builder

use embedded_graphics::pixelcolor::{BinaryColor, Gray8, PixelColor, Rgb565, Rgb888};

use crate::error::IndicatorError;

/// Default number of dots.
pub const DEFAULT_COUNT: usize = 3;
/// Default dot radius in pixels.
pub const DEFAULT_RADIUS: f32 = 10.0;
/// Default gap between two dots in pixels.
pub const DEFAULT_MARGIN: f32 = 20.0;
/// Default display mode.
pub const DEFAULT_MODE: Mode = Mode::Solo;
/// Default orientation.
pub const DEFAULT_ORIENTATION: Orientation = Orientation::Horizontal;

/// How the selected dot is painted relative to the row of normal dots
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Selected dot is clipped to the footprint of the normal dots
    Inside = 0,
    /// Selected dot is painted on top of the normal dots, unclipped
    Outside = 1,
    /// Selected dot jumps between pages, ignoring scroll offsets
    #[default]
    Solo = 2,
}

impl Mode {
    pub const ALL: [Self; 3] = [Self::Inside, Self::Outside, Self::Solo];

    pub fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            0 => Some(Self::Inside),
            1 => Some(Self::Outside),
            2 => Some(Self::Solo),
            _ => None,
        }
    }

    /// Parse a mode name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(name))
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Inside => "inside",
            Self::Outside => "outside",
            Self::Solo => "solo",
        }
    }
}

/// Axis the dots are laid out along
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Horizontal = 0,
    Vertical = 1,
}

impl Orientation {
    pub const ALL: [Self; 2] = [Self::Horizontal, Self::Vertical];

    pub fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            0 => Some(Self::Horizontal),
            1 => Some(Self::Vertical),
            _ => None,
        }
    }

    /// Parse an orientation name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|orientation| orientation.name().eq_ignore_ascii_case(name))
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

/// Pixel colors the indicator can be drawn with.
///
/// Supplies the gray/black defaults and the conversion used when colors come
/// from the attribute bag as `#RRGGBB`.
pub trait IndicatorColor: PixelColor {
    /// Color of the unselected dots (gray).
    const DEFAULT_NORMAL: Self;
    /// Color of the selected dot (black).
    const DEFAULT_SELECTED: Self;

    /// Convert an opaque 8-bit-per-channel RGB value.
    fn from_rgb(r: u8, g: u8, b: u8) -> Self;
}

impl IndicatorColor for Rgb888 {
    const DEFAULT_NORMAL: Self = Rgb888::new(0x88, 0x88, 0x88);
    const DEFAULT_SELECTED: Self = Rgb888::new(0x00, 0x00, 0x00);

    fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Rgb888::new(r, g, b)
    }
}

impl IndicatorColor for Rgb565 {
    // 0x88 scaled down to 5/6/5 bits
    const DEFAULT_NORMAL: Self = Rgb565::new(0x11, 0x22, 0x11);
    const DEFAULT_SELECTED: Self = Rgb565::new(0, 0, 0);

    fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Rgb565::from(Rgb888::new(r, g, b))
    }
}

impl IndicatorColor for Gray8 {
    const DEFAULT_NORMAL: Self = Gray8::new(0x88);
    const DEFAULT_SELECTED: Self = Gray8::new(0x00);

    fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Gray8::new(luma(r, g, b))
    }
}

/// `On` is ink (black), `Off` is paper (white).
///
/// Two levels cannot hold background, normal and selected apart. The
/// defaults keep gray on paper, so normal dots vanish on an `Off` background
/// and only the selected dot shows. For a full row on paper pick the colors
/// explicitly, e.g. normal `On` with selected `Off` to punch out the current
/// page.
impl IndicatorColor for BinaryColor {
    const DEFAULT_NORMAL: Self = BinaryColor::Off;
    const DEFAULT_SELECTED: Self = BinaryColor::On;

    fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        if luma(r, g, b) < 0x80 {
            BinaryColor::On
        } else {
            BinaryColor::Off
        }
    }
}

/// BT.601 luma, integer approximation.
fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 * 77 + g as u32 * 150 + b as u32 * 29) >> 8) as u8
}

/// Complete indicator configuration
///
/// Use [`Builder`] to create a validated config, or start from
/// [`IndicatorConfig::default`] and let [`IndicatorConfig::validate`] check it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorConfig<C> {
    /// Number of dots, one per page
    pub count: usize,
    /// Dot radius in pixels
    pub radius: f32,
    /// Gap between the edges of two adjacent dots in pixels
    pub margin: f32,
    /// Color of the unselected dots
    pub normal_color: C,
    /// Color of the selected dot
    pub selected_color: C,
    /// Layout axis
    pub orientation: Orientation,
    /// Selected dot painting mode
    pub mode: Mode,
}

impl<C: IndicatorColor> Default for IndicatorConfig<C> {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            radius: DEFAULT_RADIUS,
            margin: DEFAULT_MARGIN,
            normal_color: C::DEFAULT_NORMAL,
            selected_color: C::DEFAULT_SELECTED,
            orientation: DEFAULT_ORIENTATION,
            mode: DEFAULT_MODE,
        }
    }
}

impl<C> IndicatorConfig<C> {
    /// Check count, radius and margin.
    ///
    /// # Errors
    ///
    /// Returns the first invalid value found, in that order.
    pub fn validate(&self) -> Result<(), IndicatorError> {
        validate_count(self.count)?;
        validate_radius(self.radius)?;
        validate_margin(self.margin)?;
        Ok(())
    }
}

pub(crate) fn validate_count(count: usize) -> Result<usize, IndicatorError> {
    if count == 0 {
        return Err(IndicatorError::InvalidCount(count));
    }
    Ok(count)
}

pub(crate) fn validate_radius(radius: f32) -> Result<f32, IndicatorError> {
    if !radius.is_finite() || radius < 0.0 {
        return Err(IndicatorError::InvalidRadius(radius));
    }
    Ok(radius)
}

pub(crate) fn validate_margin(margin: f32) -> Result<f32, IndicatorError> {
    if !margin.is_finite() || margin < 0.0 {
        return Err(IndicatorError::InvalidMargin(margin));
    }
    Ok(margin)
}

/// Builder for constructing an indicator configuration
///
/// # Example
///
/// ```
/// use circle_indicator::{Builder, Mode, Orientation};
/// use embedded_graphics::pixelcolor::Rgb888;
///
/// let config = Builder::<Rgb888>::new()
///     .count(5)
///     .radius(8.0)
///     .margin(8.0)
///     .mode(Mode::Outside)
///     .orientation(Orientation::Horizontal)
///     .build()
///     .expect("valid configuration");
/// assert_eq!((config.count, config.radius, config.margin), (5, 8.0, 8.0));
/// ```
pub struct Builder<C> {
    config: IndicatorConfig<C>,
}

impl<C: IndicatorColor> Default for Builder<C> {
    fn default() -> Self {
        Self {
            config: IndicatorConfig::default(),
        }
    }
}

impl<C: IndicatorColor> Builder<C> {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C> Builder<C> {
    /// Set the number of dots
    pub fn count(mut self, count: usize) -> Self {
        self.config.count = count;
        self
    }

    /// Set the dot radius
    pub fn radius(mut self, radius: f32) -> Self {
        self.config.radius = radius;
        self
    }

    /// Set the gap between two dots
    pub fn margin(mut self, margin: f32) -> Self {
        self.config.margin = margin;
        self
    }

    /// Set the color of the unselected dots
    pub fn normal_color(mut self, color: C) -> Self {
        self.config.normal_color = color;
        self
    }

    /// Set the color of the selected dot
    pub fn selected_color(mut self, color: C) -> Self {
        self.config.selected_color = color;
        self
    }

    /// Set the layout axis
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.config.orientation = orientation;
        self
    }

    /// Set the painting mode
    pub fn mode(mut self, mode: Mode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if count is 0 or radius/margin is negative or not finite
    pub fn build(self) -> Result<IndicatorConfig<C>, IndicatorError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::pixelcolor::GrayColor;

    #[test]
    fn defaults_match_attribute_defaults() {
        let config = IndicatorConfig::<Rgb888>::default();
        assert_eq!(config.count, 3);
        assert_eq!(config.radius, 10.0);
        assert_eq!(config.margin, 20.0);
        assert_eq!(config.mode, Mode::Solo);
        assert_eq!(config.orientation, Orientation::Horizontal);
        assert_eq!(config.normal_color, Rgb888::new(0x88, 0x88, 0x88));
        assert_eq!(config.selected_color, Rgb888::new(0, 0, 0));
    }

    #[test]
    fn builder_rejects_invalid_values() {
        assert_eq!(
            Builder::<Rgb888>::new().count(0).build(),
            Err(IndicatorError::InvalidCount(0))
        );
        assert_eq!(
            Builder::<Rgb888>::new().radius(-1.0).build(),
            Err(IndicatorError::InvalidRadius(-1.0))
        );
        assert_eq!(
            Builder::<Rgb888>::new().margin(-0.5).build(),
            Err(IndicatorError::InvalidMargin(-0.5))
        );
        assert!(Builder::<Rgb888>::new().radius(f32::NAN).build().is_err());
    }

    #[test]
    fn zero_radius_and_margin_are_valid() {
        let config = Builder::<Gray8>::new()
            .radius(0.0)
            .margin(0.0)
            .build()
            .unwrap();
        assert_eq!((config.radius, config.margin), (0.0, 0.0));
    }

    #[test]
    fn mode_parsing() {
        assert_eq!(Mode::from_name("INSIDE"), Some(Mode::Inside));
        assert_eq!(Mode::from_name("outside"), Some(Mode::Outside));
        assert_eq!(Mode::from_name("Solo"), Some(Mode::Solo));
        assert_eq!(Mode::from_name("both"), None);
        assert_eq!(Mode::from_ordinal(1), Some(Mode::Outside));
        assert_eq!(Mode::from_ordinal(3), None);
        for mode in Mode::ALL {
            assert_eq!(Mode::from_ordinal(mode.ordinal()), Some(mode));
        }
    }

    #[test]
    fn orientation_parsing() {
        assert_eq!(
            Orientation::from_name("Vertical"),
            Some(Orientation::Vertical)
        );
        assert_eq!(Orientation::from_name("diagonal"), None);
        assert_eq!(Orientation::from_ordinal(0), Some(Orientation::Horizontal));
        assert_eq!(Orientation::from_ordinal(2), None);
    }

    #[test]
    fn color_conversion() {
        assert_eq!(BinaryColor::from_rgb(0x44, 0x44, 0x44), BinaryColor::On);
        assert_eq!(BinaryColor::from_rgb(0xFF, 0xFF, 0xFF), BinaryColor::Off);
        assert_eq!(Gray8::from_rgb(0xFF, 0xFF, 0xFF).luma(), 0xFF);
        assert_eq!(Gray8::from_rgb(0, 0, 0).luma(), 0);
        assert_eq!(Rgb565::from_rgb(0, 0, 0), Rgb565::DEFAULT_SELECTED);
    }
}
