//! Declarative configuration from a key/value attribute bag.
//!
//! Layout markup hands the indicator its attributes as strings:
//!
//! ```text
//! app:ci_mode="outside"
//! app:ci_orientation="horizontal"
//! app:ci_radius="8dp"
//! app:ci_count="5"
//! app:ci_margin="8dp"
//! app:ci_normalColor="#444444"
//! app:ci_selectedColor="#ffe6454a"
//! ```
//!
//! Missing keys keep their defaults, unknown keys are skipped, and a value
//! that does not parse fails the whole bag.

use crate::config::{IndicatorColor, IndicatorConfig, Mode, Orientation};
use crate::error::{IndicatorError, ValueKind};
use crate::geometry::round_px;

pub const ATTR_MODE: &str = "ci_mode";
pub const ATTR_ORIENTATION: &str = "ci_orientation";
pub const ATTR_COUNT: &str = "ci_count";
pub const ATTR_RADIUS: &str = "ci_radius";
pub const ATTR_MARGIN: &str = "ci_margin";
pub const ATTR_NORMAL_COLOR: &str = "ci_normalColor";
pub const ATTR_SELECTED_COLOR: &str = "ci_selectedColor";

/// Named colors accepted besides hex notation.
const NAMED_COLORS: &[(&str, u32)] = &[
    ("black", 0x000000),
    ("darkgray", 0x444444),
    ("darkgrey", 0x444444),
    ("gray", 0x888888),
    ("grey", 0x888888),
    ("lightgray", 0xCCCCCC),
    ("lightgrey", 0xCCCCCC),
    ("white", 0xFFFFFF),
    ("red", 0xFF0000),
    ("green", 0x00FF00),
    ("blue", 0x0000FF),
    ("yellow", 0xFFFF00),
    ("cyan", 0x00FFFF),
    ("magenta", 0xFF00FF),
];

/// Build a validated config from attribute pairs.
///
/// `density` converts `dp` dimensions to pixels. Keys may carry a namespace
/// prefix (`app:ci_count`).
///
/// # Errors
///
/// [`IndicatorError::InvalidAttribute`] for a value that does not parse, or
/// the usual validation errors for a parsed count/radius/margin out of range.
pub fn parse_attributes<C: IndicatorColor>(
    attrs: &[(&str, &str)],
    density: f32,
) -> Result<IndicatorConfig<C>, IndicatorError> {
    let density = if density.is_finite() && density > 0.0 {
        density
    } else {
        log::warn!("invalid density {density}, using 1.0");
        1.0
    };

    let mut config = IndicatorConfig::<C>::default();
    for &(key, value) in attrs {
        let name = key.rsplit_once(':').map_or(key, |(_, name)| name);
        let value = value.trim();
        match name {
            ATTR_MODE => {
                config.mode = parse_mode(value).ok_or(invalid(ATTR_MODE, ValueKind::Mode))?;
            }
            ATTR_ORIENTATION => {
                config.orientation = parse_orientation(value)
                    .ok_or(invalid(ATTR_ORIENTATION, ValueKind::Orientation))?;
            }
            ATTR_COUNT => {
                config.count = value
                    .parse()
                    .map_err(|_| invalid(ATTR_COUNT, ValueKind::Integer))?;
            }
            ATTR_RADIUS => {
                config.radius = parse_dimension(value, density)
                    .ok_or(invalid(ATTR_RADIUS, ValueKind::Dimension))?;
            }
            ATTR_MARGIN => {
                config.margin = parse_dimension(value, density)
                    .ok_or(invalid(ATTR_MARGIN, ValueKind::Dimension))?;
            }
            ATTR_NORMAL_COLOR => {
                config.normal_color =
                    parse_color(value).ok_or(invalid(ATTR_NORMAL_COLOR, ValueKind::Color))?;
            }
            ATTR_SELECTED_COLOR => {
                config.selected_color =
                    parse_color(value).ok_or(invalid(ATTR_SELECTED_COLOR, ValueKind::Color))?;
            }
            _ => log::warn!("ignoring unknown indicator attribute {key}"),
        }
    }

    config.validate()?;
    Ok(config)
}

fn invalid(key: &'static str, kind: ValueKind) -> IndicatorError {
    IndicatorError::InvalidAttribute { key, kind }
}

/// Mode by name or by ordinal.
pub fn parse_mode(value: &str) -> Option<Mode> {
    match value.parse::<u8>() {
        Ok(ordinal) => Mode::from_ordinal(ordinal),
        Err(_) => Mode::from_name(value),
    }
}

/// Orientation by name or by ordinal.
pub fn parse_orientation(value: &str) -> Option<Orientation> {
    match value.parse::<u8>() {
        Ok(ordinal) => Orientation::from_ordinal(ordinal),
        Err(_) => Orientation::from_name(value),
    }
}

/// Parse `8dp`, `8dip`, `12px` or a bare number into whole pixels.
///
/// Rounds to the nearest pixel; a non-zero size never collapses to 0.
pub fn parse_dimension(value: &str, density: f32) -> Option<f32> {
    let (number, scale) = if let Some(number) = value.strip_suffix("dip") {
        (number, density)
    } else if let Some(number) = value.strip_suffix("dp") {
        (number, density)
    } else if let Some(number) = value.strip_suffix("px") {
        (number, 1.0)
    } else {
        (value, 1.0)
    };

    let number: f32 = number.trim().parse().ok()?;
    if !number.is_finite() {
        return None;
    }

    let scaled = number * scale;
    let pixels = match round_px(scaled) {
        0 if scaled > 0.0 => 1,
        0 if scaled < 0.0 => -1,
        rounded => rounded,
    };
    Some(pixels as f32)
}

/// Parse `#RGB`, `#ARGB`, `#RRGGBB`, `#AARRGGBB` or a named color.
///
/// Alpha is dropped, indicator colors are opaque.
pub fn parse_color<C: IndicatorColor>(value: &str) -> Option<C> {
    let rgb = match value.strip_prefix('#') {
        Some(hex) => parse_hex(hex)?,
        None => NAMED_COLORS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(value))
            .map(|&(_, rgb)| rgb)?,
    };

    let [_, r, g, b] = rgb.to_be_bytes();
    Some(C::from_rgb(r, g, b))
}

fn parse_hex(hex: &str) -> Option<u32> {
    if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let raw = u32::from_str_radix(hex, 16).ok()?;
    match hex.len() {
        // Short forms repeat each nibble
        3 | 4 => {
            let r = (raw >> 8) & 0xF;
            let g = (raw >> 4) & 0xF;
            let b = raw & 0xF;
            Some(((r * 0x11) << 16) | ((g * 0x11) << 8) | (b * 0x11))
        }
        6 | 8 => Some(raw & 0x00FF_FFFF),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::pixelcolor::{BinaryColor, Rgb888};

    #[test]
    fn empty_bag_uses_defaults() {
        let config = parse_attributes::<Rgb888>(&[], 1.0).unwrap();
        assert_eq!(config, IndicatorConfig::default());
    }

    #[test]
    fn full_bag_from_layout_markup() {
        let attrs = [
            ("app:ci_mode", "outside"),
            ("app:ci_orientation", "horizontal"),
            ("app:ci_radius", "8dp"),
            ("app:ci_count", "5"),
            ("app:ci_margin", "8dp"),
            ("app:ci_normalColor", "#444444"),
            ("app:ci_selectedColor", "#ffe6454a"),
            ("android:layout_height", "30dp"),
        ];
        let config = parse_attributes::<Rgb888>(&attrs, 2.0).unwrap();
        assert_eq!(config.mode, Mode::Outside);
        assert_eq!(config.orientation, Orientation::Horizontal);
        assert_eq!(config.count, 5);
        assert_eq!(config.radius, 16.0);
        assert_eq!(config.margin, 16.0);
        assert_eq!(config.normal_color, Rgb888::new(0x44, 0x44, 0x44));
        assert_eq!(config.selected_color, Rgb888::new(0xe6, 0x45, 0x4a));
    }

    #[test]
    fn enums_accept_ordinals() {
        let attrs = [(ATTR_MODE, "0"), (ATTR_ORIENTATION, "1")];
        let config = parse_attributes::<Rgb888>(&attrs, 1.0).unwrap();
        assert_eq!(config.mode, Mode::Inside);
        assert_eq!(config.orientation, Orientation::Vertical);
    }

    #[test]
    fn out_of_range_ordinals_fail() {
        assert_eq!(
            parse_attributes::<Rgb888>(&[(ATTR_MODE, "3")], 1.0),
            Err(IndicatorError::InvalidAttribute {
                key: ATTR_MODE,
                kind: ValueKind::Mode,
            })
        );
        assert_eq!(
            parse_attributes::<Rgb888>(&[(ATTR_ORIENTATION, "diagonal")], 1.0),
            Err(IndicatorError::InvalidAttribute {
                key: ATTR_ORIENTATION,
                kind: ValueKind::Orientation,
            })
        );
    }

    #[test]
    fn count_is_validated() {
        assert_eq!(
            parse_attributes::<Rgb888>(&[(ATTR_COUNT, "0")], 1.0),
            Err(IndicatorError::InvalidCount(0))
        );
        assert_eq!(
            parse_attributes::<Rgb888>(&[(ATTR_COUNT, "-2")], 1.0),
            Err(IndicatorError::InvalidAttribute {
                key: ATTR_COUNT,
                kind: ValueKind::Integer,
            })
        );
    }

    #[test]
    fn dimensions() {
        assert_eq!(parse_dimension("10", 3.0), Some(10.0));
        assert_eq!(parse_dimension("10px", 3.0), Some(10.0));
        assert_eq!(parse_dimension("10dp", 3.0), Some(30.0));
        assert_eq!(parse_dimension("10dip", 1.5), Some(15.0));
        assert_eq!(parse_dimension("2.5dp", 1.0), Some(3.0));
        assert_eq!(parse_dimension("0.1dp", 1.0), Some(1.0));
        assert_eq!(parse_dimension("0dp", 1.0), Some(0.0));
        assert_eq!(parse_dimension("-1dp", 1.0), Some(-1.0));
        assert_eq!(parse_dimension("ten", 1.0), None);
        assert_eq!(parse_dimension("", 1.0), None);
    }

    #[test]
    fn negative_radius_is_rejected_after_parsing() {
        assert_eq!(
            parse_attributes::<Rgb888>(&[(ATTR_RADIUS, "-4")], 1.0),
            Err(IndicatorError::InvalidRadius(-4.0))
        );
    }

    #[test]
    fn colors() {
        assert_eq!(parse_color::<Rgb888>("#444444"), Some(Rgb888::new(0x44, 0x44, 0x44)));
        assert_eq!(parse_color::<Rgb888>("#FFE6454A"), Some(Rgb888::new(0xE6, 0x45, 0x4A)));
        assert_eq!(parse_color::<Rgb888>("#f80"), Some(Rgb888::new(0xFF, 0x88, 0x00)));
        assert_eq!(parse_color::<Rgb888>("#8f80"), Some(Rgb888::new(0xFF, 0x88, 0x00)));
        assert_eq!(parse_color::<Rgb888>("Gray"), Some(Rgb888::new(0x88, 0x88, 0x88)));
        assert_eq!(parse_color::<BinaryColor>("black"), Some(BinaryColor::On));
        assert_eq!(parse_color::<Rgb888>("#12345"), None);
        assert_eq!(parse_color::<Rgb888>("#+12345"), None);
        assert_eq!(parse_color::<Rgb888>("chartreuse"), None);
        assert_eq!(
            parse_attributes::<Rgb888>(&[(ATTR_NORMAL_COLOR, "#zzzzzz")], 1.0),
            Err(IndicatorError::InvalidAttribute {
                key: ATTR_NORMAL_COLOR,
                kind: ValueKind::Color,
            })
        );
    }

    #[test]
    fn bad_density_falls_back_to_one() {
        let config = parse_attributes::<Rgb888>(&[(ATTR_RADIUS, "4dp")], 0.0).unwrap();
        assert_eq!(config.radius, 4.0);
    }
}
