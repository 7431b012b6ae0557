//! Error types for the indicator
//!
//! A single [`IndicatorError`] covers both configuration setters and the
//! attribute bag parser. Rendering has no error of its own: it propagates the
//! draw target's error type unchanged.
//!
//! ## Example
//!
//! ```
//! use circle_indicator::{Builder, IndicatorError};
//! use embedded_graphics::pixelcolor::Rgb888;
//!
//! let result = Builder::<Rgb888>::new().count(0).build();
//! assert_eq!(result.unwrap_err(), IndicatorError::InvalidCount(0));
//! ```

/// Which kind of attribute value failed to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Integer such as `ci_count`
    Integer,
    /// Dimension such as `8dp`, `12px` or `10`
    Dimension,
    /// Color such as `#444444` or `gray`
    Color,
    /// Display mode name or ordinal
    Mode,
    /// Orientation name or ordinal
    Orientation,
}

impl core::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            ValueKind::Integer => "integer",
            ValueKind::Dimension => "dimension",
            ValueKind::Color => "color",
            ValueKind::Mode => "mode",
            ValueKind::Orientation => "orientation",
        };
        f.write_str(name)
    }
}

/// Errors raised when configuring an indicator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IndicatorError {
    /// Dot count must be at least 1
    InvalidCount(usize),
    /// Radius must be finite and not negative
    InvalidRadius(f32),
    /// Margin must be finite and not negative
    InvalidMargin(f32),
    /// An attribute value could not be parsed
    InvalidAttribute {
        /// Attribute key, e.g. `ci_mode`
        key: &'static str,
        /// What the value was expected to be
        kind: ValueKind,
    },
}

impl core::fmt::Display for IndicatorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            IndicatorError::InvalidCount(count) => {
                write!(f, "Invalid count: {count} (must be at least 1)")
            }
            IndicatorError::InvalidRadius(radius) => {
                write!(f, "Invalid radius: {radius} (must be >= 0)")
            }
            IndicatorError::InvalidMargin(margin) => {
                write!(f, "Invalid margin: {margin} (must be >= 0)")
            }
            IndicatorError::InvalidAttribute { key, kind } => {
                write!(f, "Invalid value for attribute {key}: expected {kind}")
            }
        }
    }
}

impl core::error::Error for IndicatorError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_messages() {
        assert_eq!(
            IndicatorError::InvalidCount(0).to_string(),
            "Invalid count: 0 (must be at least 1)"
        );
        assert_eq!(
            IndicatorError::InvalidAttribute {
                key: "ci_mode",
                kind: ValueKind::Mode,
            }
            .to_string(),
            "Invalid value for attribute ci_mode: expected mode"
        );
    }
}
