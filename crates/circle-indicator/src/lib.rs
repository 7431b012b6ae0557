//! Circular page indicator widget for embedded-graphics displays.
//! Works on microcontrollers, WASM, and desktop.
//!
//! ```
//! use circle_indicator::{Builder, CircleIndicator, Mode, Widget};
//! use embedded_graphics::{pixelcolor::Rgb888, prelude::*};
//!
//! let config = Builder::<Rgb888>::new()
//!     .count(5)
//!     .radius(8.0)
//!     .margin(8.0)
//!     .mode(Mode::Inside)
//!     .build()?;
//! let mut indicator = CircleIndicator::new(config)?;
//! indicator.set_size(Size::new(120, 30));
//!
//! // Halfway from page 1 to page 2
//! indicator.set_position_offset(1, 0.5);
//! assert_eq!(indicator.selected_center(), (48.0, 15.0));
//! assert!(indicator.is_dirty());
//! # Ok::<(), circle_indicator::IndicatorError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![cfg_attr(
    not(test),
    deny(
        clippy::expect_used,
        clippy::panic,
        clippy::todo,
        clippy::unimplemented,
        clippy::unreachable,
        clippy::unwrap_used
    )
)]

extern crate alloc;

pub mod attrs;
pub mod config;
pub mod error;
pub mod geometry;
pub mod indicator;
pub mod measure;
pub mod test_display;
pub mod widget;

pub use config::{
    Builder, IndicatorColor, IndicatorConfig, Mode, Orientation, DEFAULT_COUNT, DEFAULT_MARGIN,
    DEFAULT_MODE, DEFAULT_ORIENTATION, DEFAULT_RADIUS,
};
pub use error::{IndicatorError, ValueKind};
pub use geometry::DotLayout;
pub use indicator::CircleIndicator;
pub use measure::MeasureSpec;
pub use test_display::TestDisplay;
pub use widget::Widget;
