//! Size negotiation between a host layout pass and a widget.

use embedded_graphics::prelude::Size;

/// Constraint a host places on one extent of a widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MeasureSpec {
    /// The widget must be exactly this many pixels.
    Exactly(u32),
    /// The widget may be up to this many pixels.
    AtMost(u32),
    /// No constraint.
    #[default]
    Unspecified,
}

impl MeasureSpec {
    /// Resolve against the current extent: only an exact constraint changes it.
    pub fn resolve(self, current: u32) -> u32 {
        match self {
            MeasureSpec::Exactly(extent) => extent,
            MeasureSpec::AtMost(_) | MeasureSpec::Unspecified => current,
        }
    }
}

/// Resolve both extents against the current size.
pub fn resolve_size(width: MeasureSpec, height: MeasureSpec, current: Size) -> Size {
    Size::new(width.resolve(current.width), height.resolve(current.height))
}
