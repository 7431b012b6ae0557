//! Test display that allows pixel overdraw.
//!
//! `MockDisplay` from embedded-graphics panics when a pixel is drawn twice,
//! which doesn't work for the indicator: the selected dot is always painted
//! over a normal dot. This framebuffer allows overdraw and lets tests and the
//! scenario harness read pixels back.

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;

use embedded_graphics::{pixelcolor::PixelColor, prelude::*};

/// Simple framebuffer display for tests that allows overdraw.
pub struct TestDisplay<C> {
    pixels: Vec<C>,
    width: u32,
    height: u32,
}

impl<C: PixelColor> TestDisplay<C> {
    /// Create a new test display filled with `background`.
    pub fn new(width: u32, height: u32, background: C) -> Self {
        Self {
            pixels: vec![background; (width * height) as usize],
            width,
            height,
        }
    }

    /// Fill the whole framebuffer with `color`.
    pub fn fill(&mut self, color: C) {
        self.pixels.fill(color);
    }

    /// Color at `point`, or `None` outside the framebuffer.
    pub fn pixel(&self, point: Point) -> Option<C> {
        self.index(point).map(|idx| self.pixels[idx])
    }

    /// Row-major pixel colors.
    pub fn pixels(&self) -> impl Iterator<Item = C> + '_ {
        self.pixels.iter().copied()
    }

    /// Number of pixels currently set to `color`.
    pub fn count(&self, color: C) -> usize {
        self.pixels.iter().filter(|&&pixel| pixel == color).count()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn index(&self, point: Point) -> Option<usize> {
        if point.x >= 0
            && point.y >= 0
            && (point.x as u32) < self.width
            && (point.y as u32) < self.height
        {
            Some((point.y as u32 * self.width + point.x as u32) as usize)
        } else {
            None
        }
    }
}

impl<C: PixelColor> DrawTarget for TestDisplay<C> {
    type Color = C;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            if let Some(idx) = self.index(coord) {
                self.pixels[idx] = color;
            }
        }
        Ok(())
    }
}

impl<C> OriginDimensions for TestDisplay<C> {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}
