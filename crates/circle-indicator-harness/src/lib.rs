//! Host-side scenario test harness for scripted pager gestures.
//!
//! Rebuilds the classic indicator demo screen: a five page pager on top and
//! four indicators below it. Three follow every scroll frame (inside,
//! outside and solo mode), the fourth only follows page selection.

pub mod pager;

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use circle_indicator::{
    Builder, CircleIndicator, IndicatorError, MeasureSpec, Mode, TestDisplay, Widget,
};
use embedded_graphics::{
    mono_font::{ascii::FONT_10X20, MonoTextStyle},
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::{Alignment, Text},
};
use png::{BitDepth, ColorType, Encoder};

pub use pager::{Follow, IndicatorBinding, PagerHost, PagerListener, SETTLE_STEPS};

pub const SCREEN_WIDTH: u32 = 240;
pub const CONTENT_HEIGHT: u32 = 120;
pub const ROW_HEIGHT: u32 = 40;
pub const INDICATOR_HEIGHT: u32 = 30;
pub const PAGE_COUNT: usize = 5;

pub const BACKGROUND: Rgb888 = Rgb888::WHITE;
pub const TEXT_COLOR: Rgb888 = Rgb888::BLACK;
pub const NORMAL_COLOR: Rgb888 = Rgb888::new(0x44, 0x44, 0x44);
pub const SELECTED_COLOR: Rgb888 = Rgb888::new(0xE6, 0x45, 0x4A);

/// Indicator rows on the demo screen, top to bottom.
pub const DEMO_ROWS: [(Mode, Follow); 4] = [
    (Mode::Inside, Follow::Scroll),
    (Mode::Outside, Follow::Scroll),
    (Mode::Solo, Follow::Scroll),
    (Mode::Solo, Follow::Selection),
];

/// Couples pager, indicators, and display for scenario tests.
pub struct ScenarioHarness {
    pager: PagerHost,
    rows: Vec<IndicatorBinding<Rgb888>>,
    display: TestDisplay<Rgb888>,
}

impl ScenarioHarness {
    /// Build the demo screen.
    pub fn demo() -> Result<Self, IndicatorError> {
        let rows = DEMO_ROWS
            .iter()
            .map(|&(mode, follow)| {
                let config = Builder::new()
                    .count(PAGE_COUNT)
                    .radius(6.0)
                    .margin(8.0)
                    .normal_color(NORMAL_COLOR)
                    .selected_color(SELECTED_COLOR)
                    .mode(mode)
                    .build()?;
                let mut indicator = CircleIndicator::new(config)?;
                indicator.measure(
                    MeasureSpec::Exactly(SCREEN_WIDTH),
                    MeasureSpec::Exactly(INDICATOR_HEIGHT),
                );
                Ok::<_, IndicatorError>(IndicatorBinding::new(follow, indicator))
            })
            .collect::<Result<Vec<_>, IndicatorError>>()?;

        Ok(Self::new(PagerHost::new(PAGE_COUNT, SCREEN_WIDTH), rows))
    }

    /// Construct a harness with caller-provided pager and indicator rows.
    pub fn new(pager: PagerHost, rows: Vec<IndicatorBinding<Rgb888>>) -> Self {
        let height = CONTENT_HEIGHT + ROW_HEIGHT * rows.len() as u32;
        Self {
            pager,
            rows,
            display: TestDisplay::new(SCREEN_WIDTH, height, BACKGROUND),
        }
    }

    /// Drag the pager content by `dx` pixels.
    pub fn drag_by(&mut self, dx: f32) {
        self.pager.drag_by(dx, &mut self.rows);
    }

    /// Lift the finger; returns the settled page.
    pub fn release(&mut self) -> usize {
        self.pager.release(&mut self.rows)
    }

    /// Scripted swipe to `page`; returns the settled page.
    pub fn swipe_to(&mut self, page: usize, steps: u32) -> usize {
        self.pager.swipe_to(page, steps, &mut self.rows)
    }

    /// Top-left corner of indicator row `row` on the display.
    pub fn row_origin(row: usize) -> Point {
        Point::new(0, (CONTENT_HEIGHT + ROW_HEIGHT * row as u32) as i32)
    }

    /// Render the pages and every dirty indicator; returns how many
    /// indicators were repainted.
    pub fn render(&mut self) -> usize {
        let content = Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, CONTENT_HEIGHT));
        render_pages(&self.pager, &mut self.display.cropped(&content))
            .expect("scenario render should succeed");

        let mut repainted = 0;
        for (row, binding) in self.rows.iter_mut().enumerate() {
            if !binding.is_dirty() {
                continue;
            }
            let mut target = self.display.translated(Self::row_origin(row));
            Rectangle::new(Point::zero(), binding.indicator.size())
                .into_styled(PrimitiveStyle::with_fill(BACKGROUND))
                .draw(&mut target)
                .expect("scenario render should succeed");
            binding
                .indicator
                .render(&mut target)
                .expect("scenario render should succeed");
            binding.indicator.mark_clean();
            repainted += 1;
        }
        repainted
    }

    /// Access the pager for assertions.
    pub fn pager(&self) -> &PagerHost {
        &self.pager
    }

    /// Access indicator row `row` for assertions.
    pub fn indicator(&self, row: usize) -> &CircleIndicator<Rgb888> {
        &self.rows[row].indicator
    }

    /// Mutable access to indicator row `row` for reconfiguration.
    pub fn indicator_mut(&mut self, row: usize) -> &mut CircleIndicator<Rgb888> {
        &mut self.rows[row].indicator
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Access the display for render assertions.
    pub fn display(&self) -> &TestDisplay<Rgb888> {
        &self.display
    }

    /// Color of the display pixel at `point` inside indicator row `row`.
    pub fn row_pixel(&self, row: usize, point: Point) -> Option<Rgb888> {
        self.display.pixel(Self::row_origin(row) + point)
    }

    /// Save the current framebuffer to an RGB PNG.
    pub fn save_screenshot_png(&self, path: impl AsRef<Path>) -> Result<(), String> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }

        let (width, height) = self.display.dimensions();
        let mut data = Vec::with_capacity((width * height * 3) as usize);
        for pixel in self.display.pixels() {
            data.extend_from_slice(&[pixel.r(), pixel.g(), pixel.b()]);
        }

        let file = File::create(path).map_err(|e| e.to_string())?;
        let writer = BufWriter::new(file);
        let mut encoder = Encoder::new(writer, width, height);
        encoder.set_color(ColorType::Rgb);
        encoder.set_depth(BitDepth::Eight);
        let mut png_writer = encoder.write_header().map_err(|e| e.to_string())?;
        png_writer
            .write_image_data(&data)
            .map_err(|e| e.to_string())
    }
}

/// Each page shows its label, shifted by the current scroll.
fn render_pages<D: DrawTarget<Color = Rgb888>>(
    pager: &PagerHost,
    display: &mut D,
) -> Result<(), D::Error> {
    display.clear(BACKGROUND)?;

    let style = MonoTextStyle::new(&FONT_10X20, TEXT_COLOR);
    let width = pager.page_width() as i32;
    let scroll = pager.scroll() as i32;
    for page in 0..pager.page_count() {
        let left = page as i32 * width - scroll;
        if left >= width || left + width <= 0 {
            continue;
        }
        let label = format!("page {page}");
        Text::with_alignment(
            &label,
            Point::new(left + width / 2, CONTENT_HEIGHT as i32 / 2),
            style,
            Alignment::Center,
        )
        .draw(display)?;
    }
    Ok(())
}
