use circle_indicator::{Mode, Widget};
use circle_indicator_harness::{
    ScenarioHarness, BACKGROUND, INDICATOR_HEIGHT, NORMAL_COLOR, PAGE_COUNT, SCREEN_WIDTH,
    SELECTED_COLOR,
};
use embedded_graphics::prelude::Point;

// Five dots, radius 6, margin 8 on a 240 px row: centers at 80, 100, ..., 160
const FIRST_DOT_X: f32 = 80.0;
const PITCH: f32 = 20.0;
const ROW_CENTER_Y: f32 = INDICATOR_HEIGHT as f32 / 2.0;

const INSIDE: usize = 0;
const OUTSIDE: usize = 1;
const SOLO: usize = 2;
const ON_SELECTION: usize = 3;

fn dot_x(page: usize) -> f32 {
    FIRST_DOT_X + page as f32 * PITCH
}

fn setup_harness() -> ScenarioHarness {
    let mut harness = ScenarioHarness::demo().expect("demo config is valid");
    assert_eq!(harness.render(), harness.row_count());
    harness
}

#[test]
fn demo_rows_match_modes() {
    let harness = setup_harness();
    assert_eq!(harness.indicator(INSIDE).mode(), Mode::Inside);
    assert_eq!(harness.indicator(OUTSIDE).mode(), Mode::Outside);
    assert_eq!(harness.indicator(SOLO).mode(), Mode::Solo);
    assert_eq!(harness.indicator(ON_SELECTION).mode(), Mode::Solo);
    for row in 0..harness.row_count() {
        let indicator = harness.indicator(row);
        assert_eq!(indicator.count(), PAGE_COUNT);
        assert_eq!(indicator.size().width, SCREEN_WIDTH);
        assert_eq!(indicator.selected_center(), (dot_x(0), ROW_CENTER_Y));
    }
}

#[test]
fn half_drag_moves_only_interpolating_rows() {
    let mut harness = setup_harness();

    harness.drag_by(SCREEN_WIDTH as f32 / 2.0);

    let halfway = (dot_x(0) + PITCH / 2.0, ROW_CENTER_Y);
    assert_eq!(harness.indicator(INSIDE).selected_center(), halfway);
    assert_eq!(harness.indicator(OUTSIDE).selected_center(), halfway);
    assert_eq!(harness.indicator(SOLO).selected_center(), (dot_x(0), ROW_CENTER_Y));
    assert_eq!(
        harness.indicator(ON_SELECTION).selected_center(),
        (dot_x(0), ROW_CENTER_Y)
    );

    // Solo stores its resting center without moving; the selection row saw nothing
    assert!(harness.indicator(INSIDE).is_dirty());
    assert!(harness.indicator(OUTSIDE).is_dirty());
    assert_eq!(harness.render(), 3);

    let between = Point::new(halfway.0 as i32, halfway.1 as i32);
    assert_eq!(harness.row_pixel(OUTSIDE, between), Some(SELECTED_COLOR));
    assert_eq!(harness.row_pixel(INSIDE, between), Some(BACKGROUND));

    let first_dot = Point::new(dot_x(0) as i32, ROW_CENTER_Y as i32);
    assert_eq!(harness.row_pixel(SOLO, first_dot), Some(SELECTED_COLOR));
    assert_eq!(harness.row_pixel(INSIDE, first_dot), Some(NORMAL_COLOR));
}

#[test]
fn swipes_settle_every_row_on_the_target_page() {
    let mut harness = setup_harness();

    for &page in &[1, 2, 4, 3, 0] {
        assert_eq!(harness.swipe_to(page, 6), page);
        harness.render();

        let settled = (dot_x(page), ROW_CENTER_Y);
        for row in 0..harness.row_count() {
            assert_eq!(harness.indicator(row).selected_center(), settled, "row {row}");
            assert_eq!(harness.indicator(row).current_position(), page, "row {row}");
            assert!(!harness.indicator(row).is_dirty());

            let center = Point::new(settled.0 as i32, settled.1 as i32);
            assert_eq!(harness.row_pixel(row, center), Some(SELECTED_COLOR));
        }
    }
}

#[test]
fn selection_row_ignores_scroll_frames() {
    let mut harness = setup_harness();

    harness.drag_by(SCREEN_WIDTH as f32 * 1.25);
    assert_eq!(harness.indicator(ON_SELECTION).current_position(), 0);
    // Solo only settles once the scroll rests on a page
    assert_eq!(harness.indicator(SOLO).current_position(), 0);

    assert_eq!(harness.release(), 1);
    assert_eq!(harness.pager().selected_page(), 1);
    assert_eq!(harness.indicator(ON_SELECTION).current_position(), 1);
    assert_eq!(harness.indicator(SOLO).current_position(), 1);
}

#[test]
fn reconfiguring_a_row_repaints_only_that_row() {
    let mut harness = setup_harness();
    assert_eq!(harness.render(), 0);

    harness
        .indicator_mut(OUTSIDE)
        .set_count(3)
        .expect("count is valid");
    assert_eq!(harness.render(), 1);

    // Three dots now: 100, 120, 140; the last one is normal colored
    let last_dot = Point::new(140, ROW_CENTER_Y as i32);
    assert_eq!(harness.row_pixel(OUTSIDE, last_dot), Some(NORMAL_COLOR));
    let old_last_dot = Point::new(160, ROW_CENTER_Y as i32);
    assert_eq!(harness.row_pixel(OUTSIDE, old_last_dot), Some(BACKGROUND));
}
