//! Gesture synthesis.
//!
//! Pure functions building pointer-event sequences from device-pixel
//! coordinates and timing parameters. Nothing here touches the device and
//! nothing retries; the executor owns dispatch and failure capture.

use stagehand_protocols::pointer::PointerSequence;

/// Pause between the two taps of a double tap.
pub const DOUBLE_TAP_PAUSE_MS: u64 = 100;

/// Hold duration of each tap inside a double tap.
pub const DOUBLE_TAP_HOLD_MS: u64 = 50;

/// Base finger separation for pinch gestures, in pixels.
///
/// Fixed regardless of viewport size; may under- or over-shoot on very
/// small or large screens. Kept as the documented default pending
/// device-aware parameterization.
pub const PINCH_BASE_DISTANCE_PX: i64 = 100;

/// Finger circle radius for rotate gestures, in pixels.
pub const ROTATE_RADIUS_PX: i64 = 80;

/// Target interpolation rate for swipes.
const SWIPE_STEPS_PER_SECOND: u64 = 60;

/// Minimum interpolation steps for any swipe.
const MIN_SWIPE_STEPS: u64 = 10;

/// Interpolation steps for a scroll drag.
const SCROLL_DRAG_STEPS: i64 = 10;

/// Pause between scroll drag steps.
const SCROLL_DRAG_PAUSE_MS: u64 = 30;

/// Press, hold, release at a single point.
pub fn tap(x: i64, y: i64, duration_ms: u64) -> PointerSequence {
    PointerSequence::new("finger1")
        .move_to(x, y, 0)
        .down()
        .pause(duration_ms)
        .up()
}

/// Two short taps separated by a brief pause.
pub fn double_tap(x: i64, y: i64) -> PointerSequence {
    PointerSequence::new("finger1")
        .move_to(x, y, 0)
        .down()
        .pause(DOUBLE_TAP_HOLD_MS)
        .up()
        .pause(DOUBLE_TAP_PAUSE_MS)
        .down()
        .pause(DOUBLE_TAP_HOLD_MS)
        .up()
}

/// Press and hold for the requested duration.
pub fn long_press(x: i64, y: i64, duration_ms: u64) -> PointerSequence {
    PointerSequence::new("finger1")
        .move_to(x, y, 0)
        .down()
        .pause(duration_ms)
        .up()
}

/// Press at the start point, move linearly to the end point over the
/// requested duration, release.
///
/// Interpolation is linear in both time and space at ~60 steps/second with
/// a floor of 10 steps; real UI frameworks sample pointer position during
/// movement, so the step cadence determines perceived velocity.
pub fn swipe(
    start_x: i64,
    start_y: i64,
    end_x: i64,
    end_y: i64,
    duration_ms: u64,
) -> PointerSequence {
    let steps = (duration_ms * SWIPE_STEPS_PER_SECOND / 1000).max(MIN_SWIPE_STEPS);
    let step_pause = duration_ms / steps;

    let mut seq = PointerSequence::new("finger1")
        .move_to(start_x, start_y, 0)
        .down();

    for i in 1..=steps {
        let progress = i as f64 / steps as f64;
        let x = start_x + ((end_x - start_x) as f64 * progress) as i64;
        let y = start_y + ((end_y - start_y) as f64 * progress) as i64;
        seq = seq.move_to(x, y, 0).pause(step_pause);
    }

    seq.up()
}

/// Two fingers moving symmetrically along the horizontal axis through a
/// center point.
///
/// `scale` is the multiplicative relationship between end and start
/// separation: below 1.0 the fingers start at the base distance and
/// converge (zoom out); at or above 1.0 they start close and diverge to
/// the base distance (zoom in).
pub fn pinch(center_x: i64, center_y: i64, scale: f64, duration_ms: u64) -> [PointerSequence; 2] {
    let (start_distance, end_distance) = if scale < 1.0 {
        (
            PINCH_BASE_DISTANCE_PX,
            (PINCH_BASE_DISTANCE_PX as f64 * scale) as i64,
        )
    } else {
        (
            (PINCH_BASE_DISTANCE_PX as f64 / scale) as i64,
            PINCH_BASE_DISTANCE_PX,
        )
    };

    let finger = |id: &str, side: i64| {
        PointerSequence::new(id)
            .move_to(center_x + side * start_distance, center_y, 0)
            .down()
            .move_to(center_x + side * end_distance, center_y, duration_ms)
            .up()
    };

    [finger("finger1", -1), finger("finger2", 1)]
}

/// Two fingers on opposite ends of a fixed-radius circle, both rotated by
/// `angle_deg` (positive = clockwise) over the gesture duration.
pub fn rotate(
    center_x: i64,
    center_y: i64,
    angle_deg: f64,
    duration_ms: u64,
) -> [PointerSequence; 2] {
    let angle_rad = angle_deg.to_radians();
    let radius = ROTATE_RADIUS_PX as f64;

    let finger = |id: &str, start_angle: f64| {
        let start_x = center_x + (radius * start_angle.cos()) as i64;
        let start_y = center_y + (radius * start_angle.sin()) as i64;
        let end_x = center_x + (radius * (start_angle + angle_rad).cos()) as i64;
        let end_y = center_y + (radius * (start_angle + angle_rad).sin()) as i64;
        PointerSequence::new(id)
            .move_to(start_x, start_y, 0)
            .down()
            .move_to(end_x, end_y, duration_ms)
            .up()
    };

    [finger("finger1", 0.0), finger("finger2", std::f64::consts::PI)]
}

/// Drag from `(x, y)` by the scroll deltas, interpolated over ten steps.
///
/// Scroll deltas follow the desktop convention: a positive `scroll_y`
/// means scroll down, which drags the contact upward.
pub fn scroll_drag(x: i64, y: i64, scroll_x: i64, scroll_y: i64) -> PointerSequence {
    let end_x = x - scroll_x;
    let end_y = y - scroll_y;

    let mut seq = PointerSequence::new("finger1").move_to(x, y, 0).down();

    for i in 1..=SCROLL_DRAG_STEPS {
        let progress = i as f64 / SCROLL_DRAG_STEPS as f64;
        let cx = x + ((end_x - x) as f64 * progress) as i64;
        let cy = y + ((end_y - y) as f64 * progress) as i64;
        seq = seq.move_to(cx, cy, 0).pause(SCROLL_DRAG_PAUSE_MS);
    }

    seq.up()
}

#[cfg(test)]
#[path = "synth_tests.rs"]
mod tests;
