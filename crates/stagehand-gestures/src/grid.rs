//! Logical-grid to device-pixel coordinate mapping.

use stagehand_protocols::action::COORDINATE_GRID_SIZE;

/// Clamp a grid coordinate to the valid 0-1000 range.
///
/// Models occasionally emit slightly out-of-bounds coordinates; clamping is
/// the documented recovery policy, out-of-range input never errors.
pub fn clamp_grid(value: i64) -> i64 {
    value.clamp(0, COORDINATE_GRID_SIZE)
}

/// Maps the 0-1000 logical grid onto a fixed viewport.
///
/// Pure linear scaling with integer truncation: `normalize(0) == 0` and
/// `normalize(1000) == viewport`. Viewport geometry is fixed for the life
/// of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridMapper {
    viewport_width: u32,
    viewport_height: u32,
}

impl GridMapper {
    pub fn new(viewport_width: u32, viewport_height: u32) -> Self {
        Self {
            viewport_width,
            viewport_height,
        }
    }

    pub fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    pub fn viewport_height(&self) -> u32 {
        self.viewport_height
    }

    /// Convert a grid X coordinate to device pixels.
    pub fn normalize_x(&self, x: i64) -> i64 {
        clamp_grid(x) * i64::from(self.viewport_width) / COORDINATE_GRID_SIZE
    }

    /// Convert a grid Y coordinate to device pixels.
    pub fn normalize_y(&self, y: i64) -> i64 {
        clamp_grid(y) * i64::from(self.viewport_height) / COORDINATE_GRID_SIZE
    }

    /// Convert a grid point to device pixels.
    pub fn normalize(&self, x: i64, y: i64) -> (i64, i64) {
        (self.normalize_x(x), self.normalize_y(y))
    }
}

#[cfg(test)]
#[path = "grid_tests.rs"]
mod tests;
