//! Pointer-event wire format for synthesized gestures.
//!
//! A gesture is one or more [`PointerSequence`] values, each describing a
//! single contact. Device adapters translate sequences into their native
//! input API (e.g. W3C Actions).

use serde::{Deserialize, Serialize};

/// One step in a pointer sequence. Coordinates are device pixels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PointerEvent {
    /// Move the contact to a position, taking `duration_ms` to get there.
    Move { x: i64, y: i64, duration_ms: u64 },
    Down,
    Up,
    Pause { duration_ms: u64 },
}

/// Ordered events for a single named contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerSequence {
    /// Contact identifier, e.g. `finger1`.
    pub pointer: String,
    pub events: Vec<PointerEvent>,
}

impl PointerSequence {
    pub fn new(pointer: impl Into<String>) -> Self {
        Self {
            pointer: pointer.into(),
            events: Vec::new(),
        }
    }

    pub fn move_to(mut self, x: i64, y: i64, duration_ms: u64) -> Self {
        self.events.push(PointerEvent::Move { x, y, duration_ms });
        self
    }

    pub fn down(mut self) -> Self {
        self.events.push(PointerEvent::Down);
        self
    }

    pub fn up(mut self) -> Self {
        self.events.push(PointerEvent::Up);
        self
    }

    pub fn pause(mut self, duration_ms: u64) -> Self {
        self.events.push(PointerEvent::Pause { duration_ms });
        self
    }

    /// Total time the sequence occupies, summing moves and pauses.
    pub fn total_duration_ms(&self) -> u64 {
        self.events
            .iter()
            .map(|e| match e {
                PointerEvent::Move { duration_ms, .. } => *duration_ms,
                PointerEvent::Pause { duration_ms } => *duration_ms,
                PointerEvent::Down | PointerEvent::Up => 0,
            })
            .sum()
    }
}

#[cfg(test)]
#[path = "pointer_tests.rs"]
mod tests;
