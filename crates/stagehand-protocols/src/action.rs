//! Normalized action representation and execution results.
//!
//! Actions are the common currency between the model provider (which emits
//! them via its translator) and the action executor (which performs them).
//! Every coordinate field is expressed on the 0-1000 logical grid until it
//! reaches the grid mapper.

use serde::{Deserialize, Serialize};

/// Size of the logical coordinate grid the model reasons in.
pub const COORDINATE_GRID_SIZE: i64 = 1000;

/// Default hold duration for a tap, in milliseconds.
pub const DEFAULT_TAP_DURATION_MS: u64 = 50;

/// Default hold duration for a long press, in milliseconds.
pub const DEFAULT_LONG_PRESS_DURATION_MS: u64 = 500;

/// Default duration of a swipe gesture, in milliseconds.
pub const DEFAULT_SWIPE_DURATION_MS: u64 = 300;

/// Default duration of a pinch or rotate gesture, in milliseconds.
pub const DEFAULT_PINCH_DURATION_MS: u64 = 300;

/// A single point on the logical grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

/// Arguments for device-level function actions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionArguments {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
}

/// Tagged union over every action the agent can request.
///
/// `Click` and `DoubleClick` are the desktop-oriented vocabulary; on
/// platforms with no cursor concept the executor remaps them to tap and
/// double tap. `Keypress`, `Move` and `Drag` exist for desktop providers
/// and are rejected by the mobile executor with a descriptive failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NormalizedAction {
    Tap {
        x: i64,
        y: i64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        duration_ms: Option<u64>,
    },
    DoubleTap {
        x: i64,
        y: i64,
    },
    LongPress {
        x: i64,
        y: i64,
        duration_ms: u64,
    },
    Swipe {
        start_x: i64,
        start_y: i64,
        end_x: i64,
        end_y: i64,
        duration_ms: u64,
    },
    Pinch {
        center_x: i64,
        center_y: i64,
        scale: f64,
        duration_ms: u64,
    },
    Rotate {
        center_x: i64,
        center_y: i64,
        angle: f64,
        duration_ms: u64,
    },
    Scroll {
        x: i64,
        y: i64,
        #[serde(default)]
        scroll_x: i64,
        #[serde(default)]
        scroll_y: i64,
    },
    Type {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        x: Option<i64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        y: Option<i64>,
        #[serde(default)]
        press_enter_after: bool,
    },
    Wait {
        milliseconds: u64,
    },
    Screenshot,
    Function {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        arguments: Option<FunctionArguments>,
    },
    Click {
        x: i64,
        y: i64,
    },
    DoubleClick {
        x: i64,
        y: i64,
    },
    Keypress {
        keys: Vec<String>,
    },
    Move {
        x: i64,
        y: i64,
    },
    Drag {
        path: Vec<Point>,
    },
}

impl NormalizedAction {
    /// Stable name of the variant, used in logs and error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Tap { .. } => "tap",
            Self::DoubleTap { .. } => "double_tap",
            Self::LongPress { .. } => "long_press",
            Self::Swipe { .. } => "swipe",
            Self::Pinch { .. } => "pinch",
            Self::Rotate { .. } => "rotate",
            Self::Scroll { .. } => "scroll",
            Self::Type { .. } => "type",
            Self::Wait { .. } => "wait",
            Self::Screenshot => "screenshot",
            Self::Function { .. } => "function",
            Self::Click { .. } => "click",
            Self::DoubleClick { .. } => "double_click",
            Self::Keypress { .. } => "keypress",
            Self::Move { .. } => "move",
            Self::Drag { .. } => "drag",
        }
    }
}

/// Outcome of one action execution attempt.
///
/// Execution failures are captured as data and fed back to the model so it
/// can self-correct; they never propagate as errors past the executor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionExecutionResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ActionExecutionResult {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }
}

/// Token and timing counters accumulated across a task execution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub inference_time_ms: u64,
}

/// Terminal record of one task execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentResult {
    pub actions: Vec<NormalizedAction>,
    pub message: Option<String>,
    pub usage: AgentUsage,
    pub completed: bool,
}

#[cfg(test)]
#[path = "action_tests.rs"]
mod tests;
