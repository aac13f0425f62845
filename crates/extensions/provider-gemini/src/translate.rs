//! Gemini function-call vocabulary to normalized actions.
//!
//! All provider-specific naming lives here; swapping the model backend
//! swaps only this mapping. Coordinates are clamped to the 0-1000 grid
//! before they enter an action, and omitted optional arguments get the
//! documented defaults.

use serde_json::Value;
use tracing::warn;

use stagehand_protocols::action::{
    FunctionArguments, NormalizedAction, COORDINATE_GRID_SIZE, DEFAULT_LONG_PRESS_DURATION_MS,
    DEFAULT_PINCH_DURATION_MS, DEFAULT_SWIPE_DURATION_MS,
};
use stagehand_protocols::provider::ActionTranslator;

const DEFAULT_WAIT_SECONDS: f64 = 1.0;
const DEFAULT_SCROLL_AMOUNT: i64 = 5;

/// Translates the mobile computer-use vocabulary from `tools.rs`.
#[derive(Debug, Default)]
pub struct GeminiActionTranslator;

impl GeminiActionTranslator {
    pub fn new() -> Self {
        Self
    }
}

impl ActionTranslator for GeminiActionTranslator {
    fn translate(&self, name: &str, args: &Value) -> Option<NormalizedAction> {
        let action = match name {
            "tap_at" => tap(args),
            "double_tap_at" => double_tap(args),
            "long_press_at" => long_press(args),
            "swipe" => swipe(args),
            "type_text_at" => type_text(args),
            "go_back" => Some(NormalizedAction::Function {
                name: "navigate_back".to_string(),
                arguments: None,
            }),
            "go_home" => Some(NormalizedAction::Function {
                name: "go_home".to_string(),
                arguments: None,
            }),
            "open_app" => open_app(args),
            "open_url" => open_url(args),
            "wait" => Some(wait(args)),
            "pinch" => pinch(args),
            "scroll" => Some(scroll(args)),
            _ => {
                warn!(function = name, "unsupported function");
                return None;
            }
        };
        if action.is_none() {
            warn!(function = name, args = %args, "malformed function arguments");
        }
        action
    }
}

fn clamp(value: i64) -> i64 {
    value.clamp(0, COORDINATE_GRID_SIZE)
}

fn int_arg(args: &Value, key: &str) -> Option<i64> {
    // The model sometimes serializes integral values as floats.
    let value = args.get(key)?;
    value.as_i64().or_else(|| value.as_f64().map(|f| f as i64))
}

fn coordinate(args: &Value, key: &str) -> Option<i64> {
    int_arg(args, key).map(clamp)
}

fn tap(args: &Value) -> Option<NormalizedAction> {
    Some(NormalizedAction::Tap {
        x: coordinate(args, "x")?,
        y: coordinate(args, "y")?,
        duration_ms: None,
    })
}

fn double_tap(args: &Value) -> Option<NormalizedAction> {
    Some(NormalizedAction::DoubleTap {
        x: coordinate(args, "x")?,
        y: coordinate(args, "y")?,
    })
}

fn long_press(args: &Value) -> Option<NormalizedAction> {
    Some(NormalizedAction::LongPress {
        x: coordinate(args, "x")?,
        y: coordinate(args, "y")?,
        duration_ms: int_arg(args, "duration_ms")
            .map(|d| d.max(0) as u64)
            .unwrap_or(DEFAULT_LONG_PRESS_DURATION_MS),
    })
}

fn swipe(args: &Value) -> Option<NormalizedAction> {
    Some(NormalizedAction::Swipe {
        start_x: coordinate(args, "start_x")?,
        start_y: coordinate(args, "start_y")?,
        end_x: coordinate(args, "end_x")?,
        end_y: coordinate(args, "end_y")?,
        duration_ms: int_arg(args, "duration_ms")
            .map(|d| d.max(0) as u64)
            .unwrap_or(DEFAULT_SWIPE_DURATION_MS),
    })
}

fn type_text(args: &Value) -> Option<NormalizedAction> {
    Some(NormalizedAction::Type {
        text: args.get("text")?.as_str()?.to_string(),
        x: Some(coordinate(args, "x")?),
        y: Some(coordinate(args, "y")?),
        press_enter_after: args
            .get("press_enter")
            .and_then(Value::as_bool)
            .unwrap_or(false),
    })
}

fn open_app(args: &Value) -> Option<NormalizedAction> {
    Some(NormalizedAction::Function {
        name: "open_app".to_string(),
        arguments: Some(FunctionArguments {
            url: None,
            app_id: Some(args.get("app_name")?.as_str()?.to_string()),
        }),
    })
}

fn open_url(args: &Value) -> Option<NormalizedAction> {
    Some(NormalizedAction::Function {
        name: "goto".to_string(),
        arguments: Some(FunctionArguments {
            url: Some(args.get("url")?.as_str()?.to_string()),
            app_id: None,
        }),
    })
}

fn wait(args: &Value) -> NormalizedAction {
    let seconds = args
        .get("seconds")
        .and_then(Value::as_f64)
        .unwrap_or(DEFAULT_WAIT_SECONDS)
        .max(0.0);
    NormalizedAction::Wait {
        milliseconds: (seconds * 1000.0) as u64,
    }
}

/// Scroll becomes a swipe anchored at 30% / 70% of the grid, moving
/// opposite to the requested content direction.
fn scroll(args: &Value) -> NormalizedAction {
    let amount = int_arg(args, "amount")
        .unwrap_or(DEFAULT_SCROLL_AMOUNT)
        .clamp(1, 10)
        * 100;
    let center = COORDINATE_GRID_SIZE / 2;
    let near_edge = COORDINATE_GRID_SIZE * 3 / 10;
    let far_edge = COORDINATE_GRID_SIZE * 7 / 10;

    let direction = args.get("direction").and_then(Value::as_str).unwrap_or("down");
    let (start_x, start_y, end_x, end_y) = match direction {
        "up" => (center, near_edge, center, near_edge + amount),
        "left" => (far_edge, center, far_edge - amount, center),
        "right" => (near_edge, center, near_edge + amount, center),
        _ => (center, far_edge, center, far_edge - amount),
    };

    NormalizedAction::Swipe {
        start_x,
        start_y,
        end_x,
        end_y,
        duration_ms: DEFAULT_SWIPE_DURATION_MS,
    }
}

fn pinch(args: &Value) -> Option<NormalizedAction> {
    Some(NormalizedAction::Pinch {
        center_x: coordinate(args, "center_x")?,
        center_y: coordinate(args, "center_y")?,
        scale: args.get("scale")?.as_f64()?,
        duration_ms: DEFAULT_PINCH_DURATION_MS,
    })
}

#[cfg(test)]
#[path = "translate_tests.rs"]
mod tests;
