//! Action dispatch against a device session.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error};

use stagehand_protocols::action::{
    ActionExecutionResult, FunctionArguments, NormalizedAction, DEFAULT_TAP_DURATION_MS,
};
use stagehand_protocols::device::DeviceSession;
use stagehand_protocols::error::DeviceError;

use crate::grid::GridMapper;
use crate::synth;

/// Delay after a focus tap, letting an on-screen keyboard appear.
const KEYBOARD_SETTLE_MS: u64 = 200;

/// Single entry point for executing normalized actions.
///
/// Every outcome is an [`ActionExecutionResult`]; device errors are
/// captured as data, never propagated, so the orchestrator can feed them
/// back to the model as correction context.
pub struct ActionExecutor {
    session: Arc<dyn DeviceSession>,
    grid: GridMapper,
}

impl ActionExecutor {
    pub fn new(session: Arc<dyn DeviceSession>) -> Self {
        let grid = GridMapper::new(session.viewport_width(), session.viewport_height());
        Self { session, grid }
    }

    pub fn grid(&self) -> GridMapper {
        self.grid
    }

    /// Execute one action, converting any device error into a failure result.
    pub async fn perform(&self, action: &NormalizedAction) -> ActionExecutionResult {
        debug!(action = action.kind(), "performing action");
        match self.dispatch(action).await {
            Ok(result) => result,
            Err(e) => {
                error!(action = action.kind(), error = %e, "action failed");
                ActionExecutionResult::failed(e.to_string())
            }
        }
    }

    async fn dispatch(
        &self,
        action: &NormalizedAction,
    ) -> Result<ActionExecutionResult, DeviceError> {
        match action {
            NormalizedAction::Tap { x, y, duration_ms } => {
                let (px, py) = self.grid.normalize(*x, *y);
                let hold = duration_ms.unwrap_or(DEFAULT_TAP_DURATION_MS);
                self.session
                    .perform_pointer(&synth::tap(px, py, hold))
                    .await?;
                Ok(ActionExecutionResult::ok())
            }
            // Desktop vocabulary: a click is a tap on touch surfaces.
            NormalizedAction::Click { x, y } => {
                let (px, py) = self.grid.normalize(*x, *y);
                self.session
                    .perform_pointer(&synth::tap(px, py, DEFAULT_TAP_DURATION_MS))
                    .await?;
                Ok(ActionExecutionResult::ok())
            }
            NormalizedAction::DoubleTap { x, y } | NormalizedAction::DoubleClick { x, y } => {
                let (px, py) = self.grid.normalize(*x, *y);
                self.session
                    .perform_pointer(&synth::double_tap(px, py))
                    .await?;
                Ok(ActionExecutionResult::ok())
            }
            NormalizedAction::LongPress { x, y, duration_ms } => {
                let (px, py) = self.grid.normalize(*x, *y);
                self.session
                    .perform_pointer(&synth::long_press(px, py, *duration_ms))
                    .await?;
                Ok(ActionExecutionResult::ok())
            }
            NormalizedAction::Swipe {
                start_x,
                start_y,
                end_x,
                end_y,
                duration_ms,
            } => {
                let (sx, sy) = self.grid.normalize(*start_x, *start_y);
                let (ex, ey) = self.grid.normalize(*end_x, *end_y);
                self.session
                    .perform_pointer(&synth::swipe(sx, sy, ex, ey, *duration_ms))
                    .await?;
                Ok(ActionExecutionResult::ok())
            }
            NormalizedAction::Pinch {
                center_x,
                center_y,
                scale,
                duration_ms,
            } => {
                let (cx, cy) = self.grid.normalize(*center_x, *center_y);
                let fingers = synth::pinch(cx, cy, *scale, *duration_ms);
                self.session.perform_multi_pointer(&fingers).await?;
                Ok(ActionExecutionResult::ok())
            }
            NormalizedAction::Rotate {
                center_x,
                center_y,
                angle,
                duration_ms,
            } => {
                let (cx, cy) = self.grid.normalize(*center_x, *center_y);
                let fingers = synth::rotate(cx, cy, *angle, *duration_ms);
                self.session.perform_multi_pointer(&fingers).await?;
                Ok(ActionExecutionResult::ok())
            }
            NormalizedAction::Scroll {
                x,
                y,
                scroll_x,
                scroll_y,
            } => {
                let (px, py) = self.grid.normalize(*x, *y);
                self.session
                    .perform_pointer(&synth::scroll_drag(px, py, *scroll_x, *scroll_y))
                    .await?;
                Ok(ActionExecutionResult::ok())
            }
            NormalizedAction::Type {
                text,
                x,
                y,
                press_enter_after,
            } => {
                // Tap first to focus the input, then give the keyboard
                // time to appear.
                if let (Some(x), Some(y)) = (x, y) {
                    let (px, py) = self.grid.normalize(*x, *y);
                    self.session
                        .perform_pointer(&synth::tap(px, py, DEFAULT_TAP_DURATION_MS))
                        .await?;
                    tokio::time::sleep(Duration::from_millis(KEYBOARD_SETTLE_MS)).await;
                }
                self.session.send_keys(text).await?;
                if *press_enter_after {
                    self.session.send_keys("\n").await?;
                }
                Ok(ActionExecutionResult::ok())
            }
            NormalizedAction::Wait { milliseconds } => {
                tokio::time::sleep(Duration::from_millis(*milliseconds)).await;
                Ok(ActionExecutionResult::ok())
            }
            // Screenshots are captured by the agent loop after every action.
            NormalizedAction::Screenshot => Ok(ActionExecutionResult::ok()),
            NormalizedAction::Function { name, arguments } => {
                self.dispatch_function(name, arguments.as_ref()).await
            }
            NormalizedAction::Keypress { .. }
            | NormalizedAction::Move { .. }
            | NormalizedAction::Drag { .. } => Ok(ActionExecutionResult::failed(format!(
                "Unsupported action type: {}",
                action.kind()
            ))),
        }
    }

    async fn dispatch_function(
        &self,
        name: &str,
        arguments: Option<&FunctionArguments>,
    ) -> Result<ActionExecutionResult, DeviceError> {
        debug!(function = name, "dispatching function action");
        match name {
            "goto" => match arguments.and_then(|a| a.url.as_deref()) {
                Some(url) => {
                    self.session.open_url(url).await?;
                    Ok(ActionExecutionResult::ok())
                }
                None => Ok(ActionExecutionResult::failed("Missing url for goto")),
            },
            "navigate_back" => {
                self.session.press_back().await?;
                Ok(ActionExecutionResult::ok())
            }
            "go_home" => {
                self.session.press_home().await?;
                Ok(ActionExecutionResult::ok())
            }
            "open_app" => match arguments.and_then(|a| a.app_id.as_deref()) {
                Some(app_id) => {
                    self.session.launch_app(app_id).await?;
                    Ok(ActionExecutionResult::ok())
                }
                None => Ok(ActionExecutionResult::failed("Missing app_id for open_app")),
            },
            "hide_keyboard" => {
                self.session.hide_keyboard().await?;
                Ok(ActionExecutionResult::ok())
            }
            other => Ok(ActionExecutionResult::failed(format!(
                "Unsupported function: {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
