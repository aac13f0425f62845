//! Conversation history with bounded retention.
//!
//! Long tasks produce one feedback turn per action, each carrying a
//! screenshot. Unbounded history blows the model context window, so when
//! the log grows past [`MAX_HISTORY_LENGTH`] it is trimmed down to the
//! initial instruction turn, a handful of error-carrying middle turns
//! kept as correction context, and the most recent turns.

use serde_json::json;
use tracing::debug;

use stagehand_protocols::action::ActionExecutionResult;
use stagehand_protocols::provider::ModelFunctionCall;
use stagehand_protocols::turn::{ConversationTurn, TurnPart};

/// Turn count above which trimming kicks in.
pub const MAX_HISTORY_LENGTH: usize = 30;

/// Most recent turns always retained.
const KEEP_RECENT: usize = 20;

/// Upper bound on retained error-carrying middle turns.
const MAX_ERROR_TURNS: usize = 5;

/// Append-only turn log for one task execution.
#[derive(Debug, Default)]
pub struct ConversationHistory {
    turns: Vec<ConversationTurn>,
}

impl ConversationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Record the initial instruction turn with the starting screenshot.
    pub fn start(
        &mut self,
        instructions: Option<&str>,
        instruction: &str,
        screenshot_base64: impl Into<String>,
    ) {
        let mut parts = Vec::new();
        if let Some(instructions) = instructions {
            parts.push(TurnPart::Text {
                text: instructions.to_string(),
            });
        }
        parts.push(TurnPart::Text {
            text: instruction.to_string(),
        });
        parts.push(TurnPart::Screenshot {
            base64: screenshot_base64.into(),
        });
        self.turns.push(ConversationTurn::user(parts));
    }

    /// Echo a model turn back into the log: reasoning first, then the
    /// requested calls in order.
    pub fn push_model_turn(&mut self, reasoning: Option<&str>, calls: &[ModelFunctionCall]) {
        let mut parts = Vec::new();
        if let Some(reasoning) = reasoning {
            parts.push(TurnPart::Text {
                text: reasoning.to_string(),
            });
        }
        for call in calls {
            parts.push(TurnPart::FunctionCall {
                name: call.name.clone(),
                args: call.args.clone(),
            });
        }
        self.turns.push(ConversationTurn::model(parts));
    }

    /// Record the outcome of one executed action. Failures carry the
    /// error message in the response payload so the model can correct
    /// course on the next turn.
    pub fn push_action_feedback(
        &mut self,
        name: &str,
        result: &ActionExecutionResult,
        screenshot_base64: Option<String>,
    ) {
        let response = match &result.error {
            Some(error) => json!({ "error": error }),
            None => json!({ "success": true }),
        };
        self.turns
            .push(ConversationTurn::user(vec![TurnPart::FunctionResponse {
                name: name.to_string(),
                response,
                screenshot: screenshot_base64,
            }]));
    }

    /// Apply the retention policy.
    ///
    /// When over budget, keep the first turn, up to [`MAX_ERROR_TURNS`]
    /// error-carrying turns from the middle (most recent first, emitted in
    /// original order), and the latest [`KEEP_RECENT`] turns.
    pub fn trim(&mut self) {
        if self.turns.len() <= MAX_HISTORY_LENGTH {
            return;
        }
        let recent_start = self.turns.len() - KEEP_RECENT;
        let mut error_indices: Vec<usize> = (1..recent_start)
            .filter(|&i| self.turns[i].has_error_response())
            .collect();
        if error_indices.len() > MAX_ERROR_TURNS {
            error_indices = error_indices.split_off(error_indices.len() - MAX_ERROR_TURNS);
        }

        let mut kept = Vec::with_capacity(1 + error_indices.len() + KEEP_RECENT);
        kept.push(self.turns[0].clone());
        for i in error_indices {
            kept.push(self.turns[i].clone());
        }
        kept.extend(self.turns[recent_start..].iter().cloned());

        debug!(
            before = self.turns.len(),
            after = kept.len(),
            "trimmed conversation history"
        );
        self.turns = kept;
    }
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;
