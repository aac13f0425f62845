//! The computer-use action loop.
//!
//! One step: trim history, request a model turn (with retry and
//! per-attempt timeout), decide, then execute the returned calls in
//! order. Every executed action is followed by a fresh screenshot and a
//! feedback turn so the model always reasons over current screen state.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use stagehand_gestures::ActionExecutor;
use stagehand_protocols::action::{
    ActionExecutionResult, AgentResult, AgentUsage, NormalizedAction,
};
use stagehand_protocols::device::DeviceSession;
use stagehand_protocols::error::{AgentError, ProviderError};
use stagehand_protocols::provider::{
    ActionTranslator, ComputerUseModel, FinishReason, ModelTurn,
};
use stagehand_protocols::turn::ConversationTurn;

use crate::config::ExecutionConfig;
use crate::history::ConversationHistory;

const STALL_MESSAGE: &str = "No further actions";

/// Drives one task to completion against a device session.
pub struct CuaOrchestrator {
    session: Arc<dyn DeviceSession>,
    model: Arc<dyn ComputerUseModel>,
    translator: Arc<dyn ActionTranslator>,
    executor: ActionExecutor,
    instructions: Option<String>,
    config: ExecutionConfig,
}

impl CuaOrchestrator {
    pub fn new(
        session: Arc<dyn DeviceSession>,
        model: Arc<dyn ComputerUseModel>,
        translator: Arc<dyn ActionTranslator>,
        instructions: Option<String>,
        config: ExecutionConfig,
    ) -> Self {
        let executor = ActionExecutor::new(session.clone());
        Self {
            session,
            model,
            translator,
            executor,
            instructions,
            config,
        }
    }

    /// Run the loop until completion, stall, terminal failure or the
    /// step budget is exhausted.
    pub async fn run(&self, instruction: &str) -> Result<AgentResult, AgentError> {
        let mut history = ConversationHistory::new();
        let screenshot = self.session.screenshot_base64().await?;
        history.start(self.instructions.as_deref(), instruction, screenshot);

        let mut usage = AgentUsage::default();
        let mut actions: Vec<NormalizedAction> = Vec::new();

        for step in 0..self.config.max_steps {
            history.trim();
            debug!(step, turns = history.len(), "requesting model turn");

            let turn = match self.request_with_retry(history.turns(), &mut usage).await {
                Ok(Some(turn)) => turn,
                Ok(None) => {
                    warn!(step, "model returned no candidates");
                    return Ok(finished(
                        false,
                        "Model returned no candidates",
                        actions,
                        usage,
                    ));
                }
                Err(e) => {
                    return Ok(finished(
                        false,
                        format!(
                            "Model call failed after {} attempts: {e}",
                            self.config.model_retry_attempts
                        ),
                        actions,
                        usage,
                    ));
                }
            };

            if turn.function_calls.is_empty()
                && turn.reasoning.is_none()
                && turn.finish_reason == FinishReason::MalformedFunctionCall
            {
                // Nothing usable came back; re-ask on the next step.
                warn!(step, "empty malformed turn, retrying step");
                continue;
            }
            // Checked before the calls are touched: a truncated or blocked
            // turn must not have its batch executed.
            if !turn.finish_reason.is_normal() {
                return Ok(finished(
                    false,
                    format!("Model stopped: {}", turn.finish_reason.name()),
                    actions,
                    usage,
                ));
            }
            if turn.function_calls.is_empty() {
                return Ok(match turn.reasoning {
                    Some(message) => {
                        info!(step, "task completed");
                        finished(true, message, actions, usage)
                    }
                    None => {
                        info!(step, "model returned no actions");
                        finished(false, STALL_MESSAGE, actions, usage)
                    }
                });
            }

            history.push_model_turn(turn.reasoning.as_deref(), &turn.function_calls);
            for call in &turn.function_calls {
                let result = match self.translator.translate(&call.name, &call.args) {
                    Some(action) => {
                        let result = self.executor.perform(&action).await;
                        actions.push(action);
                        result
                    }
                    None => {
                        ActionExecutionResult::failed(format!("Unknown function: {}", call.name))
                    }
                };

                let screenshot = match self.session.screenshot_base64().await {
                    Ok(shot) => Some(shot),
                    Err(e) => {
                        warn!(error = %e, "post-action screenshot failed");
                        None
                    }
                };
                history.push_action_feedback(&call.name, &result, screenshot);

                tokio::time::sleep(Duration::from_millis(self.config.wait_between_actions_ms))
                    .await;
            }
        }

        info!(max_steps = self.config.max_steps, "step budget exhausted");
        Ok(finished(false, "Max steps reached", actions, usage))
    }

    /// One model call with bounded retry and exponential backoff.
    ///
    /// `Ok(None)` (no candidates) is terminal and never retried; only
    /// transport-level errors are.
    async fn request_with_retry(
        &self,
        turns: &[ConversationTurn],
        usage: &mut AgentUsage,
    ) -> Result<Option<ModelTurn>, ProviderError> {
        let attempts = self.config.model_retry_attempts.max(1);
        let mut last_error = None;

        for attempt in 0..attempts {
            if attempt > 0 {
                let delay = self.config.model_retry_base_delay_ms * 2u64.pow(attempt - 1);
                debug!(attempt, delay_ms = delay, "backing off before retry");
                tokio::time::sleep(Duration::from_millis(delay)).await;
            }

            let started = Instant::now();
            let outcome = tokio::time::timeout(
                Duration::from_millis(self.config.model_timeout_ms),
                self.model.request_turn(turns),
            )
            .await
            .unwrap_or(Err(ProviderError::Timeout(
                self.config.model_timeout_ms / 1000,
            )));
            usage.inference_time_ms += started.elapsed().as_millis() as u64;

            match outcome {
                Ok(turn) => {
                    if let Some(turn) = &turn {
                        usage.input_tokens += turn.usage.input_tokens;
                        usage.output_tokens += turn.usage.output_tokens;
                    }
                    return Ok(turn);
                }
                Err(e) => {
                    warn!(attempt, error = %e, "model call failed");
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or(ProviderError::InvalidResponse(
            "no attempts were made".to_string(),
        )))
    }
}

fn finished(
    completed: bool,
    message: impl Into<String>,
    actions: Vec<NormalizedAction>,
    usage: AgentUsage,
) -> AgentResult {
    AgentResult {
        actions,
        message: Some(message.into()),
        usage,
        completed,
    }
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;
