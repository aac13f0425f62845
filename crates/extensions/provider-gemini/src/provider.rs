//! Gemini computer-use model implementation.

use async_trait::async_trait;
use tracing::debug;

use stagehand_protocols::error::{AgentError, ProviderError};
use stagehand_protocols::provider::{
    ComputerUseModel, FinishReason, ModelFunctionCall, ModelTurn, ModelUsage,
};
use stagehand_protocols::turn::{ConversationTurn, TurnPart, TurnRole};

use crate::client::GeminiClient;
use crate::tools::mobile_tools;
use crate::types::*;

/// Gemini model tuned for computer use.
pub const DEFAULT_CUA_MODEL: &str = "gemini-2.5-computer-use-preview-10-2025";

const DEFAULT_MOBILE_INSTRUCTIONS: &str = "\
You are a mobile device automation agent. You interact with iOS and Android devices through touch gestures.

Key behaviors:
- Use tap_at for clicking/tapping on elements
- Use swipe for scrolling and navigation gestures
- Use long_press_at for context menus and drag operations
- Use type_text_at to enter text after tapping on input fields
- Use go_home to return to home screen
- Use go_back to navigate back
- Use open_app to launch applications

Coordinate system:
- All coordinates use a 0-1000 grid regardless of actual screen size
- (0, 0) is top-left, (1000, 1000) is bottom-right
- Center of screen is (500, 500)

Always analyze the screenshot carefully before taking actions.
For text input, tap the field first, then use type_text_at.
";

/// Computer-use model backed by the Gemini API.
pub struct GeminiCuaModel {
    client: GeminiClient,
    model: String,
    instructions: String,
}

impl GeminiCuaModel {
    /// Build from an explicit key, falling back to `GEMINI_API_KEY`.
    pub fn new(api_key: Option<String>) -> Result<Self, AgentError> {
        let api_key = resolve_api_key(api_key)?;
        Ok(Self::from_client(GeminiClient::new(api_key)?))
    }

    /// Build against a custom endpoint. Used by tests.
    pub fn with_base_url(api_key: Option<String>, base_url: String) -> Result<Self, AgentError> {
        let api_key = resolve_api_key(api_key)?;
        Ok(Self::from_client(GeminiClient::with_url(api_key, base_url)?))
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    fn from_client(client: GeminiClient) -> Self {
        Self {
            client,
            model: DEFAULT_CUA_MODEL.to_string(),
            instructions: DEFAULT_MOBILE_INSTRUCTIONS.to_string(),
        }
    }

    fn build_request(&self, history: &[ConversationTurn]) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: history.iter().map(convert_turn).collect(),
            system_instruction: Some(Content {
                role: "user".to_string(),
                parts: vec![Part::Text {
                    text: self.instructions.clone(),
                }],
            }),
            // Low temperature and focused sampling for deterministic UI
            // actions; actions never need large output.
            generation_config: Some(GenerationConfig {
                temperature: Some(0.3),
                top_p: Some(0.9),
                top_k: Some(20),
                max_output_tokens: Some(2048),
            }),
            tools: Some(mobile_tools()),
        }
    }
}

#[async_trait]
impl ComputerUseModel for GeminiCuaModel {
    async fn request_turn(
        &self,
        history: &[ConversationTurn],
    ) -> Result<Option<ModelTurn>, ProviderError> {
        debug!(model = %self.model, turns = history.len(), "requesting turn");
        let request = self.build_request(history);
        let response = self.client.generate_content(&self.model, &request).await?;
        Ok(parse_response(response))
    }
}

fn resolve_api_key(api_key: Option<String>) -> Result<String, AgentError> {
    api_key
        .or_else(|| std::env::var("GEMINI_API_KEY").ok())
        .filter(|key| !key.is_empty())
        .ok_or(AgentError::MissingApiKey)
}

fn convert_turn(turn: &ConversationTurn) -> Content {
    let role = match turn.role {
        TurnRole::User => "user",
        TurnRole::Model => "model",
    };
    let parts = turn.parts.iter().map(convert_part).collect();
    Content {
        role: role.to_string(),
        parts,
    }
}

fn convert_part(part: &TurnPart) -> Part {
    match part {
        TurnPart::Text { text } => Part::Text { text: text.clone() },
        TurnPart::Screenshot { base64 } => Part::InlineData {
            inline_data: InlineData {
                mime_type: "image/png".to_string(),
                data: base64.clone(),
            },
        },
        TurnPart::FunctionCall { name, args } => Part::FunctionCall {
            function_call: FunctionCall {
                name: name.clone(),
                args: args.clone(),
            },
        },
        TurnPart::FunctionResponse {
            name,
            response,
            screenshot,
        } => Part::FunctionResponse {
            function_response: FunctionResponse {
                name: name.clone(),
                response: response.clone(),
                parts: screenshot
                    .iter()
                    .map(|data| FunctionResponsePart {
                        inline_data: InlineData {
                            mime_type: "image/png".to_string(),
                            data: data.clone(),
                        },
                    })
                    .collect(),
            },
        },
    }
}

fn parse_finish_reason(reason: Option<&str>) -> FinishReason {
    match reason {
        None | Some("FINISH_REASON_UNSPECIFIED") => FinishReason::Unspecified,
        Some("STOP") => FinishReason::Stop,
        Some("TOOL_CODE") => FinishReason::ToolCode,
        Some("MALFORMED_FUNCTION_CALL") => FinishReason::MalformedFunctionCall,
        Some(other) => FinishReason::Other(other.to_string()),
    }
}

fn parse_response(response: GenerateContentResponse) -> Option<ModelTurn> {
    let usage = response
        .usage_metadata
        .map(|metadata| ModelUsage {
            input_tokens: metadata.prompt_token_count,
            output_tokens: metadata.candidates_token_count,
        })
        .unwrap_or_default();

    let candidate = response.candidates.into_iter().next()?;

    let mut texts: Vec<String> = Vec::new();
    let mut function_calls = Vec::new();
    for part in candidate.content.parts {
        match part {
            Part::Text { text } => texts.push(text),
            Part::FunctionCall { function_call } => function_calls.push(ModelFunctionCall {
                name: function_call.name,
                args: function_call.args,
            }),
            _ => {}
        }
    }

    let reasoning = if texts.is_empty() {
        None
    } else {
        Some(texts.join(" "))
    };

    Some(ModelTurn {
        reasoning,
        function_calls,
        finish_reason: parse_finish_reason(candidate.finish_reason.as_deref()),
        usage,
    })
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
