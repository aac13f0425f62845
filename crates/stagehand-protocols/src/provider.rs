//! Model provider protocol.
//!
//! A [`ComputerUseModel`] is a vision-capable function-calling model. It
//! receives the full turn history and returns one parsed model turn; the
//! provider-specific vocabulary is converted to [`NormalizedAction`] values
//! by the provider's [`ActionTranslator`].

use async_trait::async_trait;

use crate::action::NormalizedAction;
use crate::error::ProviderError;
use crate::turn::ConversationTurn;

/// A structured function call as issued by the model.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelFunctionCall {
    pub name: String,
    pub args: serde_json::Value,
}

/// Why the model stopped emitting output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinishReason {
    Stop,
    Unspecified,
    /// Provider expects tool results to continue.
    ToolCode,
    /// The model emitted a function call the provider could not parse.
    MalformedFunctionCall,
    Other(String),
}

impl FinishReason {
    /// Normal completion, or continuation pending tool results.
    pub fn is_normal(&self) -> bool {
        matches!(self, Self::Stop | Self::Unspecified | Self::ToolCode)
    }

    /// Name used when embedding the reason in an error message.
    pub fn name(&self) -> &str {
        match self {
            Self::Stop => "STOP",
            Self::Unspecified => "FINISH_REASON_UNSPECIFIED",
            Self::ToolCode => "TOOL_CODE",
            Self::MalformedFunctionCall => "MALFORMED_FUNCTION_CALL",
            Self::Other(name) => name,
        }
    }
}

/// Token counts reported by the provider for one call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModelUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

/// One parsed model response.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelTurn {
    pub reasoning: Option<String>,
    pub function_calls: Vec<ModelFunctionCall>,
    pub finish_reason: FinishReason,
    pub usage: ModelUsage,
}

/// Vision-capable function-calling model backend.
#[async_trait]
pub trait ComputerUseModel: Send + Sync {
    /// Request the next model turn for the given history.
    ///
    /// `Ok(None)` means the provider answered with no candidates at all -
    /// a terminal condition distinct from transport failure, which is
    /// reported as `Err` and may be retried by the caller.
    async fn request_turn(
        &self,
        history: &[ConversationTurn],
    ) -> Result<Option<ModelTurn>, ProviderError>;
}

/// Maps a provider function name plus raw arguments to a normalized action.
///
/// Implementations own the provider vocabulary; swapping model backends
/// swaps only this mapping. Returns `None` for unsupported names or
/// schema-invalid arguments (logged by the implementation, never raised).
pub trait ActionTranslator: Send + Sync {
    fn translate(&self, name: &str, args: &serde_json::Value) -> Option<NormalizedAction>;
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
