//! Conversation turn model for the agent loop.
//!
//! A task execution is an append-only sequence of turns: the initial
//! instruction turn, then alternating model turns and per-action feedback
//! turns. Providers map turns onto their own wire format.

use serde::{Deserialize, Serialize};

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnRole {
    User,
    Model,
}

/// One multimodal piece of a turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "part", rename_all = "snake_case")]
pub enum TurnPart {
    Text {
        text: String,
    },
    /// Base64-encoded PNG screenshot.
    Screenshot {
        base64: String,
    },
    /// A function call requested by the model, echoed back in history.
    FunctionCall {
        name: String,
        args: serde_json::Value,
    },
    /// Outcome of one executed action, with the post-action screenshot.
    FunctionResponse {
        name: String,
        response: serde_json::Value,
        #[serde(skip_serializing_if = "Option::is_none")]
        screenshot: Option<String>,
    },
}

/// One turn of the conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: TurnRole,
    pub parts: Vec<TurnPart>,
}

impl ConversationTurn {
    pub fn user(parts: Vec<TurnPart>) -> Self {
        Self {
            role: TurnRole::User,
            parts,
        }
    }

    pub fn model(parts: Vec<TurnPart>) -> Self {
        Self {
            role: TurnRole::Model,
            parts,
        }
    }

    /// True if any function response in this turn carries an error payload.
    pub fn has_error_response(&self) -> bool {
        self.parts.iter().any(|part| match part {
            TurnPart::FunctionResponse { response, .. } => response.get("error").is_some(),
            _ => false,
        })
    }

    /// Concatenated text parts, if any.
    pub fn text(&self) -> Option<String> {
        let texts: Vec<&str> = self
            .parts
            .iter()
            .filter_map(|part| match part {
                TurnPart::Text { text } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        if texts.is_empty() {
            None
        } else {
            Some(texts.join(" "))
        }
    }
}

#[cfg(test)]
#[path = "turn_tests.rs"]
mod tests;
