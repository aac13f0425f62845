//! # Stagehand Provider - Gemini
//!
//! Google Gemini computer-use backend for Stagehand.

mod client;
mod provider;
mod tools;
mod translate;
mod types;

pub use provider::{GeminiCuaModel, DEFAULT_CUA_MODEL};
pub use translate::GeminiActionTranslator;
pub use types::*;
