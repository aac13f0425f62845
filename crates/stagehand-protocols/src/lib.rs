//! # Stagehand Protocols
//!
//! Core protocol definitions for the Stagehand automation SDK.
//! Contains the shared data model and the traits implemented by device
//! adapters and model providers - no concrete implementations.
//!
//! ## Core Traits
//!
//! - [`DeviceSession`] - Facade over a connected browser or mobile device
//! - [`ComputerUseModel`] - Vision-capable function-calling model backend
//! - [`ActionTranslator`] - Provider vocabulary to normalized actions

pub mod action;
pub mod device;
pub mod error;
pub mod pointer;
pub mod profile;
pub mod provider;
pub mod turn;

// Re-export core types
pub use action::{
    ActionExecutionResult, AgentResult, AgentUsage, FunctionArguments, NormalizedAction, Point,
};
pub use device::{DeviceSession, Orientation};
pub use error::{AgentError, DeviceError, ProviderError};
pub use pointer::{PointerEvent, PointerSequence};
pub use profile::{
    device_profile, DeviceProfile, MobilePlatform, DEFAULT_PROFILE_KEY, DEVICE_PROFILES,
};
pub use provider::{
    ActionTranslator, ComputerUseModel, FinishReason, ModelFunctionCall, ModelTurn, ModelUsage,
};
pub use turn::{ConversationTurn, TurnPart, TurnRole};
