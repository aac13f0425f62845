//! # Stagehand Agent
//!
//! The model-driven action loop: conversation history with bounded
//! retention, the computer-use orchestrator, and the [`MobileAgent`]
//! facade that ties a device session, a model backend and an action
//! translator together.
//!
//! ## Key Components
//!
//! - [`ConversationHistory`]: append-only turn log with retention trimming
//! - [`CuaOrchestrator`]: screenshot, model call, translate, execute, repeat
//! - [`MobileAgent`]: user-facing entry point with device passthroughs
//! - [`ExecutionConfig`]: step, retry and pacing knobs

pub mod agent;
pub mod config;
pub mod history;
pub mod orchestrator;

pub use agent::{AgentOptions, MobileAgent};
pub use config::ExecutionConfig;
pub use history::ConversationHistory;
pub use orchestrator::CuaOrchestrator;
