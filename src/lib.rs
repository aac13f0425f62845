//! # Stagehand
//!
//! Model-driven mobile device automation. A vision-capable
//! function-calling model looks at screenshots, requests gestures on a
//! 0-1000 logical grid, and Stagehand translates them into pointer
//! sequences against an injected device session.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use stagehand::provider_gemini::{GeminiActionTranslator, GeminiCuaModel};
//! use stagehand::{AgentOptions, MobileAgent};
//! # async fn run(session: Arc<dyn stagehand::DeviceSession>) -> Result<(), Box<dyn std::error::Error>> {
//!
//! let model = Arc::new(GeminiCuaModel::new(None)?);
//! let translator = Arc::new(GeminiActionTranslator::new());
//! let agent = MobileAgent::new(
//!     session,
//!     model,
//!     translator,
//!     AgentOptions {
//!         device: Some("iphone_15_pro".to_string()),
//!         ..AgentOptions::default()
//!     },
//! )?;
//!
//! agent.connect()?;
//! let result = agent.execute("Open settings and enable dark mode", None, None).await?;
//! println!("completed: {} ({:?})", result.completed, result.message);
//! agent.disconnect().await;
//! # Ok(())
//! # }
//! ```

pub use stagehand_agent::{
    AgentOptions, ConversationHistory, CuaOrchestrator, ExecutionConfig, MobileAgent,
};
pub use stagehand_gestures::{ActionExecutor, GridMapper};
pub use stagehand_protocols::action::{
    ActionExecutionResult, AgentResult, AgentUsage, NormalizedAction,
};
pub use stagehand_protocols::device::{DeviceSession, Orientation};
pub use stagehand_protocols::error::{AgentError, DeviceError, ProviderError};
pub use stagehand_protocols::pointer::{PointerEvent, PointerSequence};
pub use stagehand_protocols::profile::{device_profile, DeviceProfile, MobilePlatform};
pub use stagehand_protocols::provider::{ActionTranslator, ComputerUseModel};

pub mod provider_gemini {
    //! Re-export of the Gemini computer-use backend.
    pub use stagehand_provider_gemini::{GeminiActionTranslator, GeminiCuaModel};
}
