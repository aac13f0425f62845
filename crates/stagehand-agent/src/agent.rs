//! User-facing agent facade.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{info, warn};

use stagehand_protocols::action::AgentResult;
use stagehand_protocols::device::{DeviceSession, Orientation};
use stagehand_protocols::error::AgentError;
use stagehand_protocols::profile::{device_profile, DeviceProfile, DEFAULT_PROFILE_KEY};
use stagehand_protocols::provider::{ActionTranslator, ComputerUseModel};

use crate::config::ExecutionConfig;
use crate::orchestrator::CuaOrchestrator;

/// Construction options for [`MobileAgent`].
///
/// Profile resolution precedence: explicit `profile`, then `device` preset
/// key, then the default preset.
#[derive(Debug, Clone, Default)]
pub struct AgentOptions {
    /// Preset key, e.g. `"pixel_8"`.
    pub device: Option<String>,
    /// Full custom profile, overrides `device`.
    pub profile: Option<DeviceProfile>,
    /// Extra system instructions prepended to every task.
    pub instructions: Option<String>,
    pub config: ExecutionConfig,
}

/// Ties a device session, a model backend and its action translator into
/// one task-executing agent.
///
/// All capabilities are injected; the agent itself opens no connections
/// and holds no provider credentials.
pub struct MobileAgent {
    session: Arc<dyn DeviceSession>,
    model: Arc<dyn ComputerUseModel>,
    translator: Arc<dyn ActionTranslator>,
    profile: DeviceProfile,
    instructions: Option<String>,
    config: ExecutionConfig,
    connected: AtomicBool,
}

impl MobileAgent {
    pub fn new(
        session: Arc<dyn DeviceSession>,
        model: Arc<dyn ComputerUseModel>,
        translator: Arc<dyn ActionTranslator>,
        options: AgentOptions,
    ) -> Result<Self, AgentError> {
        let profile = match (options.profile, options.device.as_deref()) {
            (Some(profile), _) => profile,
            (None, Some(key)) => device_profile(key)?,
            (None, None) => device_profile(DEFAULT_PROFILE_KEY)?,
        };
        Ok(Self {
            session,
            model,
            translator,
            profile,
            instructions: options.instructions,
            config: options.config,
            connected: AtomicBool::new(false),
        })
    }

    pub fn profile(&self) -> &DeviceProfile {
        &self.profile
    }

    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    /// Mark the injected session as live. Idempotent.
    pub fn connect(&self) -> Result<(), AgentError> {
        if !self.connected.swap(true, Ordering::SeqCst) {
            info!(profile = %self.profile.name, "agent connected");
        }
        Ok(())
    }

    /// Tear down the session. Cleanup errors are logged, never raised,
    /// so callers can always disconnect unconditionally.
    pub async fn disconnect(&self) {
        if !self.connected.swap(false, Ordering::SeqCst) {
            return;
        }
        if let Err(e) = self.session.disconnect().await {
            warn!(error = %e, "session disconnect failed");
        }
        info!("agent disconnected");
    }

    /// Run one task to completion.
    ///
    /// `context` is background information prepended to the instruction;
    /// `max_steps` overrides the configured step budget for this task.
    pub async fn execute(
        &self,
        instruction: &str,
        max_steps: Option<usize>,
        context: Option<&str>,
    ) -> Result<AgentResult, AgentError> {
        self.ensure_connected()?;
        let task = match context {
            Some(context) => format!("{context}\n\nTask: {instruction}"),
            None => instruction.to_string(),
        };
        let mut config = self.config.clone();
        if let Some(max_steps) = max_steps {
            config.max_steps = max_steps;
        }
        let orchestrator = CuaOrchestrator::new(
            self.session.clone(),
            self.model.clone(),
            self.translator.clone(),
            self.instructions.clone(),
            config,
        );
        orchestrator.run(&task).await
    }

    pub async fn screenshot(&self) -> Result<String, AgentError> {
        self.ensure_connected()?;
        Ok(self.session.screenshot_base64().await?)
    }

    pub async fn launch_app(&self, app_id: &str) -> Result<(), AgentError> {
        self.ensure_connected()?;
        Ok(self.session.launch_app(app_id).await?)
    }

    pub async fn open_url(&self, url: &str) -> Result<(), AgentError> {
        self.ensure_connected()?;
        Ok(self.session.open_url(url).await?)
    }

    pub async fn go_home(&self) -> Result<(), AgentError> {
        self.ensure_connected()?;
        Ok(self.session.press_home().await?)
    }

    pub async fn go_back(&self) -> Result<(), AgentError> {
        self.ensure_connected()?;
        Ok(self.session.press_back().await?)
    }

    pub async fn orientation(&self) -> Result<Orientation, AgentError> {
        self.ensure_connected()?;
        Ok(self.session.orientation().await?)
    }

    pub async fn page_source(&self) -> Result<String, AgentError> {
        self.ensure_connected()?;
        Ok(self.session.page_source().await?)
    }

    fn ensure_connected(&self) -> Result<(), AgentError> {
        if self.is_connected() {
            Ok(())
        } else {
            Err(AgentError::NotConnected)
        }
    }
}

#[cfg(test)]
#[path = "agent_tests.rs"]
mod tests;
