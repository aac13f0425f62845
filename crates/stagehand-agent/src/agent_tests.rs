use super::*;
use std::sync::Mutex;

use async_trait::async_trait;

use stagehand_protocols::action::NormalizedAction;
use stagehand_protocols::error::{DeviceError, ProviderError};
use stagehand_protocols::pointer::PointerSequence;
use stagehand_protocols::profile::MobilePlatform;
use stagehand_protocols::provider::{FinishReason, ModelTurn, ModelUsage};
use stagehand_protocols::turn::ConversationTurn;

struct FakeSession {
    fail_disconnect: bool,
    disconnects: Mutex<u32>,
}

impl FakeSession {
    fn new() -> Self {
        Self {
            fail_disconnect: false,
            disconnects: Mutex::new(0),
        }
    }

    fn with_failing_disconnect() -> Self {
        Self {
            fail_disconnect: true,
            disconnects: Mutex::new(0),
        }
    }
}

#[async_trait]
impl DeviceSession for FakeSession {
    fn viewport_width(&self) -> u32 {
        393
    }

    fn viewport_height(&self) -> u32 {
        852
    }

    async fn disconnect(&self) -> Result<(), DeviceError> {
        *self.disconnects.lock().unwrap() += 1;
        if self.fail_disconnect {
            Err(DeviceError::Session("already gone".to_string()))
        } else {
            Ok(())
        }
    }

    async fn screenshot_base64(&self) -> Result<String, DeviceError> {
        Ok("c2hvdA==".to_string())
    }

    async fn press_home(&self) -> Result<(), DeviceError> {
        Ok(())
    }

    async fn press_back(&self) -> Result<(), DeviceError> {
        Ok(())
    }

    async fn launch_app(&self, _app_id: &str) -> Result<(), DeviceError> {
        Ok(())
    }

    async fn open_url(&self, _url: &str) -> Result<(), DeviceError> {
        Ok(())
    }

    async fn hide_keyboard(&self) -> Result<(), DeviceError> {
        Ok(())
    }

    async fn send_keys(&self, _text: &str) -> Result<(), DeviceError> {
        Ok(())
    }

    async fn orientation(&self) -> Result<Orientation, DeviceError> {
        Ok(Orientation::Landscape)
    }

    async fn set_orientation(&self, _orientation: Orientation) -> Result<(), DeviceError> {
        Ok(())
    }

    async fn page_source(&self) -> Result<String, DeviceError> {
        Ok("<hierarchy/>".to_string())
    }

    async fn perform_pointer(&self, _sequence: &PointerSequence) -> Result<(), DeviceError> {
        Ok(())
    }

    async fn perform_multi_pointer(
        &self,
        _sequences: &[PointerSequence],
    ) -> Result<(), DeviceError> {
        Ok(())
    }
}

/// Completes immediately, recording the first turn's text.
struct DoneModel {
    first_turn_text: Mutex<Option<String>>,
}

impl DoneModel {
    fn new() -> Self {
        Self {
            first_turn_text: Mutex::new(None),
        }
    }
}

#[async_trait]
impl ComputerUseModel for DoneModel {
    async fn request_turn(
        &self,
        history: &[ConversationTurn],
    ) -> Result<Option<ModelTurn>, ProviderError> {
        *self.first_turn_text.lock().unwrap() = history[0].text();
        Ok(Some(ModelTurn {
            reasoning: Some("Done.".to_string()),
            function_calls: Vec::new(),
            finish_reason: FinishReason::Stop,
            usage: ModelUsage::default(),
        }))
    }
}

struct NullTranslator;

impl ActionTranslator for NullTranslator {
    fn translate(&self, _name: &str, _args: &serde_json::Value) -> Option<NormalizedAction> {
        None
    }
}

fn agent_with(session: Arc<FakeSession>, options: AgentOptions) -> (MobileAgent, Arc<DoneModel>) {
    let model = Arc::new(DoneModel::new());
    let agent = MobileAgent::new(session, model.clone(), Arc::new(NullTranslator), options)
        .expect("valid options");
    (agent, model)
}

#[test]
fn test_default_profile_is_iphone_15_pro() {
    let (agent, _) = agent_with(Arc::new(FakeSession::new()), AgentOptions::default());
    assert_eq!(agent.profile().name, "iPhone 15 Pro");
    assert_eq!(agent.profile().viewport_width, 393);
}

#[test]
fn test_device_key_resolves_preset() {
    let options = AgentOptions {
        device: Some("pixel_8".to_string()),
        ..AgentOptions::default()
    };
    let (agent, _) = agent_with(Arc::new(FakeSession::new()), options);
    assert_eq!(agent.profile().platform, MobilePlatform::Android);
    assert_eq!(agent.profile().viewport_width, 412);
}

#[test]
fn test_custom_profile_beats_device_key() {
    let custom = DeviceProfile::new("Bench Device", MobilePlatform::Android, 400, 800);
    let options = AgentOptions {
        device: Some("pixel_8".to_string()),
        profile: Some(custom),
        ..AgentOptions::default()
    };
    let (agent, _) = agent_with(Arc::new(FakeSession::new()), options);
    assert_eq!(agent.profile().name, "Bench Device");
}

#[test]
fn test_unknown_device_key_lists_available() {
    let options = AgentOptions {
        device: Some("nokia_3310".to_string()),
        ..AgentOptions::default()
    };
    let err = MobileAgent::new(
        Arc::new(FakeSession::new()),
        Arc::new(DoneModel::new()),
        Arc::new(NullTranslator),
        options,
    )
    .err()
    .unwrap();
    let message = err.to_string();
    assert!(message.contains("nokia_3310"));
    assert!(message.contains("iphone_15_pro"));
    assert!(message.contains("pixel_8"));
}

#[tokio::test]
async fn test_passthroughs_require_connection() {
    let (agent, _) = agent_with(Arc::new(FakeSession::new()), AgentOptions::default());

    assert!(matches!(
        agent.screenshot().await,
        Err(AgentError::NotConnected)
    ));
    assert!(matches!(
        agent.launch_app("com.example").await,
        Err(AgentError::NotConnected)
    ));
    assert!(matches!(
        agent.open_url("https://example.com").await,
        Err(AgentError::NotConnected)
    ));
    assert!(matches!(agent.go_home().await, Err(AgentError::NotConnected)));
    assert!(matches!(agent.go_back().await, Err(AgentError::NotConnected)));
    assert!(matches!(
        agent.orientation().await,
        Err(AgentError::NotConnected)
    ));
    assert!(matches!(
        agent.page_source().await,
        Err(AgentError::NotConnected)
    ));
    assert!(matches!(
        agent.execute("task", None, None).await,
        Err(AgentError::NotConnected)
    ));
}

#[tokio::test]
async fn test_passthroughs_after_connect() {
    let (agent, _) = agent_with(Arc::new(FakeSession::new()), AgentOptions::default());
    agent.connect().unwrap();

    assert_eq!(agent.screenshot().await.unwrap(), "c2hvdA==");
    assert_eq!(agent.orientation().await.unwrap(), Orientation::Landscape);
    assert_eq!(agent.page_source().await.unwrap(), "<hierarchy/>");
    agent.go_home().await.unwrap();
    agent.go_back().await.unwrap();
}

#[tokio::test]
async fn test_disconnect_is_idempotent() {
    let session = Arc::new(FakeSession::new());
    let (agent, _) = agent_with(session.clone(), AgentOptions::default());
    agent.connect().unwrap();

    agent.disconnect().await;
    agent.disconnect().await;

    assert_eq!(*session.disconnects.lock().unwrap(), 1);
    assert!(!agent.is_connected());
}

#[tokio::test]
async fn test_disconnect_swallows_session_errors() {
    let session = Arc::new(FakeSession::with_failing_disconnect());
    let (agent, _) = agent_with(session.clone(), AgentOptions::default());
    agent.connect().unwrap();

    agent.disconnect().await;
    assert!(!agent.is_connected());
}

#[tokio::test]
async fn test_execute_prefixes_context() {
    let (agent, model) = agent_with(Arc::new(FakeSession::new()), AgentOptions::default());
    agent.connect().unwrap();

    let result = agent
        .execute(
            "Check tomorrow's forecast",
            None,
            Some("The weather app is already installed."),
        )
        .await
        .unwrap();

    assert!(result.completed);
    let text = model.first_turn_text.lock().unwrap().clone().unwrap();
    assert!(text.contains(
        "The weather app is already installed.\n\nTask: Check tomorrow's forecast"
    ));
}

#[tokio::test]
async fn test_execute_without_context_uses_raw_instruction() {
    let (agent, model) = agent_with(Arc::new(FakeSession::new()), AgentOptions::default());
    agent.connect().unwrap();

    agent.execute("Open settings", None, None).await.unwrap();

    let text = model.first_turn_text.lock().unwrap().clone().unwrap();
    assert_eq!(text, "Open settings");
}
