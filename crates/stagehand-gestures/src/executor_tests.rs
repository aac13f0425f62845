use super::*;
use std::sync::Mutex;

use async_trait::async_trait;
use stagehand_protocols::device::Orientation;
use stagehand_protocols::pointer::{PointerEvent, PointerSequence};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Pointer(PointerSequence),
    MultiPointer(Vec<PointerSequence>),
    SendKeys(String),
    PressHome,
    PressBack,
    LaunchApp(String),
    OpenUrl(String),
    HideKeyboard,
}

struct RecordingSession {
    calls: Mutex<Vec<Call>>,
    fail_gestures: bool,
}

impl RecordingSession {
    fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_gestures: false,
        }
    }

    fn failing() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_gestures: true,
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl DeviceSession for RecordingSession {
    fn viewport_width(&self) -> u32 {
        393
    }

    fn viewport_height(&self) -> u32 {
        852
    }

    async fn disconnect(&self) -> Result<(), DeviceError> {
        Ok(())
    }

    async fn screenshot_base64(&self) -> Result<String, DeviceError> {
        Ok("c2NyZWVu".to_string())
    }

    async fn press_home(&self) -> Result<(), DeviceError> {
        self.record(Call::PressHome);
        Ok(())
    }

    async fn press_back(&self) -> Result<(), DeviceError> {
        self.record(Call::PressBack);
        Ok(())
    }

    async fn launch_app(&self, app_id: &str) -> Result<(), DeviceError> {
        self.record(Call::LaunchApp(app_id.to_string()));
        Ok(())
    }

    async fn open_url(&self, url: &str) -> Result<(), DeviceError> {
        self.record(Call::OpenUrl(url.to_string()));
        Ok(())
    }

    async fn hide_keyboard(&self) -> Result<(), DeviceError> {
        self.record(Call::HideKeyboard);
        Ok(())
    }

    async fn send_keys(&self, text: &str) -> Result<(), DeviceError> {
        self.record(Call::SendKeys(text.to_string()));
        Ok(())
    }

    async fn orientation(&self) -> Result<Orientation, DeviceError> {
        Ok(Orientation::Portrait)
    }

    async fn set_orientation(&self, _orientation: Orientation) -> Result<(), DeviceError> {
        Ok(())
    }

    async fn page_source(&self) -> Result<String, DeviceError> {
        Ok("<hierarchy/>".to_string())
    }

    async fn perform_pointer(&self, sequence: &PointerSequence) -> Result<(), DeviceError> {
        if self.fail_gestures {
            return Err(DeviceError::Gesture("pointer rejected".to_string()));
        }
        self.record(Call::Pointer(sequence.clone()));
        Ok(())
    }

    async fn perform_multi_pointer(
        &self,
        sequences: &[PointerSequence],
    ) -> Result<(), DeviceError> {
        if self.fail_gestures {
            return Err(DeviceError::Gesture("pointer rejected".to_string()));
        }
        self.record(Call::MultiPointer(sequences.to_vec()));
        Ok(())
    }
}

fn executor(session: &Arc<RecordingSession>) -> ActionExecutor {
    ActionExecutor::new(session.clone())
}

fn first_move(seq: &PointerSequence) -> (i64, i64) {
    match seq.events[0] {
        PointerEvent::Move { x, y, .. } => (x, y),
        ref other => panic!("expected move, got {:?}", other),
    }
}

#[tokio::test]
async fn test_tap_centers_at_normalized_pixels() {
    let session = Arc::new(RecordingSession::new());
    let result = executor(&session)
        .perform(&NormalizedAction::Tap {
            x: 500,
            y: 500,
            duration_ms: None,
        })
        .await;

    assert!(result.success);
    let calls = session.calls();
    assert_eq!(calls.len(), 1);
    match &calls[0] {
        Call::Pointer(seq) => {
            // Grid (500, 500) on 393x852 lands at pixel (196, 426).
            assert_eq!(first_move(seq), (196, 426));
            assert!(seq
                .events
                .iter()
                .any(|e| matches!(e, PointerEvent::Pause { duration_ms: 50 })));
        }
        other => panic!("unexpected call {:?}", other),
    }
}

#[tokio::test]
async fn test_tap_honors_hold_duration() {
    let session = Arc::new(RecordingSession::new());
    executor(&session)
        .perform(&NormalizedAction::Tap {
            x: 0,
            y: 0,
            duration_ms: Some(120),
        })
        .await;

    match &session.calls()[0] {
        Call::Pointer(seq) => {
            assert!(seq
                .events
                .iter()
                .any(|e| matches!(e, PointerEvent::Pause { duration_ms: 120 })));
        }
        other => panic!("unexpected call {:?}", other),
    }
}

#[tokio::test]
async fn test_click_remaps_to_tap() {
    let session = Arc::new(RecordingSession::new());
    let result = executor(&session)
        .perform(&NormalizedAction::Click { x: 1000, y: 1000 })
        .await;

    assert!(result.success);
    match &session.calls()[0] {
        Call::Pointer(seq) => assert_eq!(first_move(seq), (393, 852)),
        other => panic!("unexpected call {:?}", other),
    }
}

#[tokio::test]
async fn test_double_click_remaps_to_double_tap() {
    let session = Arc::new(RecordingSession::new());
    executor(&session)
        .perform(&NormalizedAction::DoubleClick { x: 500, y: 500 })
        .await;

    match &session.calls()[0] {
        Call::Pointer(seq) => {
            let downs = seq
                .events
                .iter()
                .filter(|e| matches!(e, PointerEvent::Down))
                .count();
            assert_eq!(downs, 2);
        }
        other => panic!("unexpected call {:?}", other),
    }
}

#[tokio::test]
async fn test_long_press_default_duration_from_translator() {
    let session = Arc::new(RecordingSession::new());
    executor(&session)
        .perform(&NormalizedAction::LongPress {
            x: 100,
            y: 100,
            duration_ms: 500,
        })
        .await;

    match &session.calls()[0] {
        Call::Pointer(seq) => assert!(seq
            .events
            .iter()
            .any(|e| matches!(e, PointerEvent::Pause { duration_ms: 500 }))),
        other => panic!("unexpected call {:?}", other),
    }
}

#[tokio::test]
async fn test_swipe_normalizes_both_endpoints() {
    let session = Arc::new(RecordingSession::new());
    executor(&session)
        .perform(&NormalizedAction::Swipe {
            start_x: 500,
            start_y: 700,
            end_x: 500,
            end_y: 300,
            duration_ms: 300,
        })
        .await;

    match &session.calls()[0] {
        Call::Pointer(seq) => {
            assert_eq!(first_move(seq), (196, 596));
            let last_move = seq
                .events
                .iter()
                .rev()
                .find_map(|e| match e {
                    PointerEvent::Move { x, y, .. } => Some((*x, *y)),
                    _ => None,
                })
                .unwrap();
            assert_eq!(last_move, (196, 255));
        }
        other => panic!("unexpected call {:?}", other),
    }
}

#[tokio::test]
async fn test_pinch_uses_two_fingers() {
    let session = Arc::new(RecordingSession::new());
    let result = executor(&session)
        .perform(&NormalizedAction::Pinch {
            center_x: 500,
            center_y: 500,
            scale: 0.5,
            duration_ms: 300,
        })
        .await;

    assert!(result.success);
    match &session.calls()[0] {
        Call::MultiPointer(seqs) => {
            assert_eq!(seqs.len(), 2);
            assert_ne!(seqs[0].pointer, seqs[1].pointer);
        }
        other => panic!("unexpected call {:?}", other),
    }
}

#[tokio::test]
async fn test_rotate_uses_two_fingers() {
    let session = Arc::new(RecordingSession::new());
    executor(&session)
        .perform(&NormalizedAction::Rotate {
            center_x: 500,
            center_y: 500,
            angle: 45.0,
            duration_ms: 300,
        })
        .await;

    assert!(matches!(&session.calls()[0], Call::MultiPointer(seqs) if seqs.len() == 2));
}

#[tokio::test]
async fn test_type_taps_then_sends_keys() {
    let session = Arc::new(RecordingSession::new());
    executor(&session)
        .perform(&NormalizedAction::Type {
            text: "weather".to_string(),
            x: Some(500),
            y: Some(100),
            press_enter_after: false,
        })
        .await;

    let calls = session.calls();
    assert_eq!(calls.len(), 2);
    assert!(matches!(calls[0], Call::Pointer(_)));
    assert_eq!(calls[1], Call::SendKeys("weather".to_string()));
}

#[tokio::test]
async fn test_type_without_coordinates_skips_focus_tap() {
    let session = Arc::new(RecordingSession::new());
    executor(&session)
        .perform(&NormalizedAction::Type {
            text: "plain".to_string(),
            x: None,
            y: None,
            press_enter_after: false,
        })
        .await;

    assert_eq!(session.calls(), vec![Call::SendKeys("plain".to_string())]);
}

#[tokio::test]
async fn test_type_press_enter_sends_separate_newline() {
    let session = Arc::new(RecordingSession::new());
    executor(&session)
        .perform(&NormalizedAction::Type {
            text: "query".to_string(),
            x: None,
            y: None,
            press_enter_after: true,
        })
        .await;

    assert_eq!(
        session.calls(),
        vec![
            Call::SendKeys("query".to_string()),
            Call::SendKeys("\n".to_string())
        ]
    );
}

#[tokio::test]
async fn test_screenshot_action_is_noop_success() {
    let session = Arc::new(RecordingSession::new());
    let result = executor(&session).perform(&NormalizedAction::Screenshot).await;
    assert!(result.success);
    assert!(session.calls().is_empty());
}

#[tokio::test]
async fn test_function_goto() {
    let session = Arc::new(RecordingSession::new());
    let result = executor(&session)
        .perform(&NormalizedAction::Function {
            name: "goto".to_string(),
            arguments: Some(FunctionArguments {
                url: Some("https://example.com".to_string()),
                app_id: None,
            }),
        })
        .await;

    assert!(result.success);
    assert_eq!(
        session.calls(),
        vec![Call::OpenUrl("https://example.com".to_string())]
    );
}

#[tokio::test]
async fn test_function_goto_missing_url() {
    let session = Arc::new(RecordingSession::new());
    let result = executor(&session)
        .perform(&NormalizedAction::Function {
            name: "goto".to_string(),
            arguments: None,
        })
        .await;

    assert!(!result.success);
    assert!(result.error.unwrap().contains("url"));
    assert!(session.calls().is_empty());
}

#[tokio::test]
async fn test_function_navigation() {
    let session = Arc::new(RecordingSession::new());
    let exec = executor(&session);

    assert!(exec
        .perform(&NormalizedAction::Function {
            name: "navigate_back".to_string(),
            arguments: None
        })
        .await
        .success);
    assert!(exec
        .perform(&NormalizedAction::Function {
            name: "go_home".to_string(),
            arguments: None
        })
        .await
        .success);
    assert!(exec
        .perform(&NormalizedAction::Function {
            name: "hide_keyboard".to_string(),
            arguments: None
        })
        .await
        .success);

    assert_eq!(
        session.calls(),
        vec![Call::PressBack, Call::PressHome, Call::HideKeyboard]
    );
}

#[tokio::test]
async fn test_function_open_app() {
    let session = Arc::new(RecordingSession::new());
    let result = executor(&session)
        .perform(&NormalizedAction::Function {
            name: "open_app".to_string(),
            arguments: Some(FunctionArguments {
                url: None,
                app_id: Some("com.apple.mobilesafari".to_string()),
            }),
        })
        .await;

    assert!(result.success);
    assert_eq!(
        session.calls(),
        vec![Call::LaunchApp("com.apple.mobilesafari".to_string())]
    );
}

#[tokio::test]
async fn test_function_open_app_missing_id() {
    let session = Arc::new(RecordingSession::new());
    let result = executor(&session)
        .perform(&NormalizedAction::Function {
            name: "open_app".to_string(),
            arguments: Some(FunctionArguments::default()),
        })
        .await;

    assert!(!result.success);
    assert!(result.error.unwrap().contains("app_id"));
}

#[tokio::test]
async fn test_unknown_function_fails_with_name() {
    let session = Arc::new(RecordingSession::new());
    let result = executor(&session)
        .perform(&NormalizedAction::Function {
            name: "teleport".to_string(),
            arguments: None,
        })
        .await;

    assert!(!result.success);
    assert!(result.error.unwrap().contains("teleport"));
}

#[tokio::test]
async fn test_unsupported_action_fails_with_kind() {
    let session = Arc::new(RecordingSession::new());
    let exec = executor(&session);

    for action in [
        NormalizedAction::Keypress {
            keys: vec!["CONTROL".to_string(), "A".to_string()],
        },
        NormalizedAction::Move { x: 1, y: 2 },
        NormalizedAction::Drag { path: vec![] },
    ] {
        let result = exec.perform(&action).await;
        assert!(!result.success);
        assert!(result.error.unwrap().contains(action.kind()));
    }
    assert!(session.calls().is_empty());
}

#[tokio::test]
async fn test_device_error_becomes_failure_result() {
    let session = Arc::new(RecordingSession::failing());
    let result = executor(&session)
        .perform(&NormalizedAction::Tap {
            x: 500,
            y: 500,
            duration_ms: None,
        })
        .await;

    assert!(!result.success);
    assert!(result.error.unwrap().contains("pointer rejected"));
}

#[tokio::test]
async fn test_scroll_drags_from_anchor() {
    let session = Arc::new(RecordingSession::new());
    executor(&session)
        .perform(&NormalizedAction::Scroll {
            x: 500,
            y: 500,
            scroll_x: 0,
            scroll_y: 100,
        })
        .await;

    match &session.calls()[0] {
        Call::Pointer(seq) => {
            assert_eq!(first_move(seq), (196, 426));
            let last_move = seq
                .events
                .iter()
                .rev()
                .find_map(|e| match e {
                    PointerEvent::Move { x, y, .. } => Some((*x, *y)),
                    _ => None,
                })
                .unwrap();
            assert_eq!(last_move, (196, 326));
        }
        other => panic!("unexpected call {:?}", other),
    }
}
