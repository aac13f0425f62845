use super::*;

#[test]
fn test_builder_orders_events() {
    let seq = PointerSequence::new("finger1")
        .move_to(10, 20, 0)
        .down()
        .pause(50)
        .up();

    assert_eq!(seq.pointer, "finger1");
    assert_eq!(seq.events.len(), 4);
    assert!(matches!(
        seq.events[0],
        PointerEvent::Move {
            x: 10,
            y: 20,
            duration_ms: 0
        }
    ));
    assert!(matches!(seq.events[1], PointerEvent::Down));
    assert!(matches!(seq.events[2], PointerEvent::Pause { duration_ms: 50 }));
    assert!(matches!(seq.events[3], PointerEvent::Up));
}

#[test]
fn test_total_duration_sums_moves_and_pauses() {
    let seq = PointerSequence::new("finger1")
        .move_to(0, 0, 0)
        .down()
        .move_to(100, 100, 300)
        .pause(50)
        .up();
    assert_eq!(seq.total_duration_ms(), 350);
}

#[test]
fn test_total_duration_empty() {
    let seq = PointerSequence::new("finger1");
    assert_eq!(seq.total_duration_ms(), 0);
}

#[test]
fn test_event_serde_tagged() {
    let event = PointerEvent::Move {
        x: 5,
        y: 6,
        duration_ms: 10,
    };
    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["event"], "move");
    assert_eq!(json["x"], 5);

    let down: PointerEvent = serde_json::from_str(r#"{"event":"down"}"#).unwrap();
    assert!(matches!(down, PointerEvent::Down));
}

#[test]
fn test_sequence_roundtrip() {
    let seq = PointerSequence::new("finger2").down().pause(100).up();
    let json = serde_json::to_string(&seq).unwrap();
    let back: PointerSequence = serde_json::from_str(&json).unwrap();
    assert_eq!(back, seq);
}
