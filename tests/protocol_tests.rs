// Tests for the outbound client message format
//
// These tests pin the exact `{"type", "payload"}` wire shape consumed
// by clients of the transcription channel.

use scribe_relay::protocol::{ClientMessage, EventNotice, SegmentPayload};

#[test]
fn test_status_message_shape() {
    let msg = ClientMessage::Status("Recognition stream connected".to_string());
    let json = serde_json::to_value(&msg).unwrap();
    assert_eq!(json["type"], "status");
    assert_eq!(json["payload"], "Recognition stream connected");
}

#[test]
fn test_transcript_segment_shape() {
    let msg = ClientMessage::TranscriptSegment(SegmentPayload {
        text: "hello world".to_string(),
        is_final: true,
        speech_final: false,
        speaker: Some("speaker_0".to_string()),
        start: 0.0,
        end: 1.2,
    });
    let json = serde_json::to_value(&msg).unwrap();
    assert_eq!(json["type"], "transcript_segment");
    assert_eq!(json["payload"]["text"], "hello world");
    assert_eq!(json["payload"]["is_final"], true);
    assert_eq!(json["payload"]["speech_final"], false);
    assert_eq!(json["payload"]["speaker"], "speaker_0");
    assert_eq!(json["payload"]["start"], 0.0);
    assert_eq!(json["payload"]["end"], 1.2);
}

#[test]
fn test_transcript_segment_without_speaker() {
    let msg = ClientMessage::TranscriptSegment(SegmentPayload {
        text: "no diarization".to_string(),
        is_final: false,
        speech_final: false,
        speaker: None,
        start: 2.0,
        end: 2.5,
    });
    let json = serde_json::to_value(&msg).unwrap();
    assert!(json["payload"]["speaker"].is_null());
}

#[test]
fn test_event_notice_shapes() {
    let json = serde_json::to_value(ClientMessage::Event(EventNotice::SpeechStarted)).unwrap();
    assert_eq!(json["type"], "event");
    assert_eq!(json["payload"]["type"], "speech_started");

    let json = serde_json::to_value(ClientMessage::Event(EventNotice::UtteranceEnd)).unwrap();
    assert_eq!(json["payload"]["type"], "utterance_end");

    let json = serde_json::to_value(ClientMessage::Event(EventNotice::PersistenceWarning {
        message: "storage returned status 503".to_string(),
    }))
    .unwrap();
    assert_eq!(json["payload"]["type"], "persistence_warning");
    assert_eq!(json["payload"]["message"], "storage returned status 503");
}

#[test]
fn test_error_message_shape() {
    let msg = ClientMessage::Error("recognition provider error: boom".to_string());
    let json = serde_json::to_value(&msg).unwrap();
    assert_eq!(json["type"], "error");
    assert_eq!(json["payload"], "recognition provider error: boom");
}

#[test]
fn test_messages_round_trip() {
    let json = r#"{"type":"transcript_segment","payload":{"text":"hi","is_final":true,"speech_final":true,"speaker":null,"start":0.0,"end":0.4}}"#;
    let msg: ClientMessage = serde_json::from_str(json).unwrap();
    match msg {
        ClientMessage::TranscriptSegment(payload) => {
            assert_eq!(payload.text, "hi");
            assert!(payload.is_final);
            assert!(payload.speech_final);
            assert!(payload.speaker.is_none());
        }
        other => panic!("unexpected message: {:?}", other),
    }
}
