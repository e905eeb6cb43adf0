// Tests for decoding provider frames into recognition events

use scribe_relay::recognition::wire::decode_event;
use scribe_relay::recognition::RecognitionEvent;

#[test]
fn test_decodes_final_transcript_with_speakers() {
    let raw = r#"{
        "type": "Results",
        "channel_index": [0, 1],
        "start": 0.0,
        "duration": 1.2,
        "is_final": true,
        "speech_final": true,
        "channel": {
            "alternatives": [{
                "transcript": "hello world",
                "confidence": 0.98,
                "words": [
                    {"word": "hello", "start": 0.0, "end": 0.5, "confidence": 0.99, "speaker": 0},
                    {"word": "world", "start": 0.6, "end": 1.1, "confidence": 0.97, "speaker": 1}
                ]
            }]
        }
    }"#;

    match decode_event(raw) {
        Some(RecognitionEvent::FinalTranscript(result)) => {
            assert_eq!(result.text, "hello world");
            assert!(result.is_final);
            assert!(result.speech_final);
            assert!((result.duration - 1.2).abs() < 1e-9);
            assert_eq!(result.words.len(), 2);
            assert_eq!(result.words[0].speaker, Some(0));
            assert_eq!(result.words[1].speaker, Some(1));
        }
        other => panic!("unexpected event: {:?}", other),
    }
}

#[test]
fn test_decodes_interim_transcript() {
    let raw = r#"{
        "type": "Results",
        "start": 2.5,
        "duration": 0.4,
        "is_final": false,
        "speech_final": false,
        "channel": {
            "alternatives": [{"transcript": "hel", "words": []}]
        }
    }"#;

    match decode_event(raw) {
        Some(RecognitionEvent::InterimTranscript(result)) => {
            assert_eq!(result.text, "hel");
            assert!(!result.is_final);
            assert!((result.start - 2.5).abs() < 1e-9);
        }
        other => panic!("unexpected event: {:?}", other),
    }
}

#[test]
fn test_decodes_words_without_speaker() {
    let raw = r#"{
        "type": "Results",
        "start": 0.0,
        "duration": 0.5,
        "is_final": true,
        "channel": {
            "alternatives": [{
                "transcript": "hi",
                "words": [{"word": "hi", "start": 0.0, "end": 0.3}]
            }]
        }
    }"#;

    match decode_event(raw) {
        Some(RecognitionEvent::FinalTranscript(result)) => {
            assert_eq!(result.words[0].speaker, None);
        }
        other => panic!("unexpected event: {:?}", other),
    }
}

#[test]
fn test_decodes_utterance_end() {
    let raw = r#"{"type": "UtteranceEnd", "channel": [0, 1], "last_word_end": 3.1}"#;
    match decode_event(raw) {
        Some(RecognitionEvent::UtteranceEnd { last_word_end }) => {
            assert!((last_word_end - 3.1).abs() < 1e-9);
        }
        other => panic!("unexpected event: {:?}", other),
    }
}

#[test]
fn test_decodes_speech_started() {
    let raw = r#"{"type": "SpeechStarted", "channel": [0, 1], "timestamp": 0.7}"#;
    match decode_event(raw) {
        Some(RecognitionEvent::SpeechStarted { timestamp }) => {
            assert!((timestamp - 0.7).abs() < 1e-9);
        }
        other => panic!("unexpected event: {:?}", other),
    }
}

#[test]
fn test_metadata_frames_are_skipped() {
    let raw = r#"{"type": "Metadata", "request_id": "1b2c", "model_info": {}}"#;
    assert!(decode_event(raw).is_none());
}

#[test]
fn test_unknown_message_types_are_skipped() {
    let raw = r#"{"type": "Warning", "description": "slow audio"}"#;
    assert!(decode_event(raw).is_none());
}

#[test]
fn test_malformed_frames_are_skipped() {
    assert!(decode_event("not json at all").is_none());
    assert!(decode_event(r#"{"type": "Results"}"#).is_none());
}

#[test]
fn test_results_without_alternatives_are_skipped() {
    let raw = r#"{
        "type": "Results",
        "start": 0.0,
        "duration": 0.1,
        "is_final": true,
        "channel": {"alternatives": []}
    }"#;
    assert!(decode_event(raw).is_none());
}
