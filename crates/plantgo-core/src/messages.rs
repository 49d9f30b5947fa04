use serde::{Deserialize, Serialize};

/// A message received from a scanning client.
///
/// Clients may send message types this server does not know about; those
/// deserialize to [`ClientMessage::Unknown`] and are ignored rather than
/// treated as protocol errors.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type")]
pub enum ClientMessage {
    #[serde(rename = "video_frame")]
    VideoFrame(FrameMessage),
    #[serde(other)]
    Unknown,
}

/// One streamed video frame. The payload is opaque to the server.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameMessage {
    pub frame: String,
    pub session_id: String,
    /// Producer-supplied capture time, advisory only.
    #[serde(default)]
    pub timestamp: i64,
}

/// A message sent back to a scanning client.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ServerMessage {
    #[serde(rename = "scanning_progress")]
    #[serde(rename_all = "camelCase")]
    ScanningProgress { confidence: f64, session_id: String },
    #[serde(rename = "plant_identified")]
    #[serde(rename_all = "camelCase")]
    PlantIdentified {
        plant_name: String,
        confidence: f64,
        session_id: String,
    },
}

impl ServerMessage {
    /// Session id the message is addressed to.
    pub fn session_id(&self) -> &str {
        match self {
            Self::ScanningProgress { session_id, .. } => session_id,
            Self::PlantIdentified { session_id, .. } => session_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_frame_parses() {
        let raw = r#"{"type":"video_frame","frame":"base64data","sessionId":"sess_1","timestamp":1700000000000}"#;
        let msg: ClientMessage = serde_json::from_str(raw).unwrap();
        match msg {
            ClientMessage::VideoFrame(f) => {
                assert_eq!(f.frame, "base64data");
                assert_eq!(f.session_id, "sess_1");
                assert_eq!(f.timestamp, 1_700_000_000_000);
            }
            ClientMessage::Unknown => panic!("expected video_frame"),
        }
    }

    #[test]
    fn missing_timestamp_defaults_to_zero() {
        let raw = r#"{"type":"video_frame","frame":"x","sessionId":"sess_1"}"#;
        let msg: ClientMessage = serde_json::from_str(raw).unwrap();
        match msg {
            ClientMessage::VideoFrame(f) => assert_eq!(f.timestamp, 0),
            ClientMessage::Unknown => panic!("expected video_frame"),
        }
    }

    #[test]
    fn unknown_type_is_not_an_error() {
        let raw = r#"{"type":"ping","payload":123}"#;
        let msg: ClientMessage = serde_json::from_str(raw).unwrap();
        assert!(matches!(msg, ClientMessage::Unknown));
    }

    #[test]
    fn video_frame_missing_fields_is_an_error() {
        // A "video_frame" without its payload is malformed, not Unknown.
        let raw = r#"{"type":"video_frame"}"#;
        assert!(serde_json::from_str::<ClientMessage>(raw).is_err());
    }

    #[test]
    fn progress_serializes_with_wire_names() {
        let msg = ServerMessage::ScanningProgress {
            confidence: 0.3,
            session_id: "sess_1".into(),
        };
        let json: serde_json::Value = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "scanning_progress");
        assert_eq!(json["confidence"], 0.3);
        assert_eq!(json["sessionId"], "sess_1");
    }

    #[test]
    fn result_serializes_with_wire_names() {
        let msg = ServerMessage::PlantIdentified {
            plant_name: "Peace Lily".into(),
            confidence: 0.87,
            session_id: "sess_2".into(),
        };
        let json: serde_json::Value = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "plant_identified");
        assert_eq!(json["plantName"], "Peace Lily");
        assert_eq!(json["confidence"], 0.87);
        assert_eq!(json["sessionId"], "sess_2");
    }

    #[test]
    fn session_id_accessor() {
        let msg = ServerMessage::ScanningProgress {
            confidence: 0.6,
            session_id: "sess_9".into(),
        };
        assert_eq!(msg.session_id(), "sess_9");
    }
}
