//! The scanning WebSocket: upgrade handling and the per-connection
//! session loop.

use axum::extract::ws::{Message as WsMessage, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;
use tracing::{debug, info, warn};
use uuid::Uuid;

use plantgo_core::{ClientMessage, FrameMessage, ServerMessage};
use plantgo_scanner::ScanSession;

use crate::server::AppState;

/// GET /ws — upgrade and hand the socket to an isolated session loop.
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| run_session(socket, state))
}

/// Drive one scanning session until the connection closes or fails.
///
/// Strictly sequential: read one message, update the counter, write any
/// due emissions, repeat. Malformed messages and unknown types are dropped
/// without advancing the counter; a failed write ends the session.
pub async fn run_session(mut socket: WebSocket, state: AppState) {
    let conn_id = format!("conn_{}", Uuid::now_v7());
    info!(conn = %conn_id, "websocket connection established");

    let mut session = ScanSession::new();

    loop {
        let msg = match socket.recv().await {
            Some(Ok(msg)) => msg,
            Some(Err(e)) => {
                debug!(conn = %conn_id, error = %e, "websocket read failed");
                break;
            }
            None => break,
        };

        let frame = match msg {
            WsMessage::Text(text) => match serde_json::from_str(text.as_str()) {
                Ok(ClientMessage::VideoFrame(frame)) => frame,
                Ok(ClientMessage::Unknown) => continue,
                Err(e) => {
                    warn!(conn = %conn_id, error = %e, "discarding malformed message");
                    continue;
                }
            },
            WsMessage::Close(_) => break,
            // Binary payloads and control frames are not part of the
            // scanning protocol; axum answers pings itself.
            _ => continue,
        };

        if process_frame(&mut socket, &state, &mut session, &frame, &conn_id)
            .await
            .is_err()
        {
            break;
        }
    }

    info!(
        conn = %conn_id,
        pending_frames = session.frame_count(),
        "websocket connection closed"
    );
}

/// Advance the session by one frame and write whatever came due.
///
/// The progress update, when it fires, is written before the threshold is
/// acted on; both can fire for a single frame.
async fn process_frame(
    socket: &mut WebSocket,
    state: &AppState,
    session: &mut ScanSession,
    frame: &FrameMessage,
    conn_id: &str,
) -> Result<(), axum::Error> {
    let outcome = session.record_frame();

    if let Some(confidence) = outcome.progress {
        let update = ServerMessage::ScanningProgress {
            confidence,
            session_id: frame.session_id.clone(),
        };
        send_json(socket, &update).await?;
    }

    if outcome.scan_complete {
        let identification = state.classifier.classify(&frame.frame).await;
        debug!(
            conn = %conn_id,
            plant = %identification.plant_name,
            "scan cycle complete"
        );
        let result = ServerMessage::PlantIdentified {
            plant_name: identification.plant_name,
            confidence: identification.confidence,
            session_id: frame.session_id.clone(),
        };
        send_json(socket, &result).await?;
    }

    Ok(())
}

async fn send_json(socket: &mut WebSocket, msg: &ServerMessage) -> Result<(), axum::Error> {
    match serde_json::to_string(msg) {
        Ok(json) => socket.send(WsMessage::Text(json.into())).await,
        Err(e) => {
            tracing::error!(error = %e, "failed to serialize outbound message");
            Ok(())
        }
    }
}
