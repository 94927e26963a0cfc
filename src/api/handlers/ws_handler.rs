//! WebSocket endpoint feeding the realtime notifier.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures::{SinkExt, StreamExt};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::api::AppState;
use crate::config::EVENT_INBOUND_MESSAGE;
use crate::infra::Notifier;

/// Inbound client frame: `{"event": <name>, "data": <payload>}`.
#[derive(Debug, Deserialize)]
struct InboundEvent {
    event: String,
    #[serde(default)]
    data: serde_json::Value,
}

/// Handle WebSocket upgrade request
pub async fn websocket_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    let notifier = state.notifier.clone();
    ws.on_upgrade(move |socket| handle_socket(socket, notifier))
}

/// Handle an individual WebSocket connection
async fn handle_socket(socket: WebSocket, notifier: Arc<Notifier>) {
    let (mut ws_sender, mut ws_receiver) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel();

    let conn_id = Uuid::new_v4();
    notifier.register(conn_id, tx);

    // Forward outbound events to the peer until the channel closes.
    let send_task = tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            let Ok(text) = serde_json::to_string(&event) else {
                continue;
            };
            if ws_sender.send(Message::Text(text)).await.is_err() {
                break;
            }
        }
    });

    // Clients may emit arbitrary named events; only one is consumed.
    while let Some(msg) = ws_receiver.next().await {
        match msg {
            Ok(Message::Text(text)) => {
                if let Ok(inbound) = serde_json::from_str::<InboundEvent>(&text) {
                    if inbound.event == EVENT_INBOUND_MESSAGE {
                        tracing::info!(connection_id = %conn_id, data = %inbound.data, "client message");
                    }
                }
            }
            Ok(Message::Close(_)) => break,
            Err(err) => {
                tracing::warn!(connection_id = %conn_id, error = %err, "websocket error");
                break;
            }
            _ => {}
        }
    }

    notifier.unregister(&conn_id);
    send_task.abort();
}
