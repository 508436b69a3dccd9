use async_trait::async_trait;
use axum::{
    extract::{State, WebSocketUpgrade},
    response::Response,
};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::game::GameCoordinator;
use crate::shared::{AppState, ConnectionId};
use crate::websockets::messages::ClientMessage;

use super::socket::{Connection, MessageHandler};

/// Message handler for receiving WebSocket messages from the client
pub struct WebsocketReceiveHandler {
    coordinator: GameCoordinator,
}

impl WebsocketReceiveHandler {
    pub fn new(coordinator: GameCoordinator) -> Self {
        Self { coordinator }
    }
}

#[async_trait]
impl MessageHandler for WebsocketReceiveHandler {
    async fn handle_message(&self, id: ConnectionId, message: String) {
        match ClientMessage::parse(&message) {
            Ok(client_message) => {
                self.coordinator.handle_message(id, client_message).await;
            }
            Err(e) => {
                warn!(
                    connection_id = %id,
                    error = %e,
                    message = %message,
                    "Dropping unusable message"
                );
            }
        }
    }
}

/// GET /ws - upgrade to the game's WebSocket protocol
pub async fn websocket_handler(ws: WebSocketUpgrade, State(app_state): State<AppState>) -> Response {
    info!("WebSocket connection requested");
    ws.on_upgrade(move |socket| handle_websocket_connection(socket, app_state.coordinator))
}

/// Handle the upgraded WebSocket connection
async fn handle_websocket_connection(
    socket: axum::extract::ws::WebSocket,
    coordinator: GameCoordinator,
) {
    let connection_id = ConnectionId::new();
    info!(connection_id = %connection_id, "WebSocket connection established");

    // Create the outbound channel (app -> client); the manager holds the only sender
    let (outbound_sender, outbound_receiver) = mpsc::unbounded_channel::<String>();
    coordinator.connect(connection_id, outbound_sender).await;

    let message_handler = Arc::new(WebsocketReceiveHandler::new(coordinator.clone()));

    let connection = Connection::new(
        connection_id,
        Box::new(socket),
        outbound_receiver,
        message_handler,
    );

    // Run the connection until disconnect
    match connection.run().await {
        Ok(()) => {
            info!(connection_id = %connection_id, "WebSocket connection closed cleanly");
        }
        Err(e) => {
            warn!(
                connection_id = %connection_id,
                error = %e,
                "WebSocket connection error"
            );
        }
    }

    coordinator.disconnect(connection_id).await;
}
