// Library crate for the Caro game server
// This file exposes the public API for integration tests

pub mod bot;
pub mod config;
pub mod game;
pub mod server;
pub mod shared;
pub mod websockets;

// Re-export commonly used types for easier access in tests
pub use bot::{BotStrategy, RandomBotStrategy};
pub use config::ServerConfig;
pub use game::{Board, Coord, GameCoordinator, GameMode, GameSession, Symbol};
pub use shared::{AppError, AppState, ConnectionId};
pub use websockets::{
    ClientMessage, ConnectionManager, InMemoryConnectionManager, MessageHandler, ServerMessage,
    WebsocketReceiveHandler,
};
