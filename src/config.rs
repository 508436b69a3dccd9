use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::game::DEFAULT_COMPUTER_DELAY;

/// Configuration for the game server
#[derive(Parser, Debug, Clone)]
#[command(name = "caro", about = "Five-in-a-row game server")]
pub struct ServerConfig {
    /// Address the HTTP/WebSocket listener binds to
    #[arg(long, env = "CARO_LISTEN_ADDR", default_value = "0.0.0.0:8080")]
    pub listen_addr: SocketAddr,

    /// Directory served at `/`
    #[arg(long, env = "CARO_STATIC_DIR", default_value = "./frontend")]
    pub static_dir: PathBuf,

    /// How long the computer waits before replying, in milliseconds
    #[arg(
        long,
        env = "CARO_COMPUTER_DELAY_MS",
        default_value_t = DEFAULT_COMPUTER_DELAY.as_millis() as u64
    )]
    pub computer_delay_ms: u64,
}

impl ServerConfig {
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            static_dir: PathBuf::from("./frontend"),
            computer_delay_ms: DEFAULT_COMPUTER_DELAY.as_millis() as u64,
        }
    }
}
