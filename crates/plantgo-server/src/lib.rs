//! Axum HTTP + WebSocket server for the PlantGo backend.

pub mod config;
pub mod routes;
pub mod server;
pub mod ws;

pub use config::ServerConfig;
pub use server::{build_router, start, AppState, ServerHandle};
