//! Shared data types for the PlantGo backend: the WebSocket wire protocol
//! and the riddle catalog entity.

pub mod messages;
pub mod riddle;

pub use messages::{ClientMessage, FrameMessage, ServerMessage};
pub use riddle::Riddle;
