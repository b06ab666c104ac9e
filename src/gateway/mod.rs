// src/gateway/mod.rs
//
// Chat Platform Gateway
//
// The seam between the resolution pipeline and whatever chat platform hosts
// the bot. The platform session lifecycle (connect, reconnect, presence) is
// an external collaborator; this module owns the per-message pipeline, the
// transport trait it responds through, and the one-shot disconnect signal.

pub mod console;
pub mod handler;
pub mod shutdown;
pub mod transport;


pub use console::{ConsoleSession, ConsoleTransport};
pub use handler::MessageHandler;
pub use shutdown::{shutdown_channel, DisconnectHandle, ShutdownSignal};
pub use transport::{ChatTransport, IncomingMessage};

#[cfg(test)]
pub use transport::MockChatTransport;
