//! Inbound message handling: command parsing and routing.

mod command;
mod router;

pub use command::Command;
pub use router::Switchboard;
