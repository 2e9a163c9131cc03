//! Bridge transport: the seam to the external messenger.
//!
//! The end-to-end encrypted messenger session lives in a sidecar bridge
//! process. This daemon connects to it over TCP and exchanges
//! newline-delimited JSON frames: one `auth` frame up front, then `message`
//! frames in and `send` frames out. Delivery guarantees past the bridge
//! belong to the messenger.

mod bridge;

pub use bridge::Bridge;

use crate::config::TransportConfig;
use crate::error::TransportError;
use crate::handlers::Switchboard;
use crate::state::SessionId;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

/// One outbound send: recipient identity plus message body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outbound {
    pub to: SessionId,
    pub text: String,
}

impl Outbound {
    pub fn new(to: &str, text: &str) -> Self {
        Self {
            to: to.to_string(),
            text: text.to_string(),
        }
    }
}

/// Frames sent by the daemon to the bridge.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutboundFrame {
    Auth { mnemonic: String },
    Send { to: String, text: String },
}

/// Frames received from the bridge.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InboundFrame {
    Ready,
    Message {
        from: String,
        #[serde(default)]
        text: Option<String>,
    },
}

/// Connect to the bridge and pump messages until the connection drops.
///
/// Each inbound message is routed as one unit of work, and its resulting
/// sends go out sequentially before the next message is read, so sends
/// never reorder relative to the state transition that produced them.
pub async fn run(
    board: Arc<Switchboard>,
    config: &TransportConfig,
    mnemonic: &str,
) -> Result<(), TransportError> {
    let mut bridge = Bridge::connect(&config.bridge_addr, mnemonic).await?;
    info!(addr = %config.bridge_addr, "Bridge connected");

    while let Some((from, text)) = bridge.next_message().await? {
        for send in board.handle_message(&from, text.as_deref()) {
            if let Err(e) = bridge.send(&send).await {
                warn!(to = %send.to, error = %e, "Outbound send failed");
                return Err(e);
            }
        }
    }
    Ok(())
}
