//! Framed connection to the bridge process.

use super::{InboundFrame, Outbound, OutboundFrame};
use crate::error::TransportError;
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_util::codec::{Framed, LinesCodec};
use tracing::{debug, warn};

/// A live, authenticated bridge connection.
pub struct Bridge {
    framed: Framed<TcpStream, LinesCodec>,
}

impl Bridge {
    /// Connect and authenticate. The first frame from the bridge must be
    /// `ready`; anything else fails the handshake.
    pub async fn connect(addr: &str, mnemonic: &str) -> Result<Self, TransportError> {
        let stream = TcpStream::connect(addr).await?;
        let mut framed = Framed::new(stream, LinesCodec::new());

        let auth = serde_json::to_string(&OutboundFrame::Auth {
            mnemonic: mnemonic.to_string(),
        })?;
        framed.send(auth).await?;

        let line = framed.next().await.ok_or(TransportError::Closed)??;
        match serde_json::from_str::<InboundFrame>(&line)? {
            InboundFrame::Ready => Ok(Self { framed }),
            InboundFrame::Message { .. } => {
                Err(TransportError::Handshake("message".to_string()))
            }
        }
    }

    /// Next inbound message, or `None` when the bridge closes cleanly.
    ///
    /// Undecodable lines and stray `ready` frames are skipped; corruption
    /// from the sidecar must not tear down matchmaking state.
    pub async fn next_message(
        &mut self,
    ) -> Result<Option<(String, Option<String>)>, TransportError> {
        while let Some(line) = self.framed.next().await {
            let line = line?;
            match serde_json::from_str::<InboundFrame>(&line) {
                Ok(InboundFrame::Message { from, text }) => return Ok(Some((from, text))),
                Ok(InboundFrame::Ready) => debug!("Ignoring stray ready frame"),
                Err(e) => warn!(error = %e, "Skipping undecodable bridge frame"),
            }
        }
        Ok(None)
    }

    /// Send one outbound message.
    pub async fn send(&mut self, out: &Outbound) -> Result<(), TransportError> {
        let frame = serde_json::to_string(&OutboundFrame::Send {
            to: out.to.clone(),
            text: out.text.clone(),
        })?;
        self.framed.send(frame).await?;
        Ok(())
    }
}
