//! Integration test infrastructure.
//!
//! Provides a mock messenger bridge (the daemon's only external
//! collaborator) and a helper for spawning the daemon under test with a
//! generated config.

use futures_util::{SinkExt, StreamExt};
use serde::{Deserialize, Serialize};
use std::process::{Child, Command};
use std::time::Duration;
use tokio::net::{TcpListener, TcpStream};
use tokio_util::codec::{Framed, LinesCodec};

/// Bridge wire frames, both directions.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Frame {
    Auth {
        mnemonic: String,
    },
    Ready,
    Message {
        from: String,
        #[serde(default)]
        text: Option<String>,
    },
    Send {
        to: String,
        text: String,
    },
}

/// A listening mock bridge.
pub struct MockBridge {
    listener: TcpListener,
    pub addr: String,
}

impl MockBridge {
    pub async fn bind() -> anyhow::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?.to_string();
        Ok(Self { listener, addr })
    }

    /// Accept the daemon, verify its auth frame, and reply `ready`.
    pub async fn accept(&self, expected_mnemonic: &str) -> anyhow::Result<BridgeConn> {
        let (stream, _) = tokio::time::timeout(Duration::from_secs(10), self.listener.accept())
            .await
            .expect("timed out waiting for the daemon to connect")?;
        let mut framed = Framed::new(stream, LinesCodec::new());

        let line = framed
            .next()
            .await
            .expect("daemon closed before authenticating")?;
        match serde_json::from_str::<Frame>(&line)? {
            Frame::Auth { mnemonic } => assert_eq!(mnemonic, expected_mnemonic),
            other => panic!("expected auth frame, got {other:?}"),
        }

        framed.send(serde_json::to_string(&Frame::Ready)?).await?;
        Ok(BridgeConn { framed })
    }

    /// Accept the daemon but answer its auth with a protocol violation
    /// instead of `ready`, then close the connection.
    pub async fn accept_and_violate(&self) -> anyhow::Result<()> {
        let (stream, _) = tokio::time::timeout(Duration::from_secs(10), self.listener.accept())
            .await
            .expect("timed out waiting for the daemon to connect")?;
        let mut framed = Framed::new(stream, LinesCodec::new());

        framed
            .next()
            .await
            .expect("daemon closed before authenticating")?;
        let frame = Frame::Message {
            from: "nobody".to_string(),
            text: Some("out of order".to_string()),
        };
        framed.send(serde_json::to_string(&frame)?).await?;
        Ok(())
    }
}

/// An accepted, authenticated daemon connection.
pub struct BridgeConn {
    framed: Framed<TcpStream, LinesCodec>,
}

impl BridgeConn {
    /// Deliver an inbound message to the daemon.
    pub async fn deliver(&mut self, from: &str, text: &str) -> anyhow::Result<()> {
        let frame = Frame::Message {
            from: from.to_string(),
            text: Some(text.to_string()),
        };
        self.framed.send(serde_json::to_string(&frame)?).await?;
        Ok(())
    }

    /// Next `send` frame from the daemon, with a timeout so a missing reply
    /// fails the test instead of hanging it.
    pub async fn expect_send(&mut self) -> anyhow::Result<(String, String)> {
        let line = tokio::time::timeout(Duration::from_secs(5), self.framed.next())
            .await
            .expect("timed out waiting for a send frame")
            .expect("daemon closed the connection")?;
        match serde_json::from_str::<Frame>(&line)? {
            Frame::Send { to, text } => Ok((to, text)),
            other => panic!("expected send frame, got {other:?}"),
        }
    }
}

/// A daemon process under test.
pub struct TestDaemon {
    child: Child,
    _dir: tempfile::TempDir,
}

impl TestDaemon {
    /// Spawn the daemon with a generated config pointing at `bridge_addr`.
    pub fn spawn(bridge_addr: &str, mnemonic: &str) -> anyhow::Result<Self> {
        let dir = tempfile::tempdir()?;
        let config_path = dir.path().join("config.toml");
        std::fs::write(
            &config_path,
            format!(
                "[transport]\nbridge_addr = \"{bridge_addr}\"\nmnemonic = \"{mnemonic}\"\nreconnect_secs = 1\n"
            ),
        )?;

        let child = Command::new(env!("CARGO_BIN_EXE_anonchatd"))
            .arg(&config_path)
            .spawn()?;
        Ok(Self { child, _dir: dir })
    }
}

impl Drop for TestDaemon {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}
