//! Unix domain socket JSON-RPC provider.

use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::UnixStream;

use chainweb3_core::error::ProviderError;
use chainweb3_core::provider::Provider;
use chainweb3_core::request::{JsonRpcRequest, JsonRpcResponse};
use chainweb3_core::result::RawResult;

/// Default per-call deadline, applied to connect, write and read
/// individually.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for [`IpcProvider`].
#[derive(Debug, Clone)]
pub struct IpcProviderConfig {
    /// Filesystem path of the node's IPC socket.
    pub socket_path: PathBuf,
    /// Deadline for each I/O phase of a call.
    pub timeout: Duration,
}

impl IpcProviderConfig {
    pub fn new(socket_path: impl Into<PathBuf>) -> Self {
        Self {
            socket_path: socket_path.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// IPC JSON-RPC provider.
///
/// A call is one connection: write the request, half-close, read the
/// response to EOF. Concurrent calls each get their own stream, so the
/// provider shares nothing but the path and a closed flag.
pub struct IpcProvider {
    path: PathBuf,
    endpoint: String,
    timeout: Duration,
    closed: AtomicBool,
}

impl IpcProvider {
    /// Build a provider for the socket at `path` with the default
    /// deadline.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self::with_config(IpcProviderConfig::new(path.as_ref()))
    }

    pub fn with_config(config: IpcProviderConfig) -> Self {
        let endpoint = config.socket_path.display().to_string();
        Self {
            path: config.socket_path,
            endpoint,
            timeout: config.timeout,
            closed: AtomicBool::new(false),
        }
    }

    async fn deadline<T>(
        &self,
        fut: impl Future<Output = io::Result<T>>,
    ) -> Result<T, ProviderError> {
        tokio::time::timeout(self.timeout, fut)
            .await
            .map_err(|_| ProviderError::Timeout {
                ms: self.timeout.as_millis() as u64,
            })?
            .map_err(|e| ProviderError::Transport(e.to_string()))
    }
}

#[async_trait]
impl Provider for IpcProvider {
    async fn send_request(
        &self,
        method: &str,
        params: Value,
    ) -> Result<RawResult, ProviderError> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(ProviderError::Closed);
        }

        let request = JsonRpcRequest::new(method, params);
        let body = request.to_body()?;

        tracing::debug!(path = %self.endpoint, method = %request.method, "sending JSON-RPC request");

        let mut stream = self.deadline(UnixStream::connect(&self.path)).await?;
        self.deadline(stream.write_all(body.as_bytes())).await?;
        // Half-close so the server sees EOF, answers and hangs up.
        self.deadline(stream.shutdown()).await?;

        let mut buf = Vec::new();
        self.deadline(stream.read_to_end(&mut buf)).await?;

        let decoded: JsonRpcResponse =
            serde_json::from_slice(&buf).map_err(ProviderError::Deserialization)?;

        Ok(RawResult::from_response(decoded))
    }

    fn close(&self) -> Result<(), ProviderError> {
        self.closed.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

// ─────────────────────────── Tests ───────────────────────────
