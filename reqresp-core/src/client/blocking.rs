//! # Blocking Client
//!
//! A synchronous facade over [`ReqRespClient`] for callers that do not run inside an
//! async runtime. Each call blocks the calling thread until the reply or the failure arrives.
//!
//! ```rust,no_run
//! use reqresp_core::client::blocking::BlockingReqRespClient;
//!
//! # fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = BlockingReqRespClient::connect("http://localhost:50051")?;
//! let reply = client.send("peer-a", "ping", None)?;
//! # Ok(())
//! # }
//! ```
use super::{CallOptions, ClientConnectError, RemoteCallError, ReqRespClient, SendRequest};
use tokio::runtime::{Builder, Runtime};
use tonic::transport::Channel;

/// Errors that can occur when building a [`BlockingReqRespClient`].
#[derive(Debug, thiserror::Error)]
pub enum BlockingConnectError {
    #[error("Failed to start the client runtime: {0}")]
    RuntimeInit(#[source] std::io::Error),
    #[error(transparent)]
    Connect(#[from] ClientConnectError),
}

/// Blocking client for the `script.ReqResp` service.
///
/// Owns the runtime driving its connection. It can be shared between threads, calls made
/// concurrently from several threads proceed independently.
///
/// Must not be used from within an async context, blocking there panics.
#[derive(Debug)]
pub struct BlockingReqRespClient {
    client: ReqRespClient<Channel>,
    rt: Runtime,
}

impl BlockingReqRespClient {
    /// Starts a runtime and connects to the server at `addr`.
    pub fn connect(addr: &str) -> Result<Self, BlockingConnectError> {
        let rt = Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .map_err(BlockingConnectError::RuntimeInit)?;

        let client = rt.block_on(ReqRespClient::connect(addr))?;

        Ok(Self { client, rt })
    }

    /// Blocking version of [`ReqRespClient::send`].
    pub fn send(
        &self,
        peer_id: &str,
        data: &str,
        topic: Option<&str>,
    ) -> Result<String, RemoteCallError> {
        self.rt.block_on(self.client.send(peer_id, data, topic))
    }

    /// Blocking version of [`ReqRespClient::send_request`].
    pub fn send_request(
        &self,
        request: SendRequest,
        options: CallOptions,
    ) -> Result<String, RemoteCallError> {
        self.rt.block_on(self.client.send_request(request, options))
    }
}
