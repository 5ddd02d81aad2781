//! # ReqResp Client
//!
//! This module implements the client side of the `script.ReqResp` service.
//!
//! [`ReqRespClient`] is a thin translation layer: it turns a plain
//! `(peer_id, data, topic?)` call into the nested wire messages
//! (`Peer`, `Payload`, `Message`, `SendRequest`), performs a single unary call and
//! hands back either the reply payload or a [`RemoteCallError`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use reqresp_core::client::ReqRespClient;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ReqRespClient::connect("http://localhost:50051").await?;
//!
//! let reply = client.send("peer-a", "ping", Some("health")).await?;
//! println!("{reply}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! - **[`ClientConnectError`]**: Building the client failed (invalid URI, connection refused).
//! - **[`RemoteCallError`]**: The call was issued but did not succeed. This is the only
//!   failure a `send` can produce, and it always carries the transport's status message.
pub mod blocking;
mod options;
mod types;

pub use options::*;
pub use types::*;

use crate::{BoxError, pb};
use http_body::Body as HttpBody;
use tonic::{
    Code,
    client::GrpcService,
    transport::{Channel, Endpoint},
};

/// Errors that can occur when connecting to a server.
#[derive(Debug, thiserror::Error)]
pub enum ClientConnectError {
    #[error("Invalid URL '{0}': {1}")]
    InvalidUrl(String, #[source] tonic::transport::Error),
    #[error("Failed to connect to '{0}': {1}")]
    ConnectionFailed(String, #[source] tonic::transport::Error),
}

/// The remote call did not succeed.
///
/// Covers network failures, server-side rejections and malformed responses alike.
/// The `Display` implementation is the status message, verbatim.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{}", .status.message())]
pub struct RemoteCallError {
    status: tonic::Status,
}

impl RemoteCallError {
    /// The message reported by the transport or the server.
    pub fn message(&self) -> &str {
        self.status.message()
    }

    /// The gRPC status code of the failure.
    pub fn code(&self) -> Code {
        self.status.code()
    }

    /// The full status returned by the transport.
    pub fn status(&self) -> &tonic::Status {
        &self.status
    }

    /// Consumes the error, returning the underlying status.
    pub fn into_status(self) -> tonic::Status {
        self.status
    }
}

impl From<tonic::Status> for RemoteCallError {
    fn from(status: tonic::Status) -> Self {
        Self { status }
    }
}

/// Client for the `script.ReqResp` service.
///
/// Cloning is cheap when `S` is a [`Channel`], and every call works on its own clone of the
/// stub, so a single instance can be shared between tasks without any locking.
#[derive(Debug, Clone)]
pub struct ReqRespClient<S = Channel> {
    stub: pb::req_resp_client::ReqRespClient<S>,
}

impl ReqRespClient<Channel> {
    /// Connects to a server and returns a ready client.
    ///
    /// # Arguments
    ///
    /// * `addr` - The server URI (e.g., `http://localhost:50051`).
    ///
    /// # Returns
    ///
    /// * `Ok(ReqRespClient)` - The connected client.
    /// * `Err(ClientConnectError)` - If the URL is invalid or connection fails.
    pub async fn connect(addr: &str) -> Result<Self, ClientConnectError> {
        let channel = endpoint(addr)?
            .connect()
            .await
            .map_err(|e| ClientConnectError::ConnectionFailed(addr.to_string(), e))?;

        Ok(Self::new(channel))
    }

    /// Builds a client whose connection is only established on the first call.
    ///
    /// Must be called from within a tokio runtime.
    pub fn connect_lazy(addr: &str) -> Result<Self, ClientConnectError> {
        Ok(Self::new(endpoint(addr)?.connect_lazy()))
    }
}

impl<S> ReqRespClient<S>
where
    S: GrpcService<tonic::body::Body> + Clone,
    S::Error: Into<BoxError>,
    S::ResponseBody: HttpBody<Data = tonic::codegen::Bytes> + Send + 'static,
    <S::ResponseBody as HttpBody>::Error: Into<BoxError> + Send,
{
    /// Binds the client to an existing transport service or channel.
    ///
    /// Performs no I/O.
    pub fn new(service: S) -> Self {
        let stub = pb::req_resp_client::ReqRespClient::new(service);
        Self { stub }
    }

    /// Sends `data` to `peer_id`, optionally tagged with `topic`, and waits for the reply.
    ///
    /// Empty strings are accepted as-is, validation is left to the server.
    /// `topic: None` and `topic: Some("")` are different requests on the wire.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The reply payload, which may be empty.
    /// * `Err(RemoteCallError)` - The call failed; the error carries the status message.
    pub async fn send(
        &self,
        peer_id: &str,
        data: &str,
        topic: Option<&str>,
    ) -> Result<String, RemoteCallError> {
        let request = SendRequest::new(peer_id, data).with_topic(topic);
        self.send_request(request, CallOptions::default()).await
    }

    /// Performs the round trip for an already built request, using `options` as the
    /// per-call context.
    pub async fn send_request(
        &self,
        request: SendRequest,
        options: CallOptions,
    ) -> Result<String, RemoteCallError> {
        tracing::debug!(
            peer_id = %request.peer_id,
            topic = ?request.topic.as_deref(),
            "sending request"
        );

        let request = options.into_request(pb::SendRequest::from(request));
        let mut stub = self.stub.clone();

        let response = match stub.send(request).await {
            Ok(response) => response.into_inner(),
            Err(status) => {
                tracing::debug!(
                    code = ?status.code(),
                    status_message = status.message(),
                    "send failed"
                );
                return Err(status.into());
            }
        };

        response
            .data
            .map(|payload| payload.data)
            .ok_or_else(|| {
                tracing::debug!("response carried no payload");
                RemoteCallError::from(tonic::Status::internal(
                    "Malformed response: missing payload",
                ))
            })
    }
}

fn endpoint(addr: &str) -> Result<Endpoint, ClientConnectError> {
    Endpoint::new(addr.to_string())
        .map_err(|e| ClientConnectError::InvalidUrl(addr.to_string(), e))
}
