//! # ReqResp Core
//!
//! `reqresp-core` is a client for the `script.ReqResp` request/response protocol: a caller
//! addresses a payload to a peer, optionally tagged with a topic, and receives a reply payload.
//! Every call is exactly one request and one response.
//!
//! ## Key Components
//!
//! * **[`ReqRespClient`](client::ReqRespClient):** The async client. It translates a
//!   `(peer_id, data, topic?)` tuple into a protocol-correct `SendRequest`, performs the unary
//!   `Send` call and maps the reply (or the failure status) back to the caller.
//! * **[`BlockingReqRespClient`](client::blocking::BlockingReqRespClient):** A synchronous
//!   wrapper that owns its own runtime, for callers outside of async code.
//! * **[`Topic`](client::Topic):** Either present (possibly empty) or absent. The two states
//!   are kept apart all the way down to the wire.
//!
//! ## Wire format
//!
//! The generated protobuf types live in [`pb`]. They are compiled at build time from
//! `proto/script.proto` and only contain the client side of the service.
//!
//! ## Re-exports
//!
//! This crate re-exports `prost` and `tonic` to ensure that consumers
//! use compatible versions of these underlying dependencies.
pub mod client;

/// Generated protobuf messages and the `script.ReqResp` client stub.
pub mod pb {
    tonic::include_proto!("script");
}

// Re-exports
pub use prost;
pub use tonic;

/// Type alias for the standard boxed error used in generic bounds.
type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;
