//! # ReqResp Service
//!
//! **INTERNAL USE ONLY**: This crate exists solely to provide the server side of the
//! `script.ReqResp` service for integration testing `reqresp_core`.
//! It is not intended for production use.

pub mod pb {
    tonic::include_proto!("script");
}

pub use pb::req_resp_server::{ReqResp, ReqRespServer};
