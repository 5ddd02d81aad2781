//! # CLI
//!
//! This module defines the command-line interface of `reqresp` using `clap`.
//!
//! It is responsible for parsing user input and performing validation (e.g., ensuring headers are `key:value`);
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "reqresp", version, about = "Request/response messaging client")]
pub struct Cli {
    /// The server URL to connect to (e.g. http://localhost:50051)
    pub url: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Send a request to a peer and print its reply
    ///
    /// ## Examples:
    ///
    /// ```bash
    /// reqresp http://localhost:50051 send 12D3KooW... 'hello' --topic greetings
    /// ```
    Send {
        /// Identifier of the destination peer
        peer_id: String,

        /// Payload sent to the peer
        data: String,

        /// Topic to tag the request with. An empty value is sent as an empty topic,
        /// omit the flag to send no topic at all
        #[arg(long)]
        topic: Option<String>,

        #[arg(short = 'H', long = "header", value_parser = parse_header)]
        headers: Vec<(String, String)>,

        /// Deadline of the call in milliseconds, sent as the gRPC `grpc-timeout`
        /// header and enforced by the server
        #[arg(long)]
        timeout_ms: Option<u64>,
    },
}

fn parse_header(s: &str) -> Result<(String, String), String> {
    s.split_once(':')
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .ok_or_else(|| "Format must be 'key:value'".to_string())
}
