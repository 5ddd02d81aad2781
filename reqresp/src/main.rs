//! # ReqResp CLI Entry Point
//!
//! The main executable for the `reqresp` tool. This file drives the application lifecycle:
//!
//! 1. **Initialization**: Parses command-line arguments using [`cli::Cli`] and sets up logging.
//! 2. **Connection**: Establishes a connection to the target server via `reqresp_core`.
//! 3. **Execution**: Sends a single request through the `ReqRespClient`.
//! 4. **Presentation**: Prints the reply payload to standard output, or the error to standard error.

mod cli;
mod formatter;

use clap::Parser;
use cli::{Cli, Commands};
use formatter::FormattedString;
use reqresp_core::client::{CallOptions, InvalidHeaderError, ReqRespClient, SendRequest};
use std::{process, time::Duration};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args = Cli::parse();

    // stdout only carries the reply, logs go to stderr
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Commands::Send {
            peer_id,
            data,
            topic,
            headers,
            timeout_ms,
        } => {
            let request = SendRequest::new(peer_id, data).with_topic(topic);
            run_send(&args.url, request, headers, timeout_ms).await;
        }
    }
}

async fn run_send(
    url: &str,
    request: SendRequest,
    headers: Vec<(String, String)>,
    timeout_ms: Option<u64>,
) {
    let options = match call_options(headers, timeout_ms) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("{}", FormattedString::from(err));
            process::exit(1);
        }
    };

    tracing::debug!(url, "connecting");

    let client = match ReqRespClient::connect(url).await {
        Ok(client) => client,
        Err(err) => {
            eprintln!("{}", FormattedString::from(err));
            process::exit(1);
        }
    };

    match client.send_request(request, options).await {
        Ok(reply) => println!("{reply}"),
        Err(err) => {
            eprintln!("{}", FormattedString::from(err));
            process::exit(1);
        }
    }
}

fn call_options(
    headers: Vec<(String, String)>,
    timeout_ms: Option<u64>,
) -> Result<CallOptions, InvalidHeaderError> {
    let mut options = CallOptions::default();

    if let Some(ms) = timeout_ms {
        options = options.with_timeout(Duration::from_millis(ms));
    }

    for (key, value) in headers {
        options = options.with_header(&key, &value)?;
    }

    Ok(options)
}
