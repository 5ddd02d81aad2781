use std::{str::FromStr, time::Duration};
use tonic::metadata::{
    AsciiMetadataKey, AsciiMetadataValue, MetadataMap,
    errors::{InvalidMetadataKey, InvalidMetadataValue},
};

#[derive(thiserror::Error, Debug)]
pub enum InvalidHeaderError {
    #[error("Invalid metadata (header) key '{key}': '{source}'")]
    InvalidMetadataKey {
        key: String,
        source: InvalidMetadataKey,
    },
    #[error("Invalid metadata (header) value for key '{key}': '{source}'")]
    InvalidMetadataValue {
        key: String,
        source: InvalidMetadataValue,
    },
}

/// Per-call context of a request.
///
/// The client never imposes a deadline on its own, one is only sent when set here.
#[derive(Debug, Clone, Default)]
pub struct CallOptions {
    timeout: Option<Duration>,
    metadata: MetadataMap,
}

impl CallOptions {
    /// Sets the gRPC deadline of the call.
    ///
    /// The deadline travels as the `grpc-timeout` header and is enforced by the server.
    /// A server that ignores the header leaves the call waiting for as long as it takes.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Attaches a custom gRPC metadata (header) entry to the call.
    ///
    /// Both the key and the value must be valid ASCII metadata.
    pub fn with_header(mut self, key: &str, value: &str) -> Result<Self, InvalidHeaderError> {
        let meta_key = AsciiMetadataKey::from_str(key).map_err(|source| {
            InvalidHeaderError::InvalidMetadataKey {
                key: key.to_string(),
                source,
            }
        })?;
        let meta_value = AsciiMetadataValue::from_str(value).map_err(|source| {
            InvalidHeaderError::InvalidMetadataValue {
                key: key.to_string(),
                source,
            }
        })?;

        self.metadata.insert(meta_key, meta_value);
        Ok(self)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn metadata(&self) -> &MetadataMap {
        &self.metadata
    }

    pub(crate) fn into_request<T>(self, message: T) -> tonic::Request<T> {
        let mut request = tonic::Request::new(message);
        *request.metadata_mut() = self.metadata;

        if let Some(timeout) = self.timeout {
            request.set_timeout(timeout);
        }

        request
    }
}
