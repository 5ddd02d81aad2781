use colored::*;
use reqresp_core::client::{ClientConnectError, InvalidHeaderError, RemoteCallError};

/// A wrapper struct for a formatted, colored string.
///
/// Implements `Display` so it can be printed directly.
pub struct FormattedString(pub String);

impl std::fmt::Display for FormattedString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f)?;
        writeln!(f, "{}", self.0)?;
        Ok(())
    }
}

impl From<RemoteCallError> for FormattedString {
    fn from(err: RemoteCallError) -> Self {
        FormattedString(format!(
            "{} code={:?} message={:?}",
            "Send Failed:".red().bold(),
            err.code(),
            err.message()
        ))
    }
}

impl From<ClientConnectError> for FormattedString {
    fn from(err: ClientConnectError) -> Self {
        FormattedString(format!("{}\n\n'{}'", "Connection Error:".red().bold(), err))
    }
}

impl From<InvalidHeaderError> for FormattedString {
    fn from(err: InvalidHeaderError) -> Self {
        FormattedString(format!("{}\n\n'{}'", "Invalid Header:".red().bold(), err))
    }
}
