//! Server startup and runtime errors.

use std::num::ParseIntError;

use metrics_exporter_prometheus::BuildError;
use thiserror::Error;

/// Errors that stop the server from starting or keep it from running.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The `PORT` environment variable is not a valid port number.
    #[error("Invalid PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// The listener could not be bound to the configured address.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The serve loop failed with an I/O error.
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),

    /// The Prometheus recorder could not be installed.
    #[error("Failed to install Prometheus recorder: {0}")]
    Metrics(#[from] BuildError),
}

/// Result type for server operations.
pub type Result<T> = std::result::Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_port_message_names_the_value() {
        let source = "http".parse::<u16>().unwrap_err();
        let err = ServerError::InvalidPort {
            value: "http".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("Invalid PORT value \"http\""));
    }

    #[test]
    fn bind_error_keeps_address_and_source() {
        let err = ServerError::Bind {
            addr: "0.0.0.0:5000".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use"),
        };
        assert_eq!(err.to_string(), "Failed to bind 0.0.0.0:5000: address in use");
        assert!(std::error::Error::source(&err).is_some());
    }
}
