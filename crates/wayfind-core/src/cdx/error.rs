//! Lookup failure type and its coarse classification for diagnostics.

/// Why a CDX lookup produced no usable response.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Curl reported an error (DNS, connect, reset, body read, etc.).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// Server answered with something other than 200.
    #[error("HTTP {0}")]
    Http(u32),
}

/// Coarse failure classification, logged alongside the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Operation timed out (connect).
    Timeout,
    /// Network-level failure (connection refused, DNS, reset, short read).
    Connection,
    /// Non-200 response.
    Status(u32),
    Other,
}

impl FetchError {
    pub fn kind(&self) -> FailureKind {
        match self {
            FetchError::Http(code) => FailureKind::Status(*code),
            FetchError::Curl(e) => {
                if e.is_operation_timedout() {
                    return FailureKind::Timeout;
                }
                if e.is_couldnt_connect()
                    || e.is_couldnt_resolve_host()
                    || e.is_couldnt_resolve_proxy()
                    || e.is_read_error()
                    || e.is_recv_error()
                    || e.is_send_error()
                    || e.is_got_nothing()
                {
                    return FailureKind::Connection;
                }
                FailureKind::Other
            }
        }
    }
}
