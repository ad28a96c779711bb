//! Error kind enumeration for categorizing SDK errors.

/// Categorization of SDK errors.
///
/// | ErrorKind         | Typical source                                  |
/// |-------------------|-------------------------------------------------|
/// | `Unauthorized`    | 401, missing or expired access token            |
/// | `Forbidden`       | 403                                             |
/// | `NotFound`        | 404, unknown product/cart/user id               |
/// | `InvalidArgument` | 400, failed form validation, unsupported filter |
/// | `Conflict`        | 409                                             |
/// | `RateLimited`     | 429                                             |
/// | `Unavailable`     | 503                                             |
/// | `Timeout`         | 504 or client-side request timeout              |
/// | `Internal`        | other 5xx                                       |
/// | `Connection`      | DNS, TLS, refused/reset connections             |
/// | `InvalidResponse` | body could not be decoded                       |
/// | `Configuration`   | bad base URL, missing REST feature              |
/// | `Storage`         | token store could not be read or written        |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Authentication failed (invalid credentials or expired token).
    ///
    /// HTTP: 401 Unauthorized
    #[error("unauthorized")]
    Unauthorized,

    /// Valid credentials but the action is not permitted.
    ///
    /// HTTP: 403 Forbidden
    #[error("forbidden")]
    Forbidden,

    /// Requested resource was not found.
    ///
    /// HTTP: 404 Not Found
    #[error("not found")]
    NotFound,

    /// Invalid request argument or payload.
    ///
    /// HTTP: 400 Bad Request. Also used for client-side form validation
    /// failures and for filters an entity does not support.
    #[error("invalid argument")]
    InvalidArgument,

    /// Conflict with existing resource state.
    ///
    /// HTTP: 409 Conflict
    #[error("conflict")]
    Conflict,

    /// Rate limit exceeded.
    ///
    /// HTTP: 429 Too Many Requests
    #[error("rate limited")]
    RateLimited,

    /// Service temporarily unavailable.
    ///
    /// HTTP: 503 Service Unavailable
    #[error("service unavailable")]
    Unavailable,

    /// Request timed out.
    ///
    /// HTTP: 504 Gateway Timeout or client-side timeout
    #[error("timeout")]
    Timeout,

    /// Internal server error.
    ///
    /// HTTP: 500 and unmapped 5xx
    #[error("internal error")]
    Internal,

    /// Connection error (DNS, TLS handshake, network unreachable).
    #[error("connection error")]
    Connection,

    /// Response could not be parsed or was malformed.
    #[error("invalid response")]
    InvalidResponse,

    /// Configuration error (invalid URL, missing feature).
    #[error("configuration error")]
    Configuration,

    /// Token store read or write failure.
    #[error("storage error")]
    Storage,

    /// Unknown or unexpected error.
    #[error("unknown error")]
    Unknown,
}

impl ErrorKind {
    /// Creates an `ErrorKind` from an HTTP status code.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            400 => ErrorKind::InvalidArgument,
            401 => ErrorKind::Unauthorized,
            403 => ErrorKind::Forbidden,
            404 => ErrorKind::NotFound,
            409 => ErrorKind::Conflict,
            429 => ErrorKind::RateLimited,
            500 => ErrorKind::Internal,
            502 => ErrorKind::InvalidResponse,
            503 => ErrorKind::Unavailable,
            504 => ErrorKind::Timeout,
            _ if (400..500).contains(&status) => ErrorKind::InvalidArgument,
            _ if status >= 500 => ErrorKind::Internal,
            _ => ErrorKind::Unknown,
        }
    }

    /// Returns `true` for failures of the network path rather than the request.
    #[inline]
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ErrorKind::Connection | ErrorKind::Timeout | ErrorKind::Unavailable
        )
    }

    /// Returns `true` if the session's credentials were rejected.
    #[inline]
    pub fn is_auth(&self) -> bool {
        matches!(self, ErrorKind::Unauthorized | ErrorKind::Forbidden)
    }
}
