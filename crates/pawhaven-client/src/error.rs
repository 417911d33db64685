use serde::Deserialize;

/// Error body shape shared by every non-2xx API response.
#[derive(Debug, Deserialize)]
pub struct WireError {
    pub kind: String,
    pub message: String,
}

/// Client-side error taxonomy.
///
/// API failures are mapped from the wire `kind`; transport failures are kept
/// separate so callers can distinguish "the server said no" from "the server
/// was unreachable" and render a retryable error instead of fake data.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("{0}")]
    Validation(String),
    #[error("unauthenticated")]
    Unauthenticated,
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("email already registered")]
    DuplicateEmail,
    #[error("{0}")]
    NotFound(String),
    #[error("server error: {0}")]
    Server(String),
    #[error("unexpected response ({kind}): {message}")]
    Unexpected { kind: String, message: String },
    #[error("network failure")]
    Network(#[from] reqwest::Error),
}

impl ClientError {
    pub fn from_wire(wire: WireError) -> Self {
        match wire.kind.as_str() {
            "VALIDATION" => Self::Validation(wire.message),
            "UNAUTHENTICATED" => Self::Unauthenticated,
            "INVALID_CREDENTIALS" => Self::InvalidCredentials,
            "DUPLICATE_EMAIL" => Self::DuplicateEmail,
            "PET_NOT_FOUND" | "UNKNOWN_OWNER" => Self::NotFound(wire.message),
            "INTERNAL" => Self::Server(wire.message),
            _ => Self::Unexpected {
                kind: wire.kind,
                message: wire.message,
            },
        }
    }
}
