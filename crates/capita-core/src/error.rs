use crate::api::envelope::ErrorBody;

/// Failure of a call against the user API, already reduced to the single
/// message a view shows.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The server answered and explained itself.
    #[error("{reason}")]
    Rejected { status: u16, reason: String },
    #[error("An error occurred - Error status {status}")]
    Status { status: u16 },
    /// No usable response reached the client.
    #[error("A client error occurred - {message}")]
    Client { message: String },
}

impl ApiError {
    /// Translates a failed response. A non-empty `reason` in the body wins over
    /// the status code.
    pub fn from_response(status: u16, body: &str) -> Self {
        let reason = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|body| body.reason)
            .filter(|reason| !reason.is_empty());
        match reason {
            Some(reason) => Self::Rejected { status, reason },
            None => Self::Status { status },
        }
    }

    pub fn client(message: impl Into<String>) -> Self {
        Self::Client {
            message: message.into(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } | Self::Status { status } => Some(*status),
            Self::Client { .. } => None,
        }
    }

    pub fn is_client_side(&self) -> bool {
        matches!(self, Self::Client { .. })
    }
}
