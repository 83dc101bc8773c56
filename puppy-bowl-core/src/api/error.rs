/// Errors returned by a [`RosterApi`](super::RosterApi) implementation
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success status without a readable error envelope
    #[error("Request failed with status {status}")]
    Status { status: u16 },

    /// The API answered with an error envelope
    #[error("API error: {message}")]
    Rejected { message: String },

    /// The body was not the JSON we expected
    #[error("Could not decode response: {0}")]
    Decode(String),

    /// A success envelope carried no `data`
    #[error("Response contained no data")]
    MissingData,
}

impl ApiError {
    pub fn network(err: impl ToString) -> Self {
        ApiError::Network(err.to_string())
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        ApiError::Rejected {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
