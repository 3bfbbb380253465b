use reqwest::StatusCode;

mod client;
pub mod fetcher;
mod response;
pub mod submitter;
#[cfg(test)]
mod test_server;

pub use client::Client;
pub use fetcher::{CollectionFetcher, FetchState};
pub use submitter::{CollectionSubmitter, SubmitState};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("transport failure: {}: {}", message, source)]
    Transport {
        message: String,
        source: reqwest::Error,
    },

    #[error("status failure: {}: {}", status_code, message)]
    Status {
        status_code: StatusCode,
        message: String,
    },

    #[error("shape failure: {}", message)]
    Shape {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    #[error("failed to encode request body: {}: {}", message, source)]
    Encode {
        message: String,
        source: serde_json::Error,
    },

    #[error("request cancelled")]
    Cancelled,
}

/// What a renderer sees of the last failed load: the status code when the
/// server answered, a message otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    Status(u16),
    Message(String),
}

impl From<&ClientError> for LoadError {
    fn from(e: &ClientError) -> Self {
        match e {
            ClientError::Status { status_code, .. } => {
                LoadError::Status(status_code.as_u16())
            }
            e => LoadError::Message(e.to_string()),
        }
    }
}
