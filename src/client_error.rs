use crate::response::{AssociationErrorResponse, ErrorResponse};
use std::fmt;

/// Various errors returned by the client.
///
/// Local failures (`InvalidInput`) never reach the network, transport failures (`Request`) never
/// carry a status code, and remote failures always do.
#[derive(Debug)]
pub enum ClientError {
    /// The request could not be built: blank association object types, an input that would not
    /// serialize, or an unusable configuration.
    InvalidInput(String),

    /// The request was not completed: the connection failed, timed out, or the body could not
    /// be read.
    Request(String),

    /// HubSpot answered with a success status but the body was not the expected shape.
    Decode(String),

    /// Error returned from the contact endpoints.
    Api(ErrorResponse),

    /// The contact being read does not exist.
    NotFound(ErrorResponse),

    /// Error returned from the association endpoint, with one entry per failed item.
    Association(AssociationErrorResponse),
}

impl ClientError {
    /// HTTP status code of a remote error. `None` for local and transport errors.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ClientError::Api(error) | ClientError::NotFound(error) => Some(error.status_code),
            ClientError::Association(error) => Some(error.status_code),
            _ => None,
        }
    }

    /// Category of a remote error. For association errors this is the category of the first item.
    pub fn category(&self) -> Option<&str> {
        match self {
            ClientError::Api(error) | ClientError::NotFound(error) => Some(error.category.as_str()),
            ClientError::Association(error) => {
                error.errors.first().map(|item| item.category.as_str())
            }
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        match self {
            ClientError::NotFound(_) => true,
            _ => false,
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ClientError::InvalidInput(error) => write!(f, "invalid input: {}", error),
            ClientError::Request(error) => write!(f, "unable to execute request: {}", error),
            ClientError::Decode(error) => write!(f, "could not decode HubSpot response: {}", error),
            ClientError::Api(error) => write!(f, "{}", error),
            ClientError::NotFound(error) => write!(f, "{}", error),
            ClientError::Association(error) => write!(f, "{}", error),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<serde_urlencoded::ser::Error> for ClientError {
    fn from(err: serde_urlencoded::ser::Error) -> Self {
        ClientError::InvalidInput(err.to_string())
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> ClientError {
        ClientError::Request(err.to_string())
    }
}
