//! Error response objects returned from HubSpot.

use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;

/// Status string HubSpot puts on every error body. Errors synthesized by this crate use it too.
pub const ERROR_STATUS: &str = "error";

/// This is the error body HubSpot sends back from most API requests. `category` will be an
/// identifier for the type of error (`CONFLICT`, `VALIDATION_ERROR`, ...), while the `message`
/// field *might* have more information.
///
/// `status_code` is not part of the body; it is copied from the HTTP response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ErrorResponse {
    pub category: String,

    pub correlation_id: String,

    pub links: Option<HashMap<String, String>>,

    pub message: String,

    pub status: String,

    /// Only sent on per-item association errors, e.g. `crm.associations.FROM_OBJECT_NOT_FOUND`.
    pub sub_category: Option<String>,

    /// Only sent on per-item association errors, e.g. `{"objectType": ["contact"]}`.
    pub context: Option<HashMap<String, Vec<String>>>,

    #[serde(skip)]
    pub status_code: u16,
}

impl ErrorResponse {
    /// Build an error that did not come from a HubSpot body.
    pub(crate) fn synthetic(status_code: u16, category: &str, message: String) -> ErrorResponse {
        ErrorResponse {
            category: category.to_string(),
            message,
            status: ERROR_STATUS.to_string(),
            status_code,
            ..ErrorResponse::default()
        }
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.category.is_empty() {
            write!(f, "[{}] {}", self.status_code, self.message)
        } else {
            write!(f, "[{} {}] {}", self.status_code, self.category, self.message)
        }
    }
}

/// Error body returned when associating two objects.
///
/// HubSpot reports one error for each problem with the association, so an association where
/// both ids are wrong comes back with two entries in `errors`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssociationErrorResponse {
    pub status: String,

    pub message: String,

    pub num_errors: usize,

    pub errors: Vec<ErrorResponse>,

    #[serde(skip)]
    pub status_code: u16,
}

impl AssociationErrorResponse {
    pub(crate) fn synthetic(status_code: u16, message: String) -> AssociationErrorResponse {
        AssociationErrorResponse {
            status: ERROR_STATUS.to_string(),
            message,
            status_code,
            ..AssociationErrorResponse::default()
        }
    }
}

impl fmt::Display for AssociationErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let messages = self
            .errors
            .iter()
            .map(|error| error.message.as_str())
            .collect::<Vec<_>>();

        if messages.is_empty() {
            write!(f, "[{}] {}", self.status_code, self.message)
        } else {
            write!(f, "[{}] {} error(s): {}", self.status_code, self.errors.len(), messages.join("; "))
        }
    }
}
