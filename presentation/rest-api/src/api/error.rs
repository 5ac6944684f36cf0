use std::collections::BTreeMap;

use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// Error kind, e.g. "Conflict" or "ValidationError"
    pub name: String,
    /// Code-style message for i18n lookup
    pub message: String,
    /// Human readable detail
    #[oai(skip_serializing_if_is_none)]
    pub detail: Option<String>,
    /// Field name to violated rule, for validation failures
    #[oai(skip_serializing_if_is_none)]
    pub errors: Option<BTreeMap<String, String>>,
}

impl ErrorResponse {
    pub fn new(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            message: message.to_string(),
            detail: None,
            errors: None,
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
