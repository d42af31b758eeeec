//! Error types for the salon clients API.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the record does not exist" from "the server returned an unexpected
//! status." Validation failures carry the server's field → detail mapping as
//! `FieldErrors`, whose `Display` produces the multi-line message shown to
//! the user. All other non-2xx responses land in `HttpError` with the raw
//! status code and body for debugging.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

/// One or more error details for a single field.
///
/// Django-style APIs send a list per field; tolerate a bare string too.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum FieldDetail {
    Many(Vec<String>),
    One(String),
}

/// Server-side validation errors, keyed by field name.
///
/// A `BTreeMap` keeps the rendered message order stable regardless of the
/// JSON key order the server happened to use.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct FieldErrors(pub BTreeMap<String, FieldDetail>);

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, detail) in &self.0 {
            if !first {
                writeln!(f)?;
            }
            first = false;
            match detail {
                FieldDetail::Many(messages) => write!(f, "{field}: {}", messages.join(", "))?,
                FieldDetail::One(message) => write!(f, "{field}: {message}")?,
            }
        }
        Ok(())
    }
}

/// Errors returned by `ClientsApi` parse methods.
#[derive(Debug)]
pub enum ApiError {
    /// The server returned 404 — the requested client does not exist.
    NotFound,

    /// The server rejected a create or update with a field-error body.
    Validation(FieldErrors),

    /// The server returned a non-2xx status with no structured error body.
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    SerializationError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound => write!(f, "resource not found"),
            ApiError::Validation(errors) => write!(f, "{errors}"),
            ApiError::HttpError { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::SerializationError(msg) => {
                write!(f, "serialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
