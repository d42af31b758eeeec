//! Stateless HTTP request builder and response parser for the clients API.
//!
//! # Design
//! `ClientsApi` holds only a `base_url` and carries no mutable state between
//! calls. Each CRUD operation is split into a `build_*` method that produces
//! an `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The caller executes the actual HTTP round-trip, keeping the core
//! deterministic and free of I/O dependencies.
//!
//! The resource follows Django URL conventions: every path ends with a
//! trailing slash (`/clients/`, `/clients/{id}/`).

use uuid::Uuid;

use crate::error::{ApiError, FieldErrors};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{ClientPayload, ClientRecord, ListResponse};

/// Synchronous, stateless client for the salon clients API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct ClientsApi {
    base_url: String,
}

impl ClientsApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_clients(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/clients/", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_client(&self, id: Uuid) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/clients/{id}/", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_client(&self, input: &ClientPayload) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/clients/", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_update_client(&self, id: Uuid, input: &ClientPayload) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/clients/{id}/", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete_client(&self, id: Uuid) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/clients/{id}/", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Accepts both a bare array and a pagination envelope with `results`.
    pub fn parse_list_clients(&self, response: HttpResponse) -> Result<Vec<ClientRecord>, ApiError> {
        check_status(&response, 200)?;
        let body: ListResponse = serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))?;
        Ok(body.into_records())
    }

    pub fn parse_get_client(&self, response: HttpResponse) -> Result<ClientRecord, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    /// Creation is confirmed only by a 201; any other status is a failure.
    pub fn parse_create_client(&self, response: HttpResponse) -> Result<ClientRecord, ApiError> {
        check_write_status(&response, |status| status == 201)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    /// Any 2xx confirms the replacement.
    pub fn parse_update_client(&self, response: HttpResponse) -> Result<ClientRecord, ApiError> {
        check_write_status(&response, |status| (200..300).contains(&status))?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_delete_client(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)?;
        Ok(())
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

/// Like `check_status`, but for create/update: a rejected write is expected
/// to carry a field → detail(s) JSON body, surfaced as `Validation`.
fn check_write_status(response: &HttpResponse, ok: impl Fn(u16) -> bool) -> Result<(), ApiError> {
    if ok(response.status) {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    if let Ok(errors) = serde_json::from_str::<FieldErrors>(&response.body) {
        return Err(ApiError::Validation(errors));
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
