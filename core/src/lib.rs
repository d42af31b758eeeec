//! Synchronous API client core for the salon clients resource.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, making the core fully deterministic and testable.
//!
//! # Design
//! - `ClientsApi` is stateless — it holds only `base_url`.
//! - Each CRUD operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - A collection GET may answer with a bare array or a pagination envelope;
//!   `parse_list_clients` accepts both.
//! - Rejected writes carry a field → detail(s) JSON body, surfaced as
//!   `ApiError::Validation` so the caller can render per-field messages.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::ClientsApi;
pub use error::{ApiError, FieldDetail, FieldErrors};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{ClientPayload, ClientRecord, ListResponse};
