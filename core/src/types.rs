//! Domain DTOs for the salon clients API.
//!
//! # Design
//! These types mirror the server's schema but are defined independently of
//! the mock-server crate; integration tests catch schema drift between the
//! two. `ClientPayload` serves both create and update because PUT performs a
//! whole-resource replacement, never a partial patch.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single client record returned by the API.
///
/// The `id` is server-assigned and stable for the record's lifetime; it is
/// the only handle the app holds between syncs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientRecord {
    pub id: Uuid,
    pub client_name: String,
    pub client_email: String,
    pub client_number: String,
}

/// Request payload for creating or fully replacing a client.
///
/// All three fields are always sent; the server treats a PUT carrying this
/// payload as a full replacement of the addressed record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientPayload {
    pub client_name: String,
    pub client_email: String,
    pub client_number: String,
}

/// Body of a collection GET.
///
/// The server answers either with a bare array or, when paginating, with an
/// envelope exposing the records under `results`. Both shapes must parse.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListResponse {
    Envelope { results: Vec<ClientRecord> },
    Plain(Vec<ClientRecord>),
}

impl ListResponse {
    pub fn into_records(self) -> Vec<ClientRecord> {
        match self {
            ListResponse::Envelope { results } => results,
            ListResponse::Plain(records) => records,
        }
    }
}
