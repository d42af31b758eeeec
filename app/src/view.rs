//! Rendered state of the client list and the text forms.
//!
//! The list is never patched in place: every sync clears it and rebuilds one
//! row per record, in the order the server returned them.

use salon_core::{ClientPayload, ClientRecord};
use uuid::Uuid;

/// One rendered table row.
///
/// `id` is the binding the row's edit and delete actions carry; it is
/// re-bound on every render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientRow {
    pub id: Uuid,
    pub client_name: String,
    pub client_email: String,
    pub client_number: String,
}

impl From<&ClientRecord> for ClientRow {
    fn from(record: &ClientRecord) -> Self {
        Self {
            id: record.id,
            client_name: record.client_name.clone(),
            client_email: record.client_email.clone(),
            client_number: record.client_number.clone(),
        }
    }
}

/// The rendered collection view.
#[derive(Debug, Default)]
pub struct ListView {
    rows: Vec<ClientRow>,
}

impl ListView {
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Rebuild the rows from scratch, keeping server order.
    pub fn render(&mut self, records: &[ClientRecord]) {
        self.rows = records.iter().map(ClientRow::from).collect();
    }

    pub fn rows(&self) -> &[ClientRow] {
        &self.rows
    }
}

/// Backing state of the three text inputs shared by the create and edit
/// forms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub client_name: String,
    pub client_email: String,
    pub client_number: String,
}

impl FormFields {
    /// Return the form to its empty state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn to_payload(&self) -> ClientPayload {
        ClientPayload {
            client_name: self.client_name.clone(),
            client_email: self.client_email.clone(),
            client_number: self.client_number.clone(),
        }
    }

    /// Prefill from a fetched record, for the edit form.
    pub fn from_record(record: &ClientRecord) -> Self {
        Self {
            client_name: record.client_name.clone(),
            client_email: record.client_email.clone(),
            client_number: record.client_number.clone(),
        }
    }
}
