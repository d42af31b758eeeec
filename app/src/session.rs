//! Edit session state machine.
//!
//! The edit surface has exactly two states: hidden, or showing one session.
//! It becomes visible only through a successful fetch-by-id and returns to
//! hidden on a successful update, the close control, or an outside click.

use salon_core::ClientRecord;
use uuid::Uuid;

use crate::view::FormFields;

/// Transient state for the record currently open for editing: its identifier
/// plus the last-fetched field values prefilled into the edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub id: Uuid,
    pub form: FormFields,
}

#[derive(Debug, Default)]
pub enum EditSurface {
    #[default]
    Hidden,
    Visible(EditSession),
}

impl EditSurface {
    /// Replace whatever was showing with a session for `record`.
    pub fn open(&mut self, record: &ClientRecord) {
        *self = EditSurface::Visible(EditSession {
            id: record.id,
            form: FormFields::from_record(record),
        });
    }

    pub fn dismiss(&mut self) {
        *self = EditSurface::Hidden;
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, EditSurface::Visible(_))
    }

    pub fn session(&self) -> Option<&EditSession> {
        match self {
            EditSurface::Visible(session) => Some(session),
            EditSurface::Hidden => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut EditSession> {
        match self {
            EditSurface::Visible(session) => Some(session),
            EditSurface::Hidden => None,
        }
    }
}
