//! Handlers wiring user actions to API calls and view updates.
//!
//! # Design
//! `SalonApp` owns the view-binding object (`ViewState`) and the two seams
//! it needs injected: a `Transport` to execute requests and a `ConfirmPrompt`
//! for the delete guardrail. Every mutation that succeeds triggers one full
//! list refresh; the list view carries no cached data between syncs.
//!
//! Every handler catches its own failure, emits a developer trace, and
//! reports through the feedback panel. No failure is fatal: the app stays
//! usable after any single error.
//!
//! All operations are synchronous, so within one handler the request,
//! response, and re-render run strictly in sequence, and two handlers can
//! never overlap.

use std::fmt;
use std::time::Instant;

use salon_core::{ApiError, ClientPayload, ClientRecord, ClientsApi};
use uuid::Uuid;

use crate::feedback::{FeedbackPanel, Severity};
use crate::prompt::ConfirmPrompt;
use crate::session::EditSurface;
use crate::transport::{Transport, TransportError};
use crate::view::{FormFields, ListView};

const MSG_LIST_ERROR: &str = "Erro ao carregar a lista de clientes.";
const MSG_CREATE_SUCCESS: &str = "Cliente cadastrado com sucesso!";
const MSG_UPDATE_SUCCESS: &str = "Cliente atualizado com sucesso!";
const MSG_DELETE_SUCCESS: &str = "Cliente excluído com sucesso!";
const MSG_DELETE_ERROR: &str = "Falha ao excluir o cliente.";
const MSG_NOT_FOUND: &str = "Cliente não encontrado.";
const MSG_CONFIRM_DELETE: &str = "Tem certeza que deseja excluir este cliente?";

/// Configuration injected at construction; the app reads no ambient state.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub base_url: String,
}

/// Every piece of rendered state the handlers touch, bound once at startup.
#[derive(Debug, Default)]
pub struct ViewState {
    pub list: ListView,
    pub create_form: FormFields,
    pub edit: EditSurface,
    pub feedback: FeedbackPanel,
}

/// A failed operation: either the request never completed, or the server
/// answered with a non-success status.
#[derive(Debug)]
enum OpError {
    Transport(TransportError),
    Api(ApiError),
}

impl fmt::Display for OpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpError::Transport(e) => write!(f, "{e}"),
            OpError::Api(e) => write!(f, "{e}"),
        }
    }
}

impl From<TransportError> for OpError {
    fn from(e: TransportError) -> Self {
        OpError::Transport(e)
    }
}

impl From<ApiError> for OpError {
    fn from(e: ApiError) -> Self {
        OpError::Api(e)
    }
}

pub struct SalonApp<T, P> {
    api: ClientsApi,
    transport: T,
    prompt: P,
    pub view: ViewState,
}

impl<T: Transport, P: ConfirmPrompt> SalonApp<T, P> {
    pub fn new(config: AppConfig, transport: T, prompt: P) -> Self {
        Self {
            api: ClientsApi::new(&config.base_url),
            transport,
            prompt,
            view: ViewState::default(),
        }
    }

    /// Re-render the list from the server's current state.
    ///
    /// Rows are cleared before the request goes out, so a failed refresh
    /// leaves a visibly empty list.
    pub fn refresh_list(&mut self) {
        self.view.list.clear();
        match self.list() {
            Ok(records) => self.view.list.render(&records),
            Err(error) => {
                tracing::error!(%error, "failed to fetch client list");
                self.view.feedback.show(MSG_LIST_ERROR, Severity::Error);
            }
        }
    }

    /// Submit the create form. On 201 the form is reset and the list
    /// refreshed; on any failure the form contents are left untouched.
    pub fn submit_create(&mut self) {
        let payload = self.view.create_form.to_payload();
        match self.create(&payload) {
            Ok(_) => {
                self.view.feedback.show(MSG_CREATE_SUCCESS, Severity::Success);
                self.view.create_form.reset();
                self.refresh_list();
            }
            Err(error) => {
                tracing::error!(%error, "failed to create client");
                self.view
                    .feedback
                    .show(format!("Erro ao salvar: {error}"), Severity::Error);
            }
        }
    }

    /// Submit the edit form as a full replacement of the open record.
    /// A failure leaves the edit surface open so the user can retry.
    pub fn submit_update(&mut self) {
        let Some(session) = self.view.edit.session() else {
            return;
        };
        let id = session.id;
        let payload = session.form.to_payload();

        match self.update(id, &payload) {
            Ok(_) => {
                self.view.feedback.show(MSG_UPDATE_SUCCESS, Severity::Success);
                self.view.edit.dismiss();
                self.refresh_list();
            }
            Err(error) => {
                tracing::error!(%error, client_id = %id, "failed to update client");
                self.view
                    .feedback
                    .show(format!("Erro ao atualizar: {error}"), Severity::Error);
            }
        }
    }

    /// Delete after an affirmative confirmation; declining performs no
    /// network call and shows no feedback.
    pub fn delete_client(&mut self, id: Uuid) {
        if !self.prompt.confirm(MSG_CONFIRM_DELETE) {
            return;
        }
        match self.delete(id) {
            Ok(()) => {
                self.view.feedback.show(MSG_DELETE_SUCCESS, Severity::Success);
                self.refresh_list();
            }
            Err(error) => {
                tracing::error!(%error, client_id = %id, "failed to delete client");
                self.view.feedback.show(MSG_DELETE_ERROR, Severity::Error);
            }
        }
    }

    /// Fetch one record and open the edit surface prefilled with it.
    /// On failure the surface stays hidden.
    pub fn open_edit(&mut self, id: Uuid) {
        match self.get(id) {
            Ok(record) => self.view.edit.open(&record),
            Err(error) => {
                tracing::error!(%error, client_id = %id, "failed to fetch client for editing");
                let message = match &error {
                    OpError::Transport(e) => e.to_string(),
                    OpError::Api(_) => MSG_NOT_FOUND.to_string(),
                };
                self.view.feedback.show(message, Severity::Error);
            }
        }
    }

    /// Close control or a click outside the surface's bounds.
    pub fn dismiss_edit(&mut self) {
        self.view.edit.dismiss();
    }

    /// Advance the feedback panel's hide timers.
    pub fn tick(&mut self, now: Instant) {
        self.view.feedback.tick(now);
    }

    fn list(&self) -> Result<Vec<ClientRecord>, OpError> {
        let request = self.api.build_list_clients();
        let response = self.transport.execute(&request)?;
        Ok(self.api.parse_list_clients(response)?)
    }

    fn get(&self, id: Uuid) -> Result<ClientRecord, OpError> {
        let request = self.api.build_get_client(id);
        let response = self.transport.execute(&request)?;
        Ok(self.api.parse_get_client(response)?)
    }

    fn create(&self, payload: &ClientPayload) -> Result<ClientRecord, OpError> {
        let request = self.api.build_create_client(payload)?;
        let response = self.transport.execute(&request)?;
        Ok(self.api.parse_create_client(response)?)
    }

    fn update(&self, id: Uuid, payload: &ClientPayload) -> Result<ClientRecord, OpError> {
        let request = self.api.build_update_client(id, payload)?;
        let response = self.transport.execute(&request)?;
        Ok(self.api.parse_update_client(response)?)
    }

    fn delete(&self, id: Uuid) -> Result<(), OpError> {
        let request = self.api.build_delete_client(id);
        let response = self.transport.execute(&request)?;
        Ok(self.api.parse_delete_client(response)?)
    }
}
