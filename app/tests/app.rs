//! Handler behavior against a scripted transport.
//!
//! No network is involved: each test queues the exact responses the app will
//! receive and then inspects the view state and the request log. The log
//! doubles as the proof that successful mutations are followed by exactly
//! one collection refresh and that a declined delete touches the network
//! not at all.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::{Duration, Instant};

use salon_app::{AppConfig, ConfirmPrompt, SalonApp, Severity, Transport, TransportError, HIDE_DELAY};
use salon_core::{HttpMethod, HttpRequest, HttpResponse};
use uuid::Uuid;

const BASE_URL: &str = "http://testserver";
const ID: &str = "00000000-0000-0000-0000-000000000001";

#[derive(Clone, Default)]
struct ScriptedTransport {
    responses: Rc<RefCell<VecDeque<Result<HttpResponse, TransportError>>>>,
    log: Rc<RefCell<Vec<(HttpMethod, String)>>>,
}

impl ScriptedTransport {
    fn push_ok(&self, status: u16, body: &str) {
        self.responses.borrow_mut().push_back(Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }));
    }

    fn push_err(&self, message: &str) {
        self.responses
            .borrow_mut()
            .push_back(Err(TransportError(message.to_string())));
    }

    fn requests(&self) -> Vec<(HttpMethod, String)> {
        self.log.borrow().clone()
    }
}

impl Transport for ScriptedTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        self.log
            .borrow_mut()
            .push((request.method.clone(), request.path.clone()));
        self.responses
            .borrow_mut()
            .pop_front()
            .expect("no scripted response left for this request")
    }
}

struct Answer(bool);

impl ConfirmPrompt for Answer {
    fn confirm(&self, _message: &str) -> bool {
        self.0
    }
}

#[derive(Clone, Default)]
struct CountingPrompt {
    asked: Rc<RefCell<usize>>,
    answer: bool,
}

impl ConfirmPrompt for CountingPrompt {
    fn confirm(&self, _message: &str) -> bool {
        *self.asked.borrow_mut() += 1;
        self.answer
    }
}

fn app(transport: &ScriptedTransport) -> SalonApp<ScriptedTransport, Answer> {
    app_with_prompt(transport, Answer(true))
}

fn app_with_prompt<P: ConfirmPrompt>(
    transport: &ScriptedTransport,
    prompt: P,
) -> SalonApp<ScriptedTransport, P> {
    SalonApp::new(
        AppConfig {
            base_url: BASE_URL.to_string(),
        },
        transport.clone(),
        prompt,
    )
}

fn record_json(id: &str, name: &str, email: &str, number: &str) -> String {
    format!(
        r#"{{"id":"{id}","client_name":"{name}","client_email":"{email}","client_number":"{number}"}}"#
    )
}

fn id() -> Uuid {
    ID.parse().unwrap()
}

// --- collection sync ---

#[test]
fn refresh_renders_rows_in_server_order() {
    let transport = ScriptedTransport::default();
    transport.push_ok(
        200,
        &format!(
            "[{},{},{}]",
            record_json(
                "00000000-0000-0000-0000-000000000003",
                "Carla Souza",
                "carla@outlook.com",
                "(21) 91111-2222"
            ),
            record_json(ID, "Ana Lima", "ana@gmail.com", "(31) 93333-4444"),
            record_json(
                "00000000-0000-0000-0000-000000000002",
                "Bia Costa",
                "bia@hotmail.com",
                "(41) 95555-6666"
            ),
        ),
    );

    let mut app = app(&transport);
    app.refresh_list();

    let rows = app.view.list.rows();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].client_name, "Carla Souza");
    assert_eq!(rows[1].client_name, "Ana Lima");
    assert_eq!(rows[1].id, id());
    assert_eq!(rows[1].client_email, "ana@gmail.com");
    assert_eq!(rows[1].client_number, "(31) 93333-4444");
    assert_eq!(rows[2].client_name, "Bia Costa");
}

#[test]
fn failed_refresh_leaves_list_empty_and_reports() {
    let transport = ScriptedTransport::default();
    transport.push_ok(
        200,
        &format!("[{}]", record_json(ID, "Ana Lima", "ana@gmail.com", "(31) 93333-4444")),
    );

    let mut app = app(&transport);
    app.refresh_list();
    assert_eq!(app.view.list.rows().len(), 1);

    transport.push_err("connection refused");
    app.refresh_list();

    assert!(app.view.list.rows().is_empty());
    assert_eq!(
        app.view.feedback.message(),
        Some("Erro ao carregar a lista de clientes.")
    );
    assert_eq!(app.view.feedback.severity(), Some(Severity::Error));
}

#[test]
fn refresh_with_non_success_status_shows_fixed_message() {
    let transport = ScriptedTransport::default();
    transport.push_ok(500, "internal error");

    let mut app = app(&transport);
    app.refresh_list();

    assert!(app.view.list.rows().is_empty());
    assert_eq!(
        app.view.feedback.message(),
        Some("Erro ao carregar a lista de clientes.")
    );
}

#[test]
fn refresh_accepts_pagination_envelope() {
    let transport = ScriptedTransport::default();
    transport.push_ok(
        200,
        &format!(
            r#"{{"count":1,"next":null,"previous":null,"results":[{}]}}"#,
            record_json(ID, "Ana Lima", "ana@gmail.com", "(31) 93333-4444")
        ),
    );

    let mut app = app(&transport);
    app.refresh_list();

    assert_eq!(app.view.list.rows().len(), 1);
}

// --- create ---

#[test]
fn successful_create_clears_form_and_refreshes_once() {
    let transport = ScriptedTransport::default();
    let created = record_json(ID, "Maria Silva", "maria@gmail.com", "(11) 98765-4321");
    transport.push_ok(201, &created);
    transport.push_ok(200, &format!("[{created}]"));

    let mut app = app(&transport);
    app.view.create_form.client_name = "Maria Silva".to_string();
    app.view.create_form.client_email = "maria@gmail.com".to_string();
    app.view.create_form.client_number = "11987654321".to_string();
    app.submit_create();

    assert_eq!(app.view.feedback.message(), Some("Cliente cadastrado com sucesso!"));
    assert_eq!(app.view.feedback.severity(), Some(Severity::Success));
    assert_eq!(app.view.create_form.client_name, "");
    assert_eq!(app.view.create_form.client_email, "");
    assert_eq!(app.view.create_form.client_number, "");
    assert_eq!(app.view.list.rows().len(), 1);
    assert_eq!(
        transport.requests(),
        vec![
            (HttpMethod::Post, format!("{BASE_URL}/clients/")),
            (HttpMethod::Get, format!("{BASE_URL}/clients/")),
        ]
    );
}

#[test]
fn failed_create_keeps_form_and_skips_refresh() {
    let transport = ScriptedTransport::default();
    transport.push_ok(400, r#"{"client_email":["Formato de E-mail inválido."]}"#);

    let mut app = app(&transport);
    app.view.create_form.client_name = "Maria Silva".to_string();
    app.view.create_form.client_email = "maria".to_string();
    app.view.create_form.client_number = "11987654321".to_string();
    app.submit_create();

    assert_eq!(app.view.create_form.client_email, "maria");
    assert_eq!(app.view.create_form.client_name, "Maria Silva");
    assert!(app.view.list.rows().is_empty());
    assert_eq!(
        app.view.feedback.message(),
        Some("Erro ao salvar: client_email: Formato de E-mail inválido.")
    );
    // no refresh after the failed POST
    assert_eq!(transport.requests().len(), 1);
}

#[test]
fn create_network_failure_reports_generic_message() {
    let transport = ScriptedTransport::default();
    transport.push_err("connection refused");

    let mut app = app(&transport);
    app.submit_create();

    assert_eq!(
        app.view.feedback.message(),
        Some("Erro ao salvar: connection refused")
    );
    assert_eq!(app.view.feedback.severity(), Some(Severity::Error));
}

// --- delete ---

#[test]
fn declined_delete_makes_no_network_call() {
    let transport = ScriptedTransport::default();
    let prompt = CountingPrompt {
        answer: false,
        ..CountingPrompt::default()
    };
    let asked = prompt.asked.clone();

    let mut app = app_with_prompt(&transport, prompt);
    app.delete_client(id());

    assert_eq!(*asked.borrow(), 1);
    assert!(transport.requests().is_empty());
    assert!(!app.view.feedback.is_visible());
}

#[test]
fn confirmed_delete_refreshes_once() {
    let transport = ScriptedTransport::default();
    transport.push_ok(204, "");
    transport.push_ok(200, "[]");

    let mut app = app(&transport);
    app.delete_client(id());

    assert_eq!(app.view.feedback.message(), Some("Cliente excluído com sucesso!"));
    assert_eq!(
        transport.requests(),
        vec![
            (HttpMethod::Delete, format!("{BASE_URL}/clients/{ID}/")),
            (HttpMethod::Get, format!("{BASE_URL}/clients/")),
        ]
    );
}

#[test]
fn failed_delete_keeps_rendered_row() {
    let transport = ScriptedTransport::default();
    transport.push_ok(
        200,
        &format!("[{}]", record_json(ID, "Ana Lima", "ana@gmail.com", "(31) 93333-4444")),
    );

    let mut app = app(&transport);
    app.refresh_list();

    transport.push_ok(500, "internal error");
    app.delete_client(id());

    assert_eq!(app.view.list.rows().len(), 1);
    assert_eq!(app.view.feedback.message(), Some("Falha ao excluir o cliente."));
    // the initial GET plus the failed DELETE, no refresh afterwards
    assert_eq!(transport.requests().len(), 2);
}

// --- edit session ---

#[test]
fn open_edit_prefills_and_shows_the_surface() {
    let transport = ScriptedTransport::default();
    transport.push_ok(
        200,
        &record_json(ID, "Ana Lima", "ana@gmail.com", "(31) 93333-4444"),
    );

    let mut app = app(&transport);
    app.open_edit(id());

    let session = app.view.edit.session().expect("edit surface should be open");
    assert_eq!(session.id, id());
    assert_eq!(session.form.client_name, "Ana Lima");
    assert_eq!(session.form.client_email, "ana@gmail.com");
    assert_eq!(session.form.client_number, "(31) 93333-4444");
}

#[test]
fn open_edit_not_found_keeps_surface_hidden() {
    let transport = ScriptedTransport::default();
    transport.push_ok(404, "");

    let mut app = app(&transport);
    app.open_edit(id());

    assert!(!app.view.edit.is_visible());
    assert_eq!(app.view.feedback.message(), Some("Cliente não encontrado."));
}

#[test]
fn dismiss_edit_hides_the_surface() {
    let transport = ScriptedTransport::default();
    transport.push_ok(
        200,
        &record_json(ID, "Ana Lima", "ana@gmail.com", "(31) 93333-4444"),
    );

    let mut app = app(&transport);
    app.open_edit(id());
    app.dismiss_edit();

    assert!(!app.view.edit.is_visible());
}

// --- update ---

#[test]
fn successful_update_closes_session_and_refreshes_once() {
    let transport = ScriptedTransport::default();
    transport.push_ok(
        200,
        &record_json(ID, "Ana Lima", "ana@gmail.com", "(31) 93333-4444"),
    );

    let mut app = app(&transport);
    app.open_edit(id());
    app.view
        .edit
        .session_mut()
        .unwrap()
        .form
        .client_name = "Ana Souza".to_string();

    let updated = record_json(ID, "Ana Souza", "ana@gmail.com", "(31) 93333-4444");
    transport.push_ok(200, &updated);
    transport.push_ok(200, &format!("[{updated}]"));
    app.submit_update();

    assert!(!app.view.edit.is_visible());
    assert_eq!(app.view.feedback.message(), Some("Cliente atualizado com sucesso!"));
    assert_eq!(app.view.list.rows()[0].client_name, "Ana Souza");
    assert_eq!(
        transport.requests(),
        vec![
            (HttpMethod::Get, format!("{BASE_URL}/clients/{ID}/")),
            (HttpMethod::Put, format!("{BASE_URL}/clients/{ID}/")),
            (HttpMethod::Get, format!("{BASE_URL}/clients/")),
        ]
    );
}

#[test]
fn update_validation_failure_keeps_session_open() {
    let transport = ScriptedTransport::default();
    transport.push_ok(
        200,
        &record_json(ID, "Ana Lima", "ana@gmail.com", "(31) 93333-4444"),
    );

    let mut app = app(&transport);
    app.open_edit(id());

    transport.push_ok(400, r#"{"client_email":["invalid"]}"#);
    app.submit_update();

    assert!(app.view.edit.is_visible());
    let message = app.view.feedback.message().unwrap();
    assert!(message.contains("client_email: invalid"), "got: {message}");
    assert!(message.starts_with("Erro ao atualizar:"));
}

#[test]
fn submit_update_without_open_session_is_a_no_op() {
    let transport = ScriptedTransport::default();

    let mut app = app(&transport);
    app.submit_update();

    assert!(transport.requests().is_empty());
    assert!(!app.view.feedback.is_visible());
}

// --- feedback timing ---

#[test]
fn feedback_stays_visible_for_the_full_delay() {
    let transport = ScriptedTransport::default();
    transport.push_ok(500, "");

    let mut app = app(&transport);
    let before = Instant::now();
    app.refresh_list();
    assert!(app.view.feedback.is_visible());

    app.tick(before + Duration::from_secs(4));
    assert!(app.view.feedback.is_visible());

    app.tick(before + HIDE_DELAY + Duration::from_secs(1));
    assert!(!app.view.feedback.is_visible());
}
