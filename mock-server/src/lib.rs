//! In-memory stand-in for the salon clients REST API.
//!
//! Mirrors the behavior the app depends on: Django-style trailing-slash
//! routes, 201/204 success codes, 400 responses carrying a field → messages
//! JSON body, server-side phone normalization, and an optional pagination
//! envelope on the collection GET (`?page=N`, 10 records per page).

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Client {
    pub id: Uuid,
    pub client_name: String,
    pub client_email: String,
    pub client_number: String,
}

#[derive(Deserialize)]
pub struct ClientPayload {
    pub client_name: String,
    pub client_email: String,
    pub client_number: String,
}

#[derive(Deserialize)]
pub struct ListQuery {
    pub page: Option<usize>,
}

/// Insertion order is the order the collection GET serves.
pub type Db = Arc<RwLock<Vec<Client>>>;

const ALLOWED_DOMAINS: [&str; 3] = ["gmail", "hotmail", "outlook"];
const PAGE_SIZE: usize = 10;

type FieldErrorMap = BTreeMap<&'static str, Vec<String>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Vec::new()));
    Router::new()
        .route("/clients/", get(list_clients).post(create_client))
        .route(
            "/clients/{id}/",
            get(get_client).put(update_client).delete(delete_client),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn digits(number: &str) -> String {
    number.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Normalize an 11-digit phone number to `(XX) XXXXX-XXXX`.
fn format_number(number: &str) -> String {
    let d = digits(number);
    format!("({}) {}-{}", &d[0..2], &d[2..7], &d[7..11])
}

/// Field-level checks shared by create and update. Uniqueness is checked
/// separately because it needs the store.
fn validate(payload: &ClientPayload) -> FieldErrorMap {
    let mut errors = FieldErrorMap::new();

    if payload.client_name.split_whitespace().count() < 2 {
        errors
            .entry("client_name")
            .or_default()
            .push("O nome do cliente deve ser completo.".to_string());
    }

    if digits(&payload.client_number).len() != 11 {
        errors
            .entry("client_number")
            .or_default()
            .push("O número de telefone deve ter 11 dígitos (ex: (XX) XXXXX-XXXX).".to_string());
    }

    match payload.client_email.split_once('@') {
        None => {
            errors
                .entry("client_email")
                .or_default()
                .push("Formato de E-mail inválido.".to_string());
        }
        Some((_, domain_part)) => {
            let main_domain = domain_part.split('.').next().unwrap_or("");
            if !ALLOWED_DOMAINS.contains(&main_domain.to_lowercase().as_str()) {
                errors.entry("client_email").or_default().push(format!(
                    "O domínio '{main_domain}' não é permitido. Use gmail, hotmail ou outlook."
                ));
            }
        }
    }

    errors
}

async fn list_clients(State(db): State<Db>, Query(query): Query<ListQuery>) -> Json<serde_json::Value> {
    let clients = db.read().await;
    match query.page {
        None => Json(json!(&*clients)),
        Some(page) => {
            let page = page.max(1);
            let start = (page - 1) * PAGE_SIZE;
            let results: Vec<&Client> = clients.iter().skip(start).take(PAGE_SIZE).collect();
            let next = (start + PAGE_SIZE < clients.len()).then(|| page + 1);
            let previous = (page > 1).then(|| page - 1);
            Json(json!({
                "count": clients.len(),
                "next": next,
                "previous": previous,
                "results": results,
            }))
        }
    }
}

async fn create_client(State(db): State<Db>, Json(input): Json<ClientPayload>) -> Response {
    let mut errors = validate(&input);
    let mut clients = db.write().await;
    if clients.iter().any(|c| c.client_email == input.client_email) {
        errors
            .entry("client_email")
            .or_default()
            .push("Este e-mail já está em uso.".to_string());
    }
    if !errors.is_empty() {
        return (StatusCode::BAD_REQUEST, Json(errors)).into_response();
    }

    let client = Client {
        id: Uuid::new_v4(),
        client_name: input.client_name,
        client_email: input.client_email,
        client_number: format_number(&input.client_number),
    };
    clients.push(client.clone());
    (StatusCode::CREATED, Json(client)).into_response()
}

async fn get_client(State(db): State<Db>, Path(id): Path<Uuid>) -> Result<Json<Client>, StatusCode> {
    let clients = db.read().await;
    clients
        .iter()
        .find(|c| c.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// PUT replaces the whole record; all three fields are required.
async fn update_client(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    Json(input): Json<ClientPayload>,
) -> Response {
    let mut clients = db.write().await;
    let Some(index) = clients.iter().position(|c| c.id == id) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    let mut errors = validate(&input);
    if clients
        .iter()
        .any(|c| c.id != id && c.client_email == input.client_email)
    {
        errors
            .entry("client_email")
            .or_default()
            .push("Este E-mail já está cadastrado por outro cliente.".to_string());
    }
    if !errors.is_empty() {
        return (StatusCode::BAD_REQUEST, Json(errors)).into_response();
    }

    let client = &mut clients[index];
    client.client_name = input.client_name;
    client.client_email = input.client_email;
    client.client_number = format_number(&input.client_number);
    Json(client.clone()).into_response()
}

async fn delete_client(State(db): State<Db>, Path(id): Path<Uuid>) -> Result<StatusCode, StatusCode> {
    let mut clients = db.write().await;
    let index = clients.iter().position(|c| c.id == id).ok_or(StatusCode::NOT_FOUND)?;
    clients.remove(index);
    Ok(StatusCode::NO_CONTENT)
}
