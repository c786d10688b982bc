use std::collections::HashSet;

use axum::{extract::{Path, State}, http::StatusCode, Json};
use tracing::info;

use service::client::{Client, ClientChanges, NewClient};
use service::order::Order;

use crate::{errors::JsonApiError, state::ServerState};

#[utoipa::path(
    get, path = "/clients", tag = "clients",
    responses((status = 200, description = "All clients", body = [crate::openapi::ClientDoc]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<HashSet<Client>>, JsonApiError> {
    let clients = state.clients.get_clients().await?;
    info!(count = clients.len(), "list clients");
    Ok(Json(clients))
}

#[utoipa::path(
    post, path = "/clients", tag = "clients",
    request_body = crate::openapi::NewClientRequest,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ClientDoc),
        (status = 400, description = "Validation Error"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn create(State(state): State<ServerState>, Json(input): Json<NewClient>) -> Result<(StatusCode, Json<Client>), JsonApiError> {
    let client = state.clients.create(input).await?;
    Ok((StatusCode::CREATED, Json(client)))
}

#[utoipa::path(
    get, path = "/clients/{id}", tag = "clients",
    params(("id" = i64, Path, description = "Client id")),
    responses(
        (status = 200, description = "Found", body = crate::openapi::ClientDoc),
        (status = 404, description = "Client not found")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<Json<Client>, JsonApiError> {
    Ok(Json(state.clients.find_by_id(id).await?))
}

#[utoipa::path(
    put, path = "/clients/{id}", tag = "clients",
    params(("id" = i64, Path, description = "Client id")),
    request_body = crate::openapi::ClientChangesRequest,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ClientDoc),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Client not found"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(changes): Json<ClientChanges>,
) -> Result<Json<Client>, JsonApiError> {
    Ok(Json(state.clients.update(id, changes).await?))
}

#[utoipa::path(
    delete, path = "/clients/{id}", tag = "clients",
    params(("id" = i64, Path, description = "Client id")),
    responses((status = 204, description = "Deleted, or never existed"))
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<StatusCode, JsonApiError> {
    state.clients.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get, path = "/clients/by-email/{email}", tag = "clients",
    params(("email" = String, Path, description = "Exact email")),
    responses(
        (status = 200, description = "Found", body = crate::openapi::ClientDoc),
        (status = 404, description = "Client not found")
    )
)]
pub async fn by_email(State(state): State<ServerState>, Path(email): Path<String>) -> Result<Json<Client>, JsonApiError> {
    Ok(Json(state.clients.find_by_email(&email).await?))
}

#[utoipa::path(
    get, path = "/clients/by-name/{name}", tag = "clients",
    params(("name" = String, Path, description = "Exact first name")),
    responses((status = 200, description = "Matching clients, possibly none", body = [crate::openapi::ClientDoc]))
)]
pub async fn by_name(State(state): State<ServerState>, Path(name): Path<String>) -> Result<Json<HashSet<Client>>, JsonApiError> {
    Ok(Json(state.clients.find_clients_by_name(&name).await?))
}

#[utoipa::path(
    get, path = "/clients/by-surname/{surname}", tag = "clients",
    params(("surname" = String, Path, description = "Exact surname")),
    responses((status = 200, description = "Matching clients, possibly none", body = [crate::openapi::ClientDoc]))
)]
pub async fn by_surname(State(state): State<ServerState>, Path(surname): Path<String>) -> Result<Json<HashSet<Client>>, JsonApiError> {
    Ok(Json(state.clients.find_clients_by_surname(&surname).await?))
}

#[utoipa::path(
    get, path = "/clients/{id}/orders", tag = "clients",
    params(("id" = i64, Path, description = "Client id")),
    responses((status = 200, description = "Orders referencing the client", body = [crate::openapi::OrderDoc]))
)]
pub async fn orders(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<Json<Vec<Order>>, JsonApiError> {
    Ok(Json(state.orders.find_orders_by_client(id).await?))
}
