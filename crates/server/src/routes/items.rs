use std::collections::HashSet;

use axum::{extract::{Path, State}, http::StatusCode, Json};

use service::item::{Item, NewItem};

use crate::{errors::JsonApiError, state::ServerState};

#[utoipa::path(
    get, path = "/items", tag = "items",
    responses((status = 200, description = "All items", body = [crate::openapi::ItemDoc]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<HashSet<Item>>, JsonApiError> {
    Ok(Json(state.items.get_items().await?))
}

#[utoipa::path(
    post, path = "/items", tag = "items",
    request_body = crate::openapi::NewItemRequest,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ItemDoc),
        (status = 400, description = "Validation Error")
    )
)]
pub async fn create(State(state): State<ServerState>, Json(input): Json<NewItem>) -> Result<(StatusCode, Json<Item>), JsonApiError> {
    let item = state.items.create(input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

#[utoipa::path(
    get, path = "/items/{id}", tag = "items",
    params(("id" = i64, Path, description = "Item id")),
    responses(
        (status = 200, description = "Found", body = crate::openapi::ItemDoc),
        (status = 404, description = "Item not found")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<Json<Item>, JsonApiError> {
    Ok(Json(state.items.find_by_id(id).await?))
}

#[utoipa::path(
    delete, path = "/items/{id}", tag = "items",
    params(("id" = i64, Path, description = "Item id")),
    responses((status = 204, description = "Deleted, or never existed"))
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<StatusCode, JsonApiError> {
    state.items.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
