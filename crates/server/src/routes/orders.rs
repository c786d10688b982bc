use axum::{extract::{Path, State}, http::StatusCode, Json};
use serde::Deserialize;
use tracing::info;

use service::order::Order;

use crate::{errors::JsonApiError, state::ServerState};

#[derive(Debug, Default, Deserialize)]
pub struct NewOrderInput {
    #[serde(default)]
    pub client_id: Option<i64>,
}

#[utoipa::path(
    get, path = "/orders", tag = "orders",
    responses((status = 200, description = "All orders", body = [crate::openapi::OrderDoc]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Order>>, JsonApiError> {
    Ok(Json(state.orders.get_orders().await?))
}

#[utoipa::path(
    post, path = "/orders", tag = "orders",
    request_body = crate::openapi::NewOrderRequest,
    responses(
        (status = 201, description = "Created with no items", body = crate::openapi::OrderDoc),
        (status = 404, description = "Client not found")
    )
)]
pub async fn create(State(state): State<ServerState>, Json(input): Json<NewOrderInput>) -> Result<(StatusCode, Json<Order>), JsonApiError> {
    let order = state.orders.create(input.client_id).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

#[utoipa::path(
    get, path = "/orders/{id}", tag = "orders",
    params(("id" = i64, Path, description = "Order id")),
    responses(
        (status = 200, description = "Found", body = crate::openapi::OrderDoc),
        (status = 404, description = "Order not found")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<Json<Order>, JsonApiError> {
    Ok(Json(state.orders.find_by_id(id).await?))
}

#[utoipa::path(
    delete, path = "/orders/{id}", tag = "orders",
    params(("id" = i64, Path, description = "Order id")),
    responses((status = 204, description = "Deleted, or never existed"))
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<StatusCode, JsonApiError> {
    state.orders.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    put, path = "/orders/{id}/client/{client_id}", tag = "orders",
    params(
        ("id" = i64, Path, description = "Order id"),
        ("client_id" = i64, Path, description = "Client id")
    ),
    responses(
        (status = 200, description = "Client assigned", body = crate::openapi::OrderDoc),
        (status = 404, description = "Order or client not found")
    )
)]
pub async fn assign_client(
    State(state): State<ServerState>,
    Path((id, client_id)): Path<(i64, i64)>,
) -> Result<Json<Order>, JsonApiError> {
    let order = state.orders.assign_client(id, client_id).await?;
    info!(order_id = id, client_id, "order client assigned");
    Ok(Json(order))
}

#[utoipa::path(
    post, path = "/orders/{id}/items/{item_id}", tag = "orders",
    params(
        ("id" = i64, Path, description = "Order id"),
        ("item_id" = i64, Path, description = "Item id")
    ),
    responses(
        (status = 200, description = "Item appended", body = crate::openapi::OrderDoc),
        (status = 404, description = "Order or item not found")
    )
)]
pub async fn add_item(
    State(state): State<ServerState>,
    Path((id, item_id)): Path<(i64, i64)>,
) -> Result<Json<Order>, JsonApiError> {
    Ok(Json(state.orders.add_item(id, item_id).await?))
}
