use axum::{
    routing::{get, post, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod clients;
pub mod items;
pub mod orders;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let client_routes = Router::new()
        .route("/clients", get(clients::list).post(clients::create))
        .route("/clients/:id", get(clients::get).put(clients::update).delete(clients::delete))
        .route("/clients/:id/orders", get(clients::orders))
        .route("/clients/by-email/:email", get(clients::by_email))
        .route("/clients/by-name/:name", get(clients::by_name))
        .route("/clients/by-surname/:surname", get(clients::by_surname));

    let item_routes = Router::new()
        .route("/items", get(items::list).post(items::create))
        .route("/items/:id", get(items::get).delete(items::delete));

    let order_routes = Router::new()
        .route("/orders", get(orders::list).post(orders::create))
        .route("/orders/:id", get(orders::get).delete(orders::delete))
        .route("/orders/:id/client/:client_id", put(orders::assign_client))
        .route("/orders/:id/items/:item_id", post(orders::add_item));

    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(client_routes)
        .merge(item_routes)
        .merge(order_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
