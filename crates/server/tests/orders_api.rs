use std::net::SocketAddr;

use reqwest::StatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::routes;
use server::state::ServerState;

async fn start_server() -> anyhow::Result<String> {
    let app = routes::build_router(ServerState::in_memory(), CorsLayer::very_permissive());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });
    Ok(format!("http://{}:{}", addr.ip(), addr.port()))
}

async fn post_json(url: String, body: Value) -> anyhow::Result<(StatusCode, Value)> {
    let res = reqwest::Client::new().post(url).json(&body).send().await?;
    let status = res.status();
    Ok((status, res.json().await?))
}

#[tokio::test]
async fn order_lifecycle() -> anyhow::Result<()> {
    let base = start_server().await?;
    let http = reqwest::Client::new();

    let (status, c) = post_json(
        format!("{}/clients", base),
        json!({ "name": "Marcin", "surname": "Abacki", "email": "marcin@example.com" }),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    let (_, pen) = post_json(format!("{}/items", base), json!({ "name": "Pen", "price_cents": 300 })).await?;
    let (_, ink) = post_json(format!("{}/items", base), json!({ "name": "Ink", "price_cents": 700 })).await?;

    let (status, order) = post_json(format!("{}/orders", base), json!({})).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(order["items"], json!([]));
    assert_eq!(order["client_id"], Value::Null);
    let oid = order["id"].as_i64().expect("order id");

    let (status, _) = post_json(format!("{}/orders/{}/items/{}", base, oid, ink["id"]), json!(null)).await?;
    assert_eq!(status, StatusCode::OK);
    let (_, order) = post_json(format!("{}/orders/{}/items/{}", base, oid, pen["id"]), json!(null)).await?;
    assert_eq!(order["items"], json!([ink, pen]));

    let res = http.put(format!("{}/orders/{}/client/{}", base, oid, c["id"])).send().await?;
    assert_eq!(res.status(), StatusCode::OK);

    let of_client: Vec<Value> = http.get(format!("{}/clients/{}/orders", base, c["id"])).send().await?.json().await?;
    assert_eq!(of_client.len(), 1);
    assert_eq!(of_client[0]["id"], oid);

    let res = http.delete(format!("{}/orders/{}", base, oid)).send().await?;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    let res = http.get(format!("{}/orders/{}", base, oid)).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await?;
    assert_eq!(body["message"], "Order not found");
    Ok(())
}

#[tokio::test]
async fn unknown_references_are_404() -> anyhow::Result<()> {
    let base = start_server().await?;

    let (status, body) = post_json(format!("{}/orders", base), json!({ "client_id": 77 })).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Client not found");

    let (_, order) = post_json(format!("{}/orders", base), json!({})).await?;
    let (status, body) = post_json(format!("{}/orders/{}/items/5", base, order["id"]), json!(null)).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Item not found");

    let (status, body) = post_json(format!("{}/orders/999/items/5", base), json!(null)).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Order not found");
    Ok(())
}

#[tokio::test]
async fn openapi_document_lists_client_routes() -> anyhow::Result<()> {
    let base = start_server().await?;
    let doc: Value = reqwest::get(format!("{}/api-docs/openapi.json", base)).await?.json().await?;
    assert!(doc["paths"]["/clients/{id}"].is_object());
    assert!(doc["paths"]["/orders/{id}/items/{item_id}"].is_object());
    Ok(())
}
