use std::net::SocketAddr;

use axum::Router;
use configs::RenamePolicy;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::{routes, AppState};

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let app: Router = routes::build_router(AppState::in_memory(RenamePolicy::Overwrite), CorsLayer::very_permissive());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::get(format!("{}/health", app.base_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_category_lifecycle_over_http() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c.post(format!("{}/categories", app.base_url)).json(&json!({"name": "work"})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);

    let res = c.post(format!("{}/todos", app.base_url))
        .json(&json!({"title": "buy milk", "category": "work"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let todo = res.json::<Value>().await?;

    let res = c.get(format!("{}/todos/category/work", app.base_url)).send().await?;
    assert_eq!(res.json::<Value>().await?, json!([todo]));

    let res = c.delete(format!("{}/categories/work", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let res = c.get(format!("{}/todos", app.base_url)).send().await?;
    assert_eq!(res.json::<Value>().await?, json!([]));
    Ok(())
}

#[tokio::test]
async fn e2e_garbage_body_gets_json_error() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::Client::new()
        .post(format!("{}/categories", app.base_url))
        .header("content-type", "application/json")
        .body("not json")
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert!(body["error"].is_string());
    Ok(())
}
