use reqwest::{header::CONTENT_TYPE, Client, Response, StatusCode};
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use ticket_tracker::application::{self, ApplicationEnv};
use tokio::net::TcpListener;

pub const MAX_HTTP_CONTENT_LEN: usize = 4096;

///
/// Starts application on random port with fresh in-memory database.
/// Returns address the application listens on
///
pub async fn spawn_application() -> String {
    // every connection to sqlite::memory: has its own database
    let db_pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let bind_address = listener.local_addr().unwrap();

    let env = ApplicationEnv {
        log_directory: String::new(),
        log_filename: String::new(),
        bind_address,
        db_connection_string: "sqlite::memory:".to_string(),
        db_max_connections: 1,
        max_http_content_len: MAX_HTTP_CONTENT_LEN,
    };

    let state = application::create_state_with_pool(db_pool).await.unwrap();
    let middleware = application::create_middleware(&env);
    let app = application::create_application(state, middleware);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    bind_address.to_string()
}

pub async fn post_json(client: &Client, url: String, body: &Value) -> Response {
    client
        .post(url)
        .header(CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .send()
        .await
        .unwrap()
}

pub async fn put_json(client: &Client, url: String, body: &Value) -> Response {
    client
        .put(url)
        .header(CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .send()
        .await
        .unwrap()
}

pub async fn json_body(response: Response) -> Value {
    let bytes = response.bytes().await.unwrap();
    serde_json::from_slice::<Value>(&bytes).unwrap()
}

///
/// Creates ticket and returns its JSON representation
///
pub async fn create_ticket(client: &Client, address: &str, body: &Value) -> Value {
    let response = post_json(client, format!("http://{address}/tickets/"), body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    json_body(response).await
}

pub fn ticket_id(ticket: &Value) -> i64 {
    ticket.get("id").unwrap().as_i64().unwrap()
}
