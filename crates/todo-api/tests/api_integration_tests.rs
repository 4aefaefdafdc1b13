use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use infrastructure::SqliteTodoRepository;
use shared::Config;
use std::sync::Arc;
use todo_api::{app_with_state, AppState};
use tower::ServiceExt; // for `oneshot`

// SQLite（インメモリ）を使ったルータを作成するヘルパー関数
async fn create_test_app() -> Router {
    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        database_max_connections: 1,
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        environment: "test".to_string(),
    };
    let repository = SqliteTodoRepository::connect(&config)
        .await
        .expect("SQLiteの初期化に失敗しました");

    app_with_state(AppState::new(Arc::new(repository)))
}

fn request(method: &str, uri: &str, body: Option<serde_json::Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

// レスポンスボディをStringに変換するヘルパー関数
async fn response_body_to_string(response: Response) -> String {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn response_body_to_json(response: Response) -> serde_json::Value {
    serde_json::from_str(&response_body_to_string(response).await).unwrap()
}

#[tokio::test]
async fn test_full_lifecycle() {
    let app = create_test_app().await;

    // 作成
    let response = app
        .clone()
        .oneshot(request(
            "POST",
            "/api/todos",
            Some(serde_json::json!({
                "title": "Title 1",
                "description": "Description 1",
                "completed": false
            })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = response_body_to_json(response).await;
    let id = created["id"].as_i64().expect("id が採番されていません");
    assert_eq!(created["title"], "Title 1");
    assert_eq!(created["description"], "Description 1");
    assert_eq!(created["completed"], false);

    // 取得
    let response = app
        .clone()
        .oneshot(request("GET", &format!("/api/todos/{id}"), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_body_to_json(response).await, created);

    // 更新
    let response = app
        .clone()
        .oneshot(request(
            "PUT",
            &format!("/api/todos/{id}"),
            Some(serde_json::json!({
                "title": "Updated Title",
                "description": "Updated Description",
                "completed": true
            })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = response_body_to_json(response).await;
    assert_eq!(updated["id"], id);
    assert_eq!(updated["title"], "Updated Title");
    assert_eq!(updated["description"], "Updated Description");
    assert_eq!(updated["completed"], true);

    // 一覧
    let response = app
        .clone()
        .oneshot(request("GET", "/api/todos", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response_body_to_json(response).await,
        serde_json::json!([updated])
    );

    // 削除
    let response = app
        .clone()
        .oneshot(request("DELETE", &format!("/api/todos/{id}"), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(response_body_to_string(response).await, "");

    // 再削除は 404
    let response = app
        .clone()
        .oneshot(request("DELETE", &format!("/api/todos/{id}"), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        response_body_to_string(response).await,
        format!("Todo not found with id: {id}")
    );

    // 削除後の取得も 404
    let response = app
        .oneshot(request("GET", &format!("/api/todos/{id}"), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_missing_todo_returns_404() {
    let app = create_test_app().await;

    let response = app
        .oneshot(request("GET", "/api/todos/999", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        response_body_to_string(response).await,
        "Todo not found with id: 999"
    );
}

#[tokio::test]
async fn test_list_is_empty_initially() {
    let app = create_test_app().await;

    let response = app
        .oneshot(request("GET", "/api/todos", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_body_to_json(response).await, serde_json::json!([]));
}

#[tokio::test]
async fn test_update_with_partial_body_clears_omitted_fields() {
    let app = create_test_app().await;

    let response = app
        .clone()
        .oneshot(request(
            "POST",
            "/api/todos",
            Some(serde_json::json!({"title": "T", "description": "D", "completed": true})),
        ))
        .await
        .unwrap();
    let id = response_body_to_json(response).await["id"].as_i64().unwrap();

    let response = app
        .oneshot(request(
            "PUT",
            &format!("/api/todos/{id}"),
            Some(serde_json::json!({"title": "Only title"})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response_body_to_json(response).await,
        serde_json::json!({
            "id": id,
            "title": "Only title",
            "description": null,
            "completed": false
        })
    );
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let app = create_test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/todos")
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}
