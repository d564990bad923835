use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use mailgate_api::{create_api_routes, AppState};
use mailgate_application::use_cases::{
    AddDomainUseCase, EvaluateRegistrationUseCase, GetWhitelistUseCase, RemoveDomainUseCase,
};
use mailgate_infrastructure::repositories::SqliteWhitelistRepository;
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;
use tower::ServiceExt;

async fn create_test_db() -> sqlx::SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    sqlx::query(
        "CREATE TABLE whitelist_domains (
            domain     TEXT PRIMARY KEY NOT NULL,
            owner_id   INTEGER NOT NULL,
            created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
    )
    .execute(&pool)
    .await
    .unwrap();

    pool
}

fn build_app(pool: sqlx::SqlitePool, admin_api_key: Option<&str>) -> Router {
    let repo = Arc::new(SqliteWhitelistRepository::new(pool));
    let state = AppState {
        get_whitelist: Arc::new(GetWhitelistUseCase::new(repo.clone())),
        add_domain: Arc::new(AddDomainUseCase::new(repo.clone())),
        remove_domain: Arc::new(RemoveDomainUseCase::new(repo.clone())),
        evaluate_registration: Arc::new(EvaluateRegistrationUseCase::new(repo)),
        admin_api_key: admin_api_key.map(Arc::from),
    };
    create_api_routes(state)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_domain(domain: &str, owner_id: i64) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/whitelist")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({ "domain": domain, "owner_id": owner_id }).to_string(),
        ))
        .unwrap()
}

#[tokio::test]
async fn test_list_empty_whitelist() {
    let app = build_app(create_test_db().await, None);

    let response = app
        .oneshot(Request::builder().uri("/whitelist").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn test_add_domain_returns_created_entry() {
    let app = build_app(create_test_db().await, None);

    let response = app.oneshot(post_domain("Example.COM", 7)).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["domain"], "example.com");
    assert_eq!(body["owner_id"], 7);

    // YYYY-MM-DD HH:MM
    let created_at = body["created_at"].as_str().unwrap();
    assert_ne!(created_at, "unknown");
    assert_eq!(created_at.len(), 16);
}

#[tokio::test]
async fn test_add_dotless_domain_is_a_validation_error() {
    let app = build_app(create_test_db().await, None);

    let response = app.oneshot(post_domain("localhost", 1)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("dot"));
}

#[tokio::test]
async fn test_add_duplicate_domain_conflicts() {
    let app = build_app(create_test_db().await, None);

    let first = app
        .clone()
        .oneshot(post_domain("example.com", 1))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = app.oneshot(post_domain("EXAMPLE.com", 2)).await.unwrap();
    assert_eq!(second.status(), StatusCode::CONFLICT);
    let body = body_json(second).await;
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("already whitelisted"));
}

#[tokio::test]
async fn test_list_after_add() {
    let app = build_app(create_test_db().await, None);

    app.clone()
        .oneshot(post_domain("school.edu", 3))
        .await
        .unwrap();

    let response = app
        .oneshot(Request::builder().uri("/whitelist").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let body = body_json(response).await;
    let entries = body.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["domain"], "school.edu");
    assert_eq!(entries[0]["owner_id"], 3);
}

#[tokio::test]
async fn test_delete_domain_is_idempotent() {
    let app = build_app(create_test_db().await, None);

    app.clone()
        .oneshot(post_domain("example.com", 1))
        .await
        .unwrap();

    let delete = |app: Router| async move {
        app.oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/whitelist/example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
    };

    let first = delete(app.clone()).await;
    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(body_json(first).await, json!({ "removed": true }));

    let second = delete(app).await;
    assert_eq!(second.status(), StatusCode::OK);
    assert_eq!(body_json(second).await, json!({ "removed": false }));
}

#[tokio::test]
async fn test_management_routes_require_admin_key() {
    let app = build_app(create_test_db().await, Some("secret"));

    // The list view is privileged too.
    let list = app
        .clone()
        .oneshot(Request::builder().uri("/whitelist").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(list.status(), StatusCode::UNAUTHORIZED);

    let add = app.oneshot(post_domain("example.com", 1)).await.unwrap();
    assert_eq!(add.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_wrong_admin_key_is_rejected() {
    let app = build_app(create_test_db().await, Some("secret"));

    let mut request = post_domain("example.com", 1);
    request
        .headers_mut()
        .insert("X-Admin-Key", "guess".parse().unwrap());

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_correct_admin_key_is_accepted() {
    let app = build_app(create_test_db().await, Some("secret"));

    let mut request = post_domain("example.com", 1);
    request
        .headers_mut()
        .insert("X-Admin-Key", "secret".parse().unwrap());

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_health_endpoint_is_open() {
    let app = build_app(create_test_db().await, Some("secret"));

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "ok");
}
