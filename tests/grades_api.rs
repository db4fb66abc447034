//! 成绩 API 端到端测试
//!
//! 使用内存 SQLite，每个测试独立建库建表。

use std::sync::Arc;

use actix_web::{App, test, web};
use chrono::{DateTime, Utc};
use serde_json::{Value, json};
use uuid::Uuid;

use grade_record_service::routes::configure_grade_routes;
use grade_record_service::storage::{Storage, sea_orm_storage::SeaOrmStorage};
use grade_record_service::utils::json_error_handler;

// 内存 SQLite 按连接隔离，池固定为单连接
async fn make_storage() -> Arc<dyn Storage> {
    let storage = SeaOrmStorage::from_url("sqlite::memory:", 1, 5)
        .await
        .expect("in-memory storage should initialize");
    Arc::new(storage)
}

macro_rules! make_app {
    () => {{
        let storage = make_storage().await;
        test::init_service(
            App::new()
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .app_data(web::Data::new(storage.clone()))
                .configure(configure_grade_routes),
        )
        .await
    }};
}

fn sample_payload() -> Value {
    json!({
        "class_name": "Programación",
        "student_name": "Carlos Gómez",
        "score": 7
    })
}

macro_rules! create_grade {
    ($app:expr, $payload:expr) => {{
        let req = test::TestRequest::post()
            .uri("/grades")
            .set_json($payload)
            .to_request();
        let resp = test::call_service($app, req).await;
        assert_eq!(resp.status(), 201, "create should return 201");
        let body: Value = test::read_body_json(resp).await;
        body
    }};
}

fn parse_ts(value: &Value, field: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value[field].as_str().expect("timestamp field"))
        .expect("RFC 3339 timestamp")
        .with_timezone(&Utc)
}

#[actix_web::test]
async fn test_create_returns_full_record() {
    let app = make_app!();

    let before = Utc::now();
    let body = create_grade!(&app, sample_payload());

    assert!(Uuid::parse_str(body["id"].as_str().unwrap()).is_ok());
    assert_eq!(body["class_name"], "Programación");
    assert_eq!(body["student_name"], "Carlos Gómez");
    assert_eq!(body["score"], 7);

    let created_at = parse_ts(&body, "created_at");
    let updated_at = parse_ts(&body, "updated_at");
    assert_eq!(created_at, updated_at);
    assert!((created_at - before).num_seconds().abs() < 5);
}

#[actix_web::test]
async fn test_create_without_date_defaults_to_now() {
    let app = make_app!();

    let before = Utc::now();
    let body = create_grade!(&app, sample_payload());
    let date = parse_ts(&body, "date");

    assert!((date - before).num_seconds().abs() < 5);
}

#[actix_web::test]
async fn test_create_with_explicit_date() {
    let app = make_app!();

    let mut payload = sample_payload();
    payload["date"] = json!("2024-05-01T10:30:00Z");
    let body = create_grade!(&app, payload);

    let date = parse_ts(&body, "date");
    assert_eq!(date.to_rfc3339(), "2024-05-01T10:30:00+00:00");
}

#[actix_web::test]
async fn test_create_score_out_of_range_is_rejected() {
    let app = make_app!();

    let mut payload = sample_payload();
    payload["score"] = json!(11);
    let req = test::TestRequest::post()
        .uri("/grades")
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["field"], "score");
    assert_eq!(errors[0]["value"], 11);
}

#[actix_web::test]
async fn test_create_with_invalid_date_is_rejected() {
    let app = make_app!();

    let mut payload = sample_payload();
    payload["date"] = json!("yesterday");
    let req = test::TestRequest::post()
        .uri("/grades")
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["errors"][0]["field"], "date");
    assert_eq!(body["errors"][0]["value"], "yesterday");
}

#[actix_web::test]
async fn test_malformed_json_body_is_rejected() {
    let app = make_app!();

    let req = test::TestRequest::post()
        .uri("/grades")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_list_is_ordered_and_complete() {
    let app = make_app!();

    let req = test::TestRequest::get().uri("/grades").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!([]));

    let first = create_grade!(&app, sample_payload());
    // created_at 为毫秒精度，隔开两次创建
    std::thread::sleep(std::time::Duration::from_millis(5));
    let mut second_payload = sample_payload();
    second_payload["student_name"] = json!("Ana López");
    let second = create_grade!(&app, second_payload);

    let req = test::TestRequest::get().uri("/grades").to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 2);
    // 按创建顺序返回
    assert_eq!(items[0]["id"], first["id"]);
    assert_eq!(items[1]["id"], second["id"]);
}

#[actix_web::test]
async fn test_read_one_round_trips_created_record() {
    let app = make_app!();

    let created = create_grade!(&app, sample_payload());
    let id = created["id"].as_str().unwrap();

    let req = test::TestRequest::get()
        .uri(&format!("/grades/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let fetched: Value = test::read_body_json(resp).await;
    assert_eq!(fetched, created);
}

#[actix_web::test]
async fn test_read_one_unknown_id_is_404() {
    let app = make_app!();

    let id = Uuid::new_v4();
    let req = test::TestRequest::get()
        .uri(&format!("/grades/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains(&id.to_string()));
}

#[actix_web::test]
async fn test_non_uuid_path_segment_is_404() {
    let app = make_app!();

    let req = test::TestRequest::get().uri("/grades/42").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_partial_update_touches_only_present_fields() {
    let app = make_app!();

    let created = create_grade!(&app, sample_payload());
    let id = created["id"].as_str().unwrap();

    let req = test::TestRequest::put()
        .uri(&format!("/grades/{id}"))
        .set_json(json!({"score": 9}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["score"], 9);
    assert_eq!(updated["class_name"], created["class_name"]);
    assert_eq!(updated["student_name"], created["student_name"]);
    assert_eq!(updated["date"], created["date"]);
    assert_eq!(updated["created_at"], created["created_at"]);

    // updated_at 严格递增
    let previous = parse_ts(&created, "updated_at");
    let current = parse_ts(&updated, "updated_at");
    assert!(current > previous);
}

#[actix_web::test]
async fn test_update_with_explicit_null_is_rejected() {
    let app = make_app!();

    let created = create_grade!(&app, sample_payload());
    let id = created["id"].as_str().unwrap();

    let req = test::TestRequest::put()
        .uri(&format!("/grades/{id}"))
        .set_json(json!({"student_name": null}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["errors"][0]["field"], "student_name");

    // 记录保持不变
    let req = test::TestRequest::get()
        .uri(&format!("/grades/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let fetched: Value = test::read_body_json(resp).await;
    assert_eq!(fetched, created);
}

#[actix_web::test]
async fn test_update_unknown_id_is_404() {
    let app = make_app!();

    let id = Uuid::new_v4();
    let req = test::TestRequest::put()
        .uri(&format!("/grades/{id}"))
        .set_json(json!({"score": 5}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_update_unknown_id_with_invalid_body_is_404() {
    let app = make_app!();

    // 未知 id 优先于校验失败
    let id = Uuid::new_v4();
    let req = test::TestRequest::put()
        .uri(&format!("/grades/{id}"))
        .set_json(json!({"score": 99}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains(&id.to_string()));
}

#[actix_web::test]
async fn test_delete_then_read_one_is_404() {
    let app = make_app!();

    let created = create_grade!(&app, sample_payload());
    let id = created["id"].as_str().unwrap();

    let req = test::TestRequest::delete()
        .uri(&format!("/grades/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].as_str().unwrap().contains(id));

    let req = test::TestRequest::get()
        .uri(&format!("/grades/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_delete_unknown_id_is_404() {
    let app = make_app!();

    let id = Uuid::new_v4();
    let req = test::TestRequest::delete()
        .uri(&format!("/grades/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}
