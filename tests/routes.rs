mod common;

use std::sync::Arc;

use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use serde_json::{Value, json};

use school_dashboard::cache::{SessionCache, create_session_cache};
use school_dashboard::config::CacheConfig;
use school_dashboard::models::AppStartTime;
use school_dashboard::models::users::entities::UserRole;
use school_dashboard::models::users::requests::CreateUserRequest;
use school_dashboard::routes;
use school_dashboard::services::AuthService;
use school_dashboard::storage::Storage;
use school_dashboard::utils::{json_error_handler, path_error_handler};

use common::{gradebook_service, memory_storage, seed_school};

const PASSWORD: &str = "Blackboard42";

async fn create_user(storage: &Arc<dyn Storage>, username: &str, role: UserRole) {
    AuthService::new(storage.clone())
        .create_user(CreateUserRequest {
            username: username.to_string(),
            email: format!("{username}@school.test"),
            password: PASSWORD.to_string(),
            role,
            display_name: None,
        })
        .await
        .expect("create user");
}

fn session_cache() -> Arc<dyn SessionCache> {
    create_session_cache(&CacheConfig {
        default_ttl: 60,
        max_capacity: 100,
    })
}

macro_rules! dashboard_app {
    ($storage:expr) => {
        test::init_service(
            App::new()
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .app_data(web::PathConfig::default().error_handler(path_error_handler))
                .app_data(web::Data::new($storage.clone()))
                .app_data(web::Data::new(session_cache()))
                .app_data(web::Data::new(gradebook_service()))
                .app_data(web::Data::new(AppStartTime {
                    start_datetime: chrono::Utc::now(),
                }))
                .configure(routes::configure_routes),
        )
        .await
    };
}

macro_rules! login {
    ($app:expr, $username:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/v1/rpc/auth.login")
            .set_json(json!({ "username": $username, "password": PASSWORD }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&$app, req).await;
        assert_eq!(body["code"], "OK", "login failed: {body}");
        body["data"]["access_token"]
            .as_str()
            .expect("access token")
            .to_string()
    }};
}

fn rpc(procedure: &str, token: Option<&str>, body: Value) -> test::TestRequest {
    let mut req = test::TestRequest::post()
        .uri(&format!("/api/v1/rpc/{procedure}"))
        .set_json(body);
    if let Some(token) = token {
        req = req.insert_header((header::AUTHORIZATION, format!("Bearer {token}")));
    }
    req
}

#[actix_web::test]
async fn procedures_require_authentication_and_roles() {
    let storage = memory_storage().await;
    let school = seed_school(storage.as_ref()).await;
    create_user(&storage, "principal", UserRole::Admin).await;
    create_user(&storage, "ada", UserRole::Teacher).await;
    let app = dashboard_app!(storage);

    let create_body = json!({
        "name": "8B",
        "capacity": 25,
        "class_group_id": school.group.id,
        "campus_id": school.campus.id,
    });

    let req = rpc("class.create", None, create_body.clone()).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let teacher_token = login!(app, "ada");
    let req = rpc("class.create", Some(&teacher_token), create_body.clone()).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    // 读取对任何已登录用户开放
    let req = rpc("class.list", Some(&teacher_token), json!({})).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"].as_array().map(Vec::len), Some(1));

    let admin_token = login!(app, "principal");
    let req = rpc("class.create", Some(&admin_token), create_body).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "OK");
    assert_eq!(body["data"]["name"], "8B");
    assert_eq!(body["data"]["status"], "active");

    let req = rpc("auth.me", Some(&admin_token), json!({})).to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["username"], "principal");
    assert_eq!(body["data"]["role"], "admin");
}

#[actix_web::test]
async fn failures_use_categorized_error_envelopes() {
    let storage = memory_storage().await;
    seed_school(storage.as_ref()).await;
    create_user(&storage, "principal", UserRole::Admin).await;
    let app = dashboard_app!(storage);

    let req = test::TestRequest::post()
        .uri("/api/v1/rpc/auth.login")
        .set_json(json!({ "username": "principal", "password": "wrong" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let token = login!(app, "principal");

    let req = rpc("class.delete", Some(&token), json!({ "id": 9999 })).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "NOT_FOUND");
    assert!(body.get("data").is_none());

    let req = rpc("class.get", Some(&token), json!({ "id": "seven" })).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "VALIDATION");

    let body = json!({ "name": "Duplicate", "code": "MATH" });
    let req = rpc("subject.create", Some(&token), body).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[actix_web::test]
async fn gradebook_procedure_and_pages_render_states() {
    let storage = memory_storage().await;
    let school = seed_school(storage.as_ref()).await;
    create_user(&storage, "ada", UserRole::Teacher).await;
    let app = dashboard_app!(storage);
    let token = login!(app, "ada");

    let body = json!({ "class_id": school.class.id });
    let req = rpc("gradebook.getByClass", Some(&token), body).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["initialized"], true);
    assert_eq!(body["data"]["gradebook"]["class_id"], school.class.id);

    let req = test::TestRequest::get()
        .uri(&format!("/dashboard/teacher/gradebook/{}", school.class.id))
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["state"], "success");
    assert_eq!(body["data"]["class"]["name"], "7A");

    let req = test::TestRequest::get()
        .uri(&format!("/dashboard/principal/class/{}", school.class.id))
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["state"], "not_found");

    let req = test::TestRequest::get()
        .uri("/dashboard/teacher/teacher/4242/edit")
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get()
        .uri(&format!("/dashboard/teacher/class/{}", school.class.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn health_reports_database_status() {
    let storage = memory_storage().await;
    let app = dashboard_app!(storage);

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["code"], "OK");
    assert_eq!(body["data"]["status"], "ok");
    assert_eq!(body["data"]["database"], "ok");
}
