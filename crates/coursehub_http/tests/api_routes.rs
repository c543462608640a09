//! HTTP-level tests for the catalog routes.
//!
//! Each test builds the router over its own temporary SQLite file and drives
//! it in-process with `tower::ServiceExt::oneshot`.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use coursehub_http::{build_router, AppState, ServerConfig};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

struct TestApp {
    router: Router,
    _dir: TempDir,
}

impl TestApp {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let config = ServerConfig::for_database(dir.path().join("catalog.sqlite3")).unwrap();
        Self {
            router: build_router(AppState::new(config)),
            _dir: dir,
        }
    }

    async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| json!({ "raw": String::from_utf8_lossy(&bytes).to_string() }));
        (status, json)
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send("GET", uri, None).await
    }

    async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send("POST", uri, Some(body)).await
    }

    async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send("PUT", uri, Some(body)).await
    }

    async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send("DELETE", uri, None).await
    }

    async fn create(&self, uri: &str, body: Value) -> i64 {
        let (status, body) = self.post(uri, body).await;
        assert_eq!(status, StatusCode::CREATED, "unexpected body: {body}");
        body["id"].as_i64().unwrap()
    }

    /// Instructor, course, one module and one lesson, all drafts.
    async fn seed_course(&self) -> (i64, i64, i64, i64) {
        let instructor = self
            .create(
                "/api/instructors",
                json!({"nombre": "Ana", "email": "ana@x.com"}),
            )
            .await;
        let course = self
            .create(
                "/api/courses",
                json!({"titulo": "Intro", "instructor_id": instructor}),
            )
            .await;
        let module = self
            .create(
                &format!("/api/courses/{course}/modules"),
                json!({"titulo": "Basics"}),
            )
            .await;
        let lesson = self
            .create(
                &format!("/api/modules/{module}/lessons"),
                json!({"titulo": "Hello", "contenido": "# hi"}),
            )
            .await;
        (instructor, course, module, lesson)
    }
}

#[tokio::test]
async fn health_reports_pong_and_version() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "pong");
    assert!(body["version"].as_str().is_some());
}

#[tokio::test]
async fn publish_then_edit_scenario() {
    let app = TestApp::new();

    let (status, body) = app
        .post(
            "/api/instructors",
            json!({"nombre": "Ana", "email": "ana@x.com"}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);

    let (status, body) = app
        .post("/api/courses", json!({"titulo": "Intro", "instructor_id": 1}))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);

    let (status, _) = app.post("/api/courses/1/publish", json!({})).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app.put("/api/courses/1", json!({"titulo": "X"})).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(body["error"].as_str().unwrap().contains("published"));

    let (_, body) = app.get("/api/courses/1").await;
    assert_eq!(body["titulo"], "Intro");
    assert_eq!(body["is_published"], true);
}

#[tokio::test]
async fn instructor_crud_round() {
    let app = TestApp::new();
    let id = app
        .create(
            "/api/instructors",
            json!({"name": "Ana", "email": "ana@x.com"}),
        )
        .await;

    let (status, body) = app.get(&format!("/api/instructors/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": id, "nombre": "Ana", "email": "ana@x.com"}));

    let (status, _) = app
        .put(
            &format!("/api/instructors/{id}"),
            json!({"email": "ana@new.com"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = app.get("/api/instructors").await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["email"], "ana@new.com");
    assert_eq!(body[0]["nombre"], "Ana");

    let (status, _) = app.delete(&format!("/api/instructors/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    let (status, body) = app.get(&format!("/api/instructors/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn instructor_validation_and_conflicts() {
    let app = TestApp::new();
    let id = app
        .create(
            "/api/instructors",
            json!({"nombre": "Ana", "email": "ana@x.com"}),
        )
        .await;

    let (status, _) = app
        .post("/api/instructors", json!({"nombre": "Ana"}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .post(
            "/api/instructors",
            json!({"nombre": "Other", "email": "ana@x.com"}),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = app
        .put(&format!("/api/instructors/{id}"), json!({}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .put("/api/instructors/999", json!({"nombre": "Ghost"}))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.delete("/api/instructors/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn instructor_with_published_course_cannot_be_deleted() {
    let app = TestApp::new();
    let (instructor, course, _, _) = app.seed_course().await;
    let draft = app
        .create(
            "/api/courses",
            json!({"titulo": "Draft", "instructor_id": instructor}),
        )
        .await;

    let (status, _) = app.post(&format!("/api/courses/{course}/publish"), json!({})).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app.delete(&format!("/api/instructors/{instructor}")).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].as_str().unwrap().contains("1 published course"));

    let (_, body) = app.get(&format!("/api/courses/{draft}")).await;
    assert_eq!(body["instructor_id"], instructor);
}

#[tokio::test]
async fn deleting_instructor_detaches_draft_courses() {
    let app = TestApp::new();
    let (instructor, course, _, _) = app.seed_course().await;

    let (status, _) = app.delete(&format!("/api/instructors/{instructor}")).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app.get(&format!("/api/courses/{course}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["instructor_id"], Value::Null);
    assert_eq!(body["instructor_nombre"], Value::Null);
}

#[tokio::test]
async fn course_detail_is_nested() {
    let app = TestApp::new();
    let (_, course, module, lesson) = app.seed_course().await;

    let (status, body) = app.get(&format!("/api/courses/{course}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["instructor_nombre"], "Ana");
    assert_eq!(body["modulos"][0]["id"], module);
    assert_eq!(body["modulos"][0]["lecciones"][0]["id"], lesson);
    assert_eq!(body["modulos"][0]["lecciones"][0]["contenido"], "# hi");

    let (_, list) = app.get("/api/courses").await;
    assert_eq!(list[0]["titulo"], "Intro");
    assert!(list[0].get("modulos").is_none());

    let (_, modules) = app.get(&format!("/api/courses/{course}/modules")).await;
    assert_eq!(modules[0]["curso_id"], course);
    let (_, lessons) = app.get(&format!("/api/modules/{module}/lessons")).await;
    assert_eq!(lessons[0]["modulo_id"], module);
}

#[tokio::test]
async fn course_with_unknown_instructor_is_not_found() {
    let app = TestApp::new();

    let (status, body) = app
        .post("/api/courses", json!({"titulo": "Orphan", "instructor_id": 42}))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("instructor"));

    let (status, _) = app.post("/api/courses", json!({"titulo": "No owner"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = app
        .post("/api/courses", json!({"titulo": "Zero owner", "instructor_id": 0}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("instructor_id"));
}

#[tokio::test]
async fn unparsable_or_oversized_ids_are_not_found() {
    let app = TestApp::new();
    let (_, course_id, module_id, lesson_id) = app.seed_course().await;

    for uri in [
        "/api/instructors/abc",
        "/api/courses/99999999999999999999",
        "/api/modules/1.5",
        "/api/lessons/x",
    ] {
        let (status, body) = app.get(uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "uri {uri}");
        assert!(body["error"].is_string(), "uri {uri}");
    }

    let (status, body) = app.get(&format!("/api/courses/{course_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], course_id);
    let (status, _) = app.get(&format!("/api/modules/{module_id}")).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = app.get(&format!("/api/lessons/{lesson_id}")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn deleting_course_cascades() {
    let app = TestApp::new();
    let (_, course, module, lesson) = app.seed_course().await;

    let (status, _) = app.delete(&format!("/api/courses/{course}")).await;
    assert_eq!(status, StatusCode::OK);

    for uri in [
        format!("/api/courses/{course}"),
        format!("/api/modules/{module}"),
        format!("/api/lessons/{lesson}"),
    ] {
        let (status, _) = app.get(&uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri} should be gone");
    }
}

#[tokio::test]
async fn published_course_locks_modules_and_lessons() {
    let app = TestApp::new();
    let (_, course, module, lesson) = app.seed_course().await;
    app.post(&format!("/api/courses/{course}/publish"), json!({}))
        .await;

    let attempts = [
        ("DELETE", format!("/api/courses/{course}"), None),
        (
            "POST",
            format!("/api/courses/{course}/modules"),
            Some(json!({"titulo": "More"})),
        ),
        (
            "PUT",
            format!("/api/modules/{module}"),
            Some(json!({"titulo": "Renamed"})),
        ),
        ("DELETE", format!("/api/modules/{module}"), None),
        (
            "POST",
            format!("/api/modules/{module}/lessons"),
            Some(json!({"titulo": "More"})),
        ),
        (
            "PUT",
            format!("/api/lessons/{lesson}"),
            Some(json!({"titulo": "Changed"})),
        ),
        ("DELETE", format!("/api/lessons/{lesson}"), None),
    ];
    for (method, uri, body) in attempts {
        let (status, _) = app.send(method, &uri, body).await;
        assert_eq!(status, StatusCode::FORBIDDEN, "{method} {uri}");
    }

    let (status, _) = app.post(&format!("/api/courses/{course}/publish"), json!({})).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = app.get(&format!("/api/lessons/{lesson}")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn draft_modules_and_lessons_are_editable() {
    let app = TestApp::new();
    let (_, _, module, lesson) = app.seed_course().await;

    let (status, _) = app
        .put(&format!("/api/modules/{module}"), json!({"titulo": "Renamed"}))
        .await;
    assert_eq!(status, StatusCode::OK);
    let (_, body) = app.get(&format!("/api/modules/{module}")).await;
    assert_eq!(body["titulo"], "Renamed");
    assert_eq!(body["lecciones"][0]["id"], lesson);

    let (status, _) = app
        .put(&format!("/api/lessons/{lesson}"), json!({"titulo": "Hi"}))
        .await;
    assert_eq!(status, StatusCode::OK);
    let (_, body) = app.get(&format!("/api/lessons/{lesson}")).await;
    assert_eq!(body["titulo"], "Hi");
    assert_eq!(body["contenido"], Value::Null);

    let (status, _) = app.delete(&format!("/api/lessons/{lesson}")).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = app.delete(&format!("/api/modules/{module}")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn missing_targets_are_not_found() {
    let app = TestApp::new();

    let (status, _) = app.post("/api/courses/9/publish", json!({})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = app
        .post("/api/courses/9/modules", json!({"titulo": "Lost"}))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = app
        .post("/api/modules/9/lessons", json!({"titulo": "Lost"}))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = app
        .put("/api/lessons/9", json!({"titulo": "Lost"}))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = app.delete("/api/lessons/9").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_requests_get_json_errors() {
    let app = TestApp::new();

    let request = Request::builder()
        .method("POST")
        .uri("/api/instructors")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let (status, body) = app.get("/api/courses/abc").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());

    let (status, body) = app.get("/api/nowhere").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("/api/nowhere"));
}
