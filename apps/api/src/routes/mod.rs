pub mod dashboard;
pub mod health;
pub mod settings;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::assistant;
use crate::auth::handlers as auth;
use crate::matching::handlers as matching;
use crate::records::{handlers as records, import};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Sessions
        .route("/api/v1/auth/login", post(auth::handle_login))
        .route("/api/v1/auth/logout", post(auth::handle_logout))
        .route("/api/v1/auth/me", get(auth::handle_me))
        // Records
        .route(
            "/api/v1/resumes",
            get(records::handle_list_resumes).post(records::handle_create_resume),
        )
        .route(
            "/api/v1/resumes/:id",
            get(records::handle_get_resume)
                .put(records::handle_update_resume)
                .delete(records::handle_delete_resume),
        )
        .route(
            "/api/v1/jobs",
            get(records::handle_list_jobs).post(records::handle_create_job),
        )
        .route(
            "/api/v1/jobs/:id",
            get(records::handle_get_job)
                .put(records::handle_update_job)
                .delete(records::handle_delete_job),
        )
        .route(
            "/api/v1/users",
            get(records::handle_list_users).post(records::handle_create_user),
        )
        .route(
            "/api/v1/users/:id",
            put(records::handle_update_user).delete(records::handle_delete_user),
        )
        .route("/api/v1/import", post(import::handle_import))
        // Matching
        .route("/api/v1/matches", get(matching::handle_match_table))
        .route("/api/v1/matches/pair", get(matching::handle_match_pair))
        .route("/api/v1/matches/options", get(matching::handle_match_options))
        // Dashboard, settings, help
        .route("/api/v1/dashboard", get(dashboard::handle_dashboard))
        .route(
            "/api/v1/settings/theme",
            get(settings::handle_get_theme).put(settings::handle_set_theme),
        )
        .route("/api/v1/settings/reset", post(settings::handle_reset))
        .route("/api/v1/assistant", post(assistant::handle_assistant))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::auth::SessionStore;
    use crate::matching::KeywordOverlapScorer;
    use crate::storage::LocalStore;

    async fn test_app() -> Router {
        let store = LocalStore::in_memory();
        store.seed_demo_data().await.unwrap();
        build_router(AppState {
            store: Arc::new(store),
            sessions: Arc::new(SessionStore::new(chrono::Duration::minutes(60))),
            scorer: Arc::new(KeywordOverlapScorer),
        })
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&json).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn login(app: &Router, username: &str, password: &str) -> String {
        let (status, body) = send(
            app,
            Method::POST,
            "/api/v1/auth/login",
            None,
            Some(json!({"username": username, "password": password})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        body["token"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_health() {
        let app = test_app().await;
        let (status, body) = send(&app, Method::GET, "/health", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_login_rejects_bad_credentials() {
        let app = test_app().await;
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/auth/login",
            None,
            Some(json!({"username": "hr", "password": "wrong"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["message"], "Invalid username or password");
    }

    #[tokio::test]
    async fn test_records_require_session() {
        let app = test_app().await;
        let (status, body) = send(&app, Method::GET, "/api/v1/resumes", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "UNAUTHORIZED");
    }

    #[tokio::test]
    async fn test_match_table_over_demo_data() {
        let app = test_app().await;
        let token = login(&app, "hr", "hr123").await;

        let (status, body) = send(&app, Method::GET, "/api/v1/matches", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["scorer_backend"], "keyword");

        let rows = body["rows"].as_array().unwrap();
        let ranked: Vec<(u64, u64, u64)> = rows
            .iter()
            .map(|r| {
                (
                    r["resume_id"].as_u64().unwrap(),
                    r["job_id"].as_u64().unwrap(),
                    r["score"].as_u64().unwrap(),
                )
            })
            .collect();
        assert_eq!(ranked, vec![(1, 1, 62), (2, 2, 56), (2, 1, 24), (1, 2, 22)]);
        assert_eq!(rows[0]["resume_name"], "Praveen Kumar");
        assert_eq!(rows[0]["job_location"], "Jaipur");
    }

    #[tokio::test]
    async fn test_match_pair_and_not_found() {
        let app = test_app().await;
        let token = login(&app, "hr", "hr123").await;

        let (status, body) = send(
            &app,
            Method::GET,
            "/api/v1/matches/pair?resume_id=2&job_id=2",
            Some(&token),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], 56);
        assert_eq!(body["breakdown"]["score"], 56);
        assert_eq!(body["resume"]["name"], "Amit Sharma");

        let (status, body) = send(
            &app,
            Method::GET,
            "/api/v1/matches/pair?resume_id=9&job_id=1",
            Some(&token),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body["error"]["message"],
            "Please ensure at least one resume and job exist."
        );
    }

    #[tokio::test]
    async fn test_scores_follow_record_edits() {
        let app = test_app().await;
        let token = login(&app, "hr", "hr123").await;

        let (status, _) = send(
            &app,
            Method::PUT,
            "/api/v1/jobs/2",
            Some(&token),
            Some(json!({"title": "Junior Accountant", "dept": "Finance", "skills": "Tally"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        // junior, accountant, tally: all present in resume 2
        let (_, body) = send(
            &app,
            Method::GET,
            "/api/v1/matches/pair?resume_id=2&job_id=2",
            Some(&token),
            None,
        )
        .await;
        assert_eq!(body["score"], 100);
    }

    #[tokio::test]
    async fn test_create_resume_validation_and_id() {
        let app = test_app().await;
        let token = login(&app, "hr", "hr123").await;

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/v1/resumes",
            Some(&token),
            Some(json!({"name": "  ", "skills": "SQL"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/resumes",
            Some(&token),
            Some(json!({"name": "Neha Jain", "skills": "SQL, Python"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["id"], 3);
        assert_eq!(body["summary"], "");

        let (status, _) = send(&app, Method::DELETE, "/api/v1/resumes/3", Some(&token), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = send(&app, Method::GET, "/api/v1/resumes/3", Some(&token), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_user_management_is_admin_only() {
        let app = test_app().await;
        let hr = login(&app, "hr", "hr123").await;
        let (status, _) = send(&app, Method::GET, "/api/v1/users", Some(&hr), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let admin = login(&app, "admin", "admin123").await;
        let (status, body) = send(&app, Method::GET, "/api/v1/users", Some(&admin), None).await;
        assert_eq!(status, StatusCode::OK);
        let users = body.as_array().unwrap();
        assert_eq!(users.len(), 2);
        assert!(users[0].get("password").is_none());
    }

    #[tokio::test]
    async fn test_admin_cannot_delete_self_but_can_delete_others() {
        let app = test_app().await;
        let hr = login(&app, "hr", "hr123").await;
        let admin = login(&app, "admin", "admin123").await;

        let (status, _) = send(&app, Method::DELETE, "/api/v1/users/1", Some(&admin), None).await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, _) = send(&app, Method::DELETE, "/api/v1/users/2", Some(&admin), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        // The deleted user's session is gone.
        let (status, _) = send(&app, Method::GET, "/api/v1/auth/me", Some(&hr), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected() {
        let app = test_app().await;
        let admin = login(&app, "admin", "admin123").await;
        let (status, _) = send(
            &app,
            Method::POST,
            "/api/v1/users",
            Some(&admin),
            Some(json!({"name": "Other", "username": "hr", "password": "x", "role": "HR"})),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_renaming_onto_taken_username_rejected() {
        let app = test_app().await;
        let admin = login(&app, "admin", "admin123").await;
        let (status, body) = send(
            &app,
            Method::PUT,
            "/api/v1/users/2",
            Some(&admin),
            Some(json!({"name": "HR", "username": "admin", "password": "hr123", "role": "HR"})),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["message"], "Username 'admin' is already in use.");

        // Keeping one's own username is not a clash.
        let (status, _) = send(
            &app,
            Method::PUT,
            "/api/v1/users/2",
            Some(&admin),
            Some(json!({"name": "HR Desk", "username": "hr", "password": "hr123", "role": "HR"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_reset_restores_data_and_logs_out() {
        let app = test_app().await;
        let token = login(&app, "hr", "hr123").await;
        send(&app, Method::DELETE, "/api/v1/jobs/1", Some(&token), None).await;

        let (status, _) = send(&app, Method::POST, "/api/v1/settings/reset", Some(&token), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(&app, Method::GET, "/api/v1/jobs", Some(&token), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let token = login(&app, "hr", "hr123").await;
        let (_, body) = send(&app, Method::GET, "/api/v1/dashboard", Some(&token), None).await;
        assert_eq!(body["job_count"], 2);
        assert_eq!(body["activity"][1], "Demo: 2 job descriptions configured.");
    }

    #[tokio::test]
    async fn test_theme_round_trip_without_session() {
        let app = test_app().await;
        let (_, body) = send(&app, Method::GET, "/api/v1/settings/theme", None, None).await;
        assert_eq!(body["theme"], "light");

        let (status, body) = send(
            &app,
            Method::PUT,
            "/api/v1/settings/theme",
            None,
            Some(json!({"theme": "dark"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["theme"], "dark");
    }

    #[tokio::test]
    async fn test_match_options_labels() {
        let app = test_app().await;
        let token = login(&app, "hr", "hr123").await;
        let (_, body) = send(&app, Method::GET, "/api/v1/matches/options", Some(&token), None).await;
        assert_eq!(body["resumes"][0]["label"], "Praveen Kumar – Junior Data Analyst");
        assert_eq!(body["jobs"][1]["label"], "Junior Accountant – Jaipur");
    }

    #[tokio::test]
    async fn test_assistant_reply() {
        let app = test_app().await;
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/assistant",
            None,
            Some(json!({"message": "how does matching work"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["reply"].as_str().unwrap().contains("overlapping keywords"));
    }
}
