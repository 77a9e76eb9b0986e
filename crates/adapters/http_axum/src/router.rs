//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use confhub_app::ports::{ConferenceRepository, PasswordHasher, ReportRepository, UserRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges the API routes with a `/health` check.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<UR, PH, RR, CR>(state: AppState<UR, PH, RR, CR>) -> Router
where
    UR: UserRepository + Send + Sync + 'static,
    PH: PasswordHasher + Send + Sync + 'static,
    RR: ReportRepository + Send + Sync + 'static,
    CR: ConferenceRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use confhub_app::services::conference_service::ConferenceService;
    use confhub_app::services::report_service::ReportService;
    use confhub_app::services::user_service::UserService;
    use confhub_domain::conference::{Conference, NewConference};
    use confhub_domain::error::ConfHubError;
    use confhub_domain::id::{ConferenceId, ReportId, UserId};
    use confhub_domain::report::NewReport;
    use confhub_domain::user::{NewUser, Password, PasswordHash, UserMask};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    struct StubUserRepo;
    struct StubHasher;
    struct StubReportRepo;
    struct StubConferenceRepo;

    impl UserRepository for StubUserRepo {
        async fn create(&self, _user: NewUser) -> Result<UserId, ConfHubError> {
            Ok(UserId::new(1))
        }
        async fn find_by_login(&self, login: &str) -> Result<Vec<UserMask>, ConfHubError> {
            if login == "alice" {
                Ok(vec![UserMask::new("Alice", "Smith")])
            } else {
                Ok(vec![])
            }
        }
        async fn find_by_mask(&self, _mask: &UserMask) -> Result<Vec<UserMask>, ConfHubError> {
            Ok(vec![])
        }
    }

    impl PasswordHasher for StubHasher {
        async fn hash(&self, _password: Password) -> Result<PasswordHash, ConfHubError> {
            Ok(PasswordHash::new("hashed"))
        }
    }

    impl ReportRepository for StubReportRepo {
        async fn create(&self, _report: NewReport) -> Result<ReportId, ConfHubError> {
            Ok(ReportId::new(1))
        }
        async fn list_names(&self) -> Result<Vec<String>, ConfHubError> {
            Err(ConfHubError::Query("no such table: reports".into()))
        }
        async fn list_names_by_conference(
            &self,
            _conference_id: ConferenceId,
        ) -> Result<Vec<String>, ConfHubError> {
            Ok(vec![])
        }
        async fn assign_conference(
            &self,
            _id: ReportId,
            _conference_id: ConferenceId,
        ) -> Result<bool, ConfHubError> {
            Ok(true)
        }
    }

    impl ConferenceRepository for StubConferenceRepo {
        async fn create(&self, _conference: NewConference) -> Result<ConferenceId, ConfHubError> {
            Ok(ConferenceId::new(1))
        }
        async fn get_by_id(&self, _id: ConferenceId) -> Result<Option<Conference>, ConfHubError> {
            Ok(None)
        }
    }

    fn test_app() -> Router {
        build(AppState::new(
            UserService::new(StubUserRepo, StubHasher),
            ReportService::new(StubReportRepo),
            ConferenceService::new(StubConferenceRepo, StubReportRepo),
        ))
    }

    async fn send(request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = test_app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, body)
    }

    fn post_json(uri: &str, body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_ack_when_user_created() {
        let (status, body) = send(post_json(
            "/user/create",
            r#"{"name":"Alice","surname":"Smith","login":"alice","password":"pw"}"#,
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "user has been created");
    }

    #[tokio::test]
    async fn should_reject_user_with_empty_field() {
        let (status, body) = send(post_json(
            "/user/create",
            r#"{"name":"Alice","surname":"","login":"alice","password":"pw"}"#,
        ))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["kind"], "validation");
        assert_eq!(body["error"], "surname must not be empty");
    }

    #[tokio::test]
    async fn should_reject_malformed_json_body() {
        let (status, body) = send(post_json("/user/create", "{not json")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["kind"], "validation");
    }

    #[tokio::test]
    async fn should_accept_report_with_missing_fields() {
        for payload in [r#"{"name":"Paper A"}"#, r#"{"user_id":1}"#] {
            let (status, body) = send(post_json("/report/create", payload)).await;

            assert_eq!(status, StatusCode::OK);
            assert_eq!(body, "report has been created");
        }
    }

    #[tokio::test]
    async fn should_decode_body_regardless_of_content_type() {
        for content_type in [None, Some("application/x-www-form-urlencoded")] {
            let mut request = Request::builder().method("POST").uri("/user/create");
            if let Some(value) = content_type {
                request = request.header("content-type", value);
            }
            let request = request
                .body(Body::from(
                    r#"{"name":"A","surname":"B","login":"c","password":"d"}"#,
                ))
                .unwrap();

            let (status, body) = send(request).await;

            assert_eq!(status, StatusCode::OK);
            assert_eq!(body, "user has been created");
        }
    }

    #[tokio::test]
    async fn should_reject_empty_body() {
        let (status, body) = send(
            Request::builder()
                .method("POST")
                .uri("/user/findMask")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["kind"], "validation");
    }

    #[tokio::test]
    async fn should_wrap_found_users_under_named_key() {
        let (status, body) = send(
            Request::builder()
                .uri("/user/findLogin/alice")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            serde_json::json!({"found user(s)": [{"name": "Alice", "surname": "Smith"}]})
        );
    }

    #[tokio::test]
    async fn should_return_not_found_when_login_unknown() {
        let (status, body) = send(
            Request::builder()
                .uri("/user/findLogin/bob")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["kind"], "not_found");
        assert_eq!(body["error"], "user not found");
    }

    #[tokio::test]
    async fn should_reject_empty_login_segment() {
        let (status, body) = send(
            Request::builder()
                .uri("/user/findLogin/")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "login must not be empty");
    }

    #[tokio::test]
    async fn should_return_not_found_when_mask_matches_nothing() {
        let (status, body) = send(post_json("/user/findMask", r#"{"name":"*","surname":"*"}"#)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "no users found with this mask");
    }

    #[tokio::test]
    async fn should_map_query_failure_to_server_error() {
        let (status, body) = send(
            Request::builder()
                .uri("/report/getAll")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["kind"], "query");
        assert_eq!(body["error"], "query failed");
    }

    #[tokio::test]
    async fn should_reject_non_numeric_conference_id() {
        let (status, body) = send(
            Request::builder()
                .uri("/conference/getAllReports/icse")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["kind"], "validation");
    }

    #[tokio::test]
    async fn should_return_not_found_when_associating_with_unknown_conference() {
        for uri in ["/conference/addReport/3/1/", "/conference/addReport/3/1"] {
            let (status, body) = send(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await;

            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(body["error"], "Conference 3 not found");
        }
    }

    #[tokio::test]
    async fn should_ack_when_conference_created() {
        let (status, body) = send(
            Request::builder()
                .method("POST")
                .uri("/conference/create/ICSE2025")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "conference has been created");
    }
}
