//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod conferences;
#[allow(clippy::missing_errors_doc)]
pub mod reports;
#[allow(clippy::missing_errors_doc)]
pub mod users;

use axum::Router;
use axum::routing::{get, post};

use confhub_app::ports::{ConferenceRepository, PasswordHasher, ReportRepository, UserRepository};
use confhub_domain::error::ValidationError;

use crate::error::ApiError;
use crate::state::AppState;

/// Response for a route whose only path segment was left empty.
async fn empty_segment(field: &'static str) -> ApiError {
    ValidationError::EmptyField(field).into()
}

/// Build the API sub-router.
pub fn routes<UR, PH, RR, CR>() -> Router<AppState<UR, PH, RR, CR>>
where
    UR: UserRepository + Send + Sync + 'static,
    PH: PasswordHasher + Send + Sync + 'static,
    RR: ReportRepository + Send + Sync + 'static,
    CR: ConferenceRepository + Send + Sync + 'static,
{
    Router::new()
        // Users
        .route("/user/create", post(users::create::<UR, PH, RR, CR>))
        .route(
            "/user/findLogin/{login}",
            get(users::find_by_login::<UR, PH, RR, CR>),
        )
        .route("/user/findLogin/", get(|| empty_segment("login")))
        .route("/user/findMask", post(users::find_by_mask::<UR, PH, RR, CR>))
        // Reports
        .route("/report/create", post(reports::create::<UR, PH, RR, CR>))
        .route("/report/getAll", get(reports::list::<UR, PH, RR, CR>))
        // Conferences
        .route(
            "/conference/create/{name}",
            post(conferences::create::<UR, PH, RR, CR>),
        )
        .route(
            "/conference/create/",
            post(|| empty_segment("conference name")),
        )
        .route(
            "/conference/addReport/{conference_id}/{report_id}/",
            post(conferences::add_report::<UR, PH, RR, CR>),
        )
        .route(
            "/conference/addReport/{conference_id}/{report_id}",
            post(conferences::add_report::<UR, PH, RR, CR>),
        )
        .route(
            "/conference/getAllReports/{conference_id}",
            get(conferences::list_reports::<UR, PH, RR, CR>),
        )
        .route(
            "/conference/getAllReports/",
            get(|| empty_segment("conference_id")),
        )
}
