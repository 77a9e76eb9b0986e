//! JSON handlers for reports.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use confhub_app::ports::{ConferenceRepository, PasswordHasher, ReportRepository, UserRepository};
use confhub_domain::id::UserId;
use confhub_domain::report::NewReport;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a report.
///
/// Missing fields decode as an empty name and owner `0`.
#[derive(Default, Deserialize)]
#[serde(default)]
pub struct CreateReportRequest {
    pub name: String,
    pub user_id: i64,
}

impl From<CreateReportRequest> for NewReport {
    fn from(req: CreateReportRequest) -> Self {
        Self {
            name: req.name,
            user_id: UserId::new(req.user_id),
        }
    }
}

/// Names of every stored report.
#[derive(Debug, Serialize, Deserialize)]
pub struct FoundReports {
    #[serde(rename = "found reports(s)")]
    pub reports: Vec<String>,
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Ok,
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok => Json("report has been created").into_response(),
        }
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<FoundReports>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /report/create`
pub async fn create<UR, PH, RR, CR>(
    State(state): State<AppState<UR, PH, RR, CR>>,
    body: Bytes,
) -> Result<CreateResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PH: PasswordHasher + Send + Sync + 'static,
    RR: ReportRepository + Send + Sync + 'static,
    CR: ConferenceRepository + Send + Sync + 'static,
{
    let req: CreateReportRequest = serde_json::from_slice(&body)?;
    state.report_service.create_report(req.into()).await?;
    Ok(CreateResponse::Ok)
}

/// `GET /report/getAll`
pub async fn list<UR, PH, RR, CR>(
    State(state): State<AppState<UR, PH, RR, CR>>,
) -> Result<ListResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PH: PasswordHasher + Send + Sync + 'static,
    RR: ReportRepository + Send + Sync + 'static,
    CR: ConferenceRepository + Send + Sync + 'static,
{
    let reports = state.report_service.list_report_names().await?;
    Ok(ListResponse::Ok(Json(FoundReports { reports })))
}
