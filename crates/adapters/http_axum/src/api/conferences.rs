//! JSON handlers for conferences.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use confhub_app::ports::{ConferenceRepository, PasswordHasher, ReportRepository, UserRepository};
use confhub_domain::id::{ConferenceId, ReportId};

use crate::error::ApiError;
use crate::state::AppState;

/// Names of the reports attached to one conference.
#[derive(Debug, Serialize, Deserialize)]
pub struct FoundConferenceReports {
    #[serde(rename = "found reports(s) in conference")]
    pub reports: Vec<String>,
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Ok,
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok => Json("conference has been created").into_response(),
        }
    }
}

/// Possible responses from the add-report endpoint.
pub enum AddReportResponse {
    Ok,
}

impl IntoResponse for AddReportResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok => Json("report has been added to conference").into_response(),
        }
    }
}

/// Possible responses from the list endpoint.
pub enum ListReportsResponse {
    Ok(Json<FoundConferenceReports>),
}

impl IntoResponse for ListReportsResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /conference/create/{name}`
pub async fn create<UR, PH, RR, CR>(
    State(state): State<AppState<UR, PH, RR, CR>>,
    Path(name): Path<String>,
) -> Result<CreateResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PH: PasswordHasher + Send + Sync + 'static,
    RR: ReportRepository + Send + Sync + 'static,
    CR: ConferenceRepository + Send + Sync + 'static,
{
    state.conference_service.create_conference(&name).await?;
    Ok(CreateResponse::Ok)
}

/// `POST /conference/addReport/{conference_id}/{report_id}/`
pub async fn add_report<UR, PH, RR, CR>(
    State(state): State<AppState<UR, PH, RR, CR>>,
    Path((conference_id, report_id)): Path<(String, String)>,
) -> Result<AddReportResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PH: PasswordHasher + Send + Sync + 'static,
    RR: ReportRepository + Send + Sync + 'static,
    CR: ConferenceRepository + Send + Sync + 'static,
{
    let conference_id = ConferenceId::parse_param("conference_id", &conference_id)?;
    let report_id = ReportId::parse_param("report_id", &report_id)?;
    state
        .conference_service
        .add_report(conference_id, report_id)
        .await?;
    Ok(AddReportResponse::Ok)
}

/// `GET /conference/getAllReports/{conference_id}`
pub async fn list_reports<UR, PH, RR, CR>(
    State(state): State<AppState<UR, PH, RR, CR>>,
    Path(conference_id): Path<String>,
) -> Result<ListReportsResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PH: PasswordHasher + Send + Sync + 'static,
    RR: ReportRepository + Send + Sync + 'static,
    CR: ConferenceRepository + Send + Sync + 'static,
{
    let conference_id = ConferenceId::parse_param("conference_id", &conference_id)?;
    let reports = state
        .conference_service
        .list_report_names(conference_id)
        .await?;
    Ok(ListReportsResponse::Ok(Json(FoundConferenceReports {
        reports,
    })))
}
