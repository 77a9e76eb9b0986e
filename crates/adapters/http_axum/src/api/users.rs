//! JSON handlers for users.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use confhub_app::ports::{ConferenceRepository, PasswordHasher, ReportRepository, UserRepository};
use confhub_domain::user::{User, UserMask};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a user.
///
/// Missing fields decode as empty strings and are rejected by validation.
#[derive(Default, Deserialize)]
#[serde(default)]
pub struct CreateUserRequest {
    pub name: String,
    pub surname: String,
    pub login: String,
    pub password: String,
}

/// Users matching a lookup.
#[derive(Debug, Serialize, Deserialize)]
pub struct FoundUsers {
    #[serde(rename = "found user(s)")]
    pub users: Vec<UserMask>,
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Ok,
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok => Json("user has been created").into_response(),
        }
    }
}

/// Possible responses from the lookup endpoints.
pub enum FindResponse {
    Ok(Json<FoundUsers>),
}

impl IntoResponse for FindResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /user/create`
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
    let req: CreateUserRequest = serde_json::from_slice(&body)?;
    let user = User::builder()
        .name(req.name)
        .surname(req.surname)
        .login(req.login)
        .password(req.password)
        .build()?;
    state.user_service.register(user).await?;
    Ok(CreateResponse::Ok)
}

/// `GET /user/findLogin/{login}`
pub async fn find_by_login<UR, PH, RR, CR>(
    State(state): State<AppState<UR, PH, RR, CR>>,
    Path(login): Path<String>,
) -> Result<FindResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PH: PasswordHasher + Send + Sync + 'static,
    RR: ReportRepository + Send + Sync + 'static,
    CR: ConferenceRepository + Send + Sync + 'static,
{
    let users = state.user_service.find_by_login(&login).await?;
    Ok(FindResponse::Ok(Json(FoundUsers { users })))
}

/// `POST /user/findMask`
pub async fn find_by_mask<UR, PH, RR, CR>(
    State(state): State<AppState<UR, PH, RR, CR>>,
    body: Bytes,
) -> Result<FindResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PH: PasswordHasher + Send + Sync + 'static,
    RR: ReportRepository + Send + Sync + 'static,
    CR: ConferenceRepository + Send + Sync + 'static,
{
    let mask: UserMask = serde_json::from_slice(&body)?;
    let users = state.user_service.find_by_mask(&mask).await?;
    Ok(FindResponse::Ok(Json(FoundUsers { users })))
}
