//! Shared application state for axum handlers.

use std::sync::Arc;

use confhub_app::ports::{ConferenceRepository, PasswordHasher, ReportRepository, UserRepository};
use confhub_app::services::conference_service::ConferenceService;
use confhub_app::services::report_service::ReportService;
use confhub_app::services::user_service::UserService;

/// Application state shared across all axum handlers.
///
/// Generic over the user repository, password hasher, report repository and
/// conference repository. `Clone` only clones the `Arc` wrappers, so the
/// services themselves need not be `Clone`.
pub struct AppState<UR, PH, RR, CR> {
    /// User registration and lookups.
    pub user_service: Arc<UserService<UR, PH>>,
    /// Report creation and listing.
    pub report_service: Arc<ReportService<RR>>,
    /// Conference creation and report association.
    pub conference_service: Arc<ConferenceService<CR, RR>>,
}

impl<UR, PH, RR, CR> Clone for AppState<UR, PH, RR, CR> {
    fn clone(&self) -> Self {
        Self {
            user_service: Arc::clone(&self.user_service),
            report_service: Arc::clone(&self.report_service),
            conference_service: Arc::clone(&self.conference_service),
        }
    }
}

impl<UR, PH, RR, CR> AppState<UR, PH, RR, CR>
where
    UR: UserRepository + Send + Sync + 'static,
    PH: PasswordHasher + Send + Sync + 'static,
    RR: ReportRepository + Send + Sync + 'static,
    CR: ConferenceRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        user_service: UserService<UR, PH>,
        report_service: ReportService<RR>,
        conference_service: ConferenceService<CR, RR>,
    ) -> Self {
        Self {
            user_service: Arc::new(user_service),
            report_service: Arc::new(report_service),
            conference_service: Arc::new(conference_service),
        }
    }
}
