//! Storage port — repository traits for persistence.
//!
//! Every method maps onto a single SQL statement. Implementations acquire a
//! connection for the duration of the call and release it before returning.

use std::future::Future;

use confhub_domain::conference::{Conference, NewConference};
use confhub_domain::error::ConfHubError;
use confhub_domain::id::{ConferenceId, ReportId, UserId};
use confhub_domain::report::NewReport;
use confhub_domain::user::{NewUser, UserMask};

/// Repository for persisting and querying users.
pub trait UserRepository {
    /// Insert a new user and return its server-assigned id.
    fn create(&self, user: NewUser) -> impl Future<Output = Result<UserId, ConfHubError>> + Send;

    /// Find every user whose login equals `login`.
    fn find_by_login(
        &self,
        login: &str,
    ) -> impl Future<Output = Result<Vec<UserMask>, ConfHubError>> + Send;

    /// Find every user whose name and surname both match the masks in `mask`.
    fn find_by_mask(
        &self,
        mask: &UserMask,
    ) -> impl Future<Output = Result<Vec<UserMask>, ConfHubError>> + Send;
}

/// Repository for persisting and querying reports.
pub trait ReportRepository {
    /// Insert a new report without conference and return its id.
    fn create(
        &self,
        report: NewReport,
    ) -> impl Future<Output = Result<ReportId, ConfHubError>> + Send;

    /// Names of all reports.
    fn list_names(&self) -> impl Future<Output = Result<Vec<String>, ConfHubError>> + Send;

    /// Names of the reports associated with `conference_id`.
    fn list_names_by_conference(
        &self,
        conference_id: ConferenceId,
    ) -> impl Future<Output = Result<Vec<String>, ConfHubError>> + Send;

    /// Set the conference of report `id`.
    ///
    /// Resolves to `false` when no report with `id` exists.
    fn assign_conference(
        &self,
        id: ReportId,
        conference_id: ConferenceId,
    ) -> impl Future<Output = Result<bool, ConfHubError>> + Send;
}

/// Repository for persisting and querying conferences.
pub trait ConferenceRepository {
    /// Insert a new conference and return its id.
    fn create(
        &self,
        conference: NewConference,
    ) -> impl Future<Output = Result<ConferenceId, ConfHubError>> + Send;

    /// Get a conference by its identifier.
    fn get_by_id(
        &self,
        id: ConferenceId,
    ) -> impl Future<Output = Result<Option<Conference>, ConfHubError>> + Send;
}
