//! Conference service — conference creation and report association.

use confhub_domain::conference::NewConference;
use confhub_domain::error::{ConfHubError, NotFoundError};
use confhub_domain::id::{ConferenceId, ReportId};

use crate::ports::{ConferenceRepository, ReportRepository};

/// Application service for conference operations.
pub struct ConferenceService<C, R> {
    conferences: C,
    reports: R,
}

impl<C: ConferenceRepository, R: ReportRepository> ConferenceService<C, R> {
    /// Create a new service backed by the given repositories.
    pub fn new(conferences: C, reports: R) -> Self {
        Self {
            conferences,
            reports,
        }
    }

    /// Create a conference named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfHubError::Validation`] when `name` is empty, or a
    /// storage error.
    #[tracing::instrument(skip(self))]
    pub async fn create_conference(&self, name: &str) -> Result<ConferenceId, ConfHubError> {
        let conference = NewConference::new(name)?;
        let id = self.conferences.create(conference).await?;
        tracing::info!(conference_id = %id, "conference created");
        Ok(id)
    }

    /// Associate report `report_id` with conference `conference_id`.
    ///
    /// Calling it again with the same pair leaves the same final state.
    ///
    /// # Errors
    ///
    /// Returns [`ConfHubError::NotFound`] when either the conference or the
    /// report does not exist, or a storage error.
    #[tracing::instrument(skip(self))]
    pub async fn add_report(
        &self,
        conference_id: ConferenceId,
        report_id: ReportId,
    ) -> Result<(), ConfHubError> {
        if self.conferences.get_by_id(conference_id).await?.is_none() {
            return Err(NotFoundError::Record {
                entity: "Conference",
                id: conference_id.get(),
            }
            .into());
        }
        if !self
            .reports
            .assign_conference(report_id, conference_id)
            .await?
        {
            return Err(NotFoundError::Record {
                entity: "Report",
                id: report_id.get(),
            }
            .into());
        }
        Ok(())
    }

    /// Names of the reports associated with `conference_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfHubError::NotFound`] when no report is associated, or a
    /// storage error.
    #[tracing::instrument(skip(self))]
    pub async fn list_report_names(
        &self,
        conference_id: ConferenceId,
    ) -> Result<Vec<String>, ConfHubError> {
        let names = self.reports.list_names_by_conference(conference_id).await?;
        if names.is_empty() {
            return Err(NotFoundError::ReportsInConference(conference_id).into());
        }
        Ok(names)
    }
}
