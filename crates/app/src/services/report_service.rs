//! Report service — creating reports and listing their names.

use confhub_domain::error::{ConfHubError, NotFoundError};
use confhub_domain::id::ReportId;
use confhub_domain::report::NewReport;

use crate::ports::ReportRepository;

/// Application service for report operations.
pub struct ReportService<R> {
    repo: R,
}

impl<R: ReportRepository> ReportService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a report with no conference association.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, report), fields(report_name = %report.name, user_id = %report.user_id))]
    pub async fn create_report(&self, report: NewReport) -> Result<ReportId, ConfHubError> {
        let id = self.repo.create(report).await?;
        tracing::info!(report_id = %id, "report created");
        Ok(id)
    }

    /// Names of every report.
    ///
    /// # Errors
    ///
    /// Returns [`ConfHubError::NotFound`] when there are no reports, or a
    /// storage error.
    #[tracing::instrument(skip(self))]
    pub async fn list_report_names(&self) -> Result<Vec<String>, ConfHubError> {
        let names = self.repo.list_names().await?;
        if names.is_empty() {
            return Err(NotFoundError::Reports.into());
        }
        Ok(names)
    }
}
