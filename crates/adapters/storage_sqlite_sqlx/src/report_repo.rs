//! `SQLite` implementation of [`ReportRepository`].

use std::future::Future;

use sqlx::SqlitePool;

use confhub_app::ports::ReportRepository;
use confhub_domain::error::ConfHubError;
use confhub_domain::id::{ConferenceId, ReportId};
use confhub_domain::report::NewReport;

use crate::error::StorageError;

const INSERT: &str = "INSERT INTO reports (name, user_id) VALUES (?, ?)";
const SELECT_NAMES: &str = "SELECT name FROM reports ORDER BY id";
const SELECT_NAMES_BY_CONFERENCE: &str =
    "SELECT name FROM reports WHERE conference_id = ? ORDER BY id";
const UPDATE_CONFERENCE: &str = "UPDATE reports SET conference_id = ? WHERE id = ?";

/// `SQLite`-backed report repository.
pub struct SqliteReportRepository {
    pool: SqlitePool,
}

impl SqliteReportRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ReportRepository for SqliteReportRepository {
    fn create(
        &self,
        report: NewReport,
    ) -> impl Future<Output = Result<ReportId, ConfHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&report.name)
                .bind(report.user_id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(ReportId::new(result.last_insert_rowid()))
        }
    }

    fn list_names(&self) -> impl Future<Output = Result<Vec<String>, ConfHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let names: Vec<String> = sqlx::query_scalar(SELECT_NAMES)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(names)
        }
    }

    fn list_names_by_conference(
        &self,
        conference_id: ConferenceId,
    ) -> impl Future<Output = Result<Vec<String>, ConfHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let names: Vec<String> = sqlx::query_scalar(SELECT_NAMES_BY_CONFERENCE)
                .bind(conference_id.get())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(names)
        }
    }

    fn assign_conference(
        &self,
        id: ReportId,
        conference_id: ConferenceId,
    ) -> impl Future<Output = Result<bool, ConfHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(UPDATE_CONFERENCE)
                .bind(conference_id.get())
                .bind(id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected() > 0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conference_repo::SqliteConferenceRepository;
    use crate::pool::Config;
    use confhub_app::ports::ConferenceRepository;
    use confhub_domain::conference::NewConference;
    use confhub_domain::id::UserId;

    /// `(name, user_id, conference_id)` of the stored row.
    async fn stored(repo: &SqliteReportRepository, id: ReportId) -> (String, i64, Option<i64>) {
        sqlx::query_as("SELECT name, user_id, conference_id FROM reports WHERE id = ?")
            .bind(id.get())
            .fetch_one(&repo.pool)
            .await
            .unwrap()
    }

    async fn setup() -> (SqliteReportRepository, SqliteConferenceRepository) {
        let db = Config::in_memory().build().await.unwrap();
        (
            SqliteReportRepository::new(db.pool().clone()),
            SqliteConferenceRepository::new(db.pool().clone()),
        )
    }

    fn paper(name: &str) -> NewReport {
        NewReport {
            name: name.to_string(),
            user_id: UserId::new(1),
        }
    }

    async fn conference(repo: &SqliteConferenceRepository, name: &str) -> ConferenceId {
        repo.create(NewConference::new(name).unwrap()).await.unwrap()
    }

    #[tokio::test]
    async fn should_create_report_without_conference() {
        let (reports, _) = setup().await;
        let id = reports.create(paper("Paper A")).await.unwrap();

        assert_eq!(stored(&reports, id).await, ("Paper A".to_string(), 1, None));
    }

    #[tokio::test]
    async fn should_store_default_owner_and_empty_name() {
        let (reports, _) = setup().await;
        let id = reports
            .create(NewReport {
                name: String::new(),
                user_id: UserId::new(0),
            })
            .await
            .unwrap();

        assert_eq!(stored(&reports, id).await, (String::new(), 0, None));
    }

    #[tokio::test]
    async fn should_list_names_in_insertion_order() {
        let (reports, _) = setup().await;
        reports.create(paper("Paper A")).await.unwrap();
        reports.create(paper("Paper B")).await.unwrap();

        assert_eq!(reports.list_names().await.unwrap(), vec!["Paper A", "Paper B"]);
    }

    #[tokio::test]
    async fn should_return_empty_list_when_no_reports() {
        let (reports, _) = setup().await;
        assert!(reports.list_names().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_assign_conference_idempotently() {
        let (reports, conferences) = setup().await;
        let conf = conference(&conferences, "ICSE2025").await;
        let id = reports.create(paper("Paper A")).await.unwrap();

        assert!(reports.assign_conference(id, conf).await.unwrap());
        assert!(reports.assign_conference(id, conf).await.unwrap());

        assert_eq!(stored(&reports, id).await.2, Some(conf.get()));
    }

    #[tokio::test]
    async fn should_report_missing_row_when_assigning_unknown_report() {
        let (reports, conferences) = setup().await;
        let conf = conference(&conferences, "ICSE2025").await;

        assert!(!reports.assign_conference(ReportId::new(9), conf).await.unwrap());
    }

    #[tokio::test]
    async fn should_list_only_reports_of_given_conference() {
        let (reports, conferences) = setup().await;
        let icse = conference(&conferences, "ICSE2025").await;
        let fse = conference(&conferences, "FSE2025").await;
        let a = reports.create(paper("Paper A")).await.unwrap();
        let b = reports.create(paper("Paper B")).await.unwrap();
        reports.create(paper("Paper C")).await.unwrap();

        reports.assign_conference(a, icse).await.unwrap();
        reports.assign_conference(b, fse).await.unwrap();

        assert_eq!(
            reports.list_names_by_conference(icse).await.unwrap(),
            vec!["Paper A"]
        );
        assert_eq!(
            reports.list_names_by_conference(fse).await.unwrap(),
            vec!["Paper B"]
        );
        assert!(
            reports
                .list_names_by_conference(ConferenceId::new(77))
                .await
                .unwrap()
                .is_empty()
        );
    }
}
