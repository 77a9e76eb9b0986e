//! `SQLite` implementation of [`ConferenceRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use confhub_app::ports::ConferenceRepository;
use confhub_domain::conference::{Conference, NewConference};
use confhub_domain::error::ConfHubError;
use confhub_domain::id::ConferenceId;

use crate::error::StorageError;

struct Wrapper(Conference);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        Ok(Self(Conference {
            id: ConferenceId::new(id),
            name,
        }))
    }
}

const INSERT: &str = "INSERT INTO conferences (name) VALUES (?)";
const SELECT_BY_ID: &str = "SELECT id, name FROM conferences WHERE id = ?";

/// `SQLite`-backed conference repository.
pub struct SqliteConferenceRepository {
    pool: SqlitePool,
}

impl SqliteConferenceRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ConferenceRepository for SqliteConferenceRepository {
    fn create(
        &self,
        conference: NewConference,
    ) -> impl Future<Output = Result<ConferenceId, ConfHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&conference.name)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(ConferenceId::new(result.last_insert_rowid()))
        }
    }

    fn get_by_id(
        &self,
        id: ConferenceId,
    ) -> impl Future<Output = Result<Option<Conference>, ConfHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.get())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.map(|w| w.0))
        }
    }
}
