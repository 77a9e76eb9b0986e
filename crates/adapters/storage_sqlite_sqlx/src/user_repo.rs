//! `SQLite` implementation of [`UserRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use confhub_app::ports::UserRepository;
use confhub_domain::error::ConfHubError;
use confhub_domain::id::UserId;
use confhub_domain::user::{NewUser, UserMask};

use crate::error::StorageError;

/// Wrapper for converting `(name, surname)` rows into [`UserMask`].
struct Wrapper(UserMask);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let name: String = row.try_get("name")?;
        let surname: String = row.try_get("surname")?;
        Ok(Self(UserMask { name, surname }))
    }
}

const INSERT: &str = "INSERT INTO users (name, surname, login, password_hash) VALUES (?, ?, ?, ?)";
const SELECT_BY_LOGIN: &str = "SELECT name, surname FROM users WHERE login = ? ORDER BY id";
const SELECT_BY_MASK: &str =
    "SELECT name, surname FROM users WHERE name GLOB ? AND surname GLOB ? ORDER BY id";

/// `SQLite`-backed user repository.
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl UserRepository for SqliteUserRepository {
    fn create(&self, user: NewUser) -> impl Future<Output = Result<UserId, ConfHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&user.name)
                .bind(&user.surname)
                .bind(&user.login)
                .bind(user.password_hash.as_str())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(UserId::new(result.last_insert_rowid()))
        }
    }

    fn find_by_login(
        &self,
        login: &str,
    ) -> impl Future<Output = Result<Vec<UserMask>, ConfHubError>> + Send {
        let pool = self.pool.clone();
        let login = login.to_string();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_LOGIN)
                .bind(login)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn find_by_mask(
        &self,
        mask: &UserMask,
    ) -> impl Future<Output = Result<Vec<UserMask>, ConfHubError>> + Send {
        let pool = self.pool.clone();
        let name = mask.name_mask().to_glob_pattern();
        let surname = mask.surname_mask().to_glob_pattern();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_MASK)
                .bind(name)
                .bind(surname)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}
