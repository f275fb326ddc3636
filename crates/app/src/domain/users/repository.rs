//! Users Repository

use sqlx::{Error, FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as, query_scalar};
use uuid::Uuid;

use crate::domain::users::models::{Role, UserRecord};

const FIND_USER_BY_USERNAME_SQL: &str = include_str!("sql/find_user_by_username.sql");
const INSERT_USER_SQL: &str = include_str!("sql/insert_user.sql");
const COUNT_USERS_SQL: &str = include_str!("sql/count_users.sql");

impl<'r> FromRow<'r, PgRow> for UserRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let role: String = row.try_get("role")?;

        let role: Role = role.parse().map_err(|e| Error::ColumnDecode {
            index: "role".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            uuid: row.try_get("uuid")?,
            username: row.try_get("username")?,
            password_hash: row.try_get("password_hash")?,
            role,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgUsersRepository;

impl PgUsersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn find_user_by_username(
        &self,
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<UserRecord>, Error> {
        query_as::<Postgres, UserRecord>(FIND_USER_BY_USERNAME_SQL)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    pub(crate) async fn insert_user(
        &self,
        pool: &PgPool,
        username: &str,
        password_hash: &str,
        role: Role,
    ) -> Result<Uuid, Error> {
        let uuid = Uuid::now_v7();

        query(INSERT_USER_SQL)
            .bind(uuid)
            .bind(username)
            .bind(password_hash)
            .bind(role.as_str())
            .execute(pool)
            .await?;

        Ok(uuid)
    }

    pub(crate) async fn count_users(&self, pool: &PgPool) -> Result<i64, Error> {
        query_scalar(COUNT_USERS_SQL).fetch_one(pool).await
    }
}
