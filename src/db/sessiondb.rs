use async_trait::async_trait;
use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::{db::db::DBClient, models::sessionmodel::Session};

#[async_trait]
pub trait SessionExt {
    /// createTableIfMissing semantics for the `session` table; run at startup.
    async fn ensure_session_table(&self) -> Result<(), sqlx::Error>;

    async fn create_session(
        &self,
        user_id: i32,
        maxage_minutes: i64,
    ) -> Result<Session, sqlx::Error>;

    /// Resolves a sid to its session, ignoring expired rows.
    async fn get_valid_session(&self, sid: &str) -> Result<Option<Session>, sqlx::Error>;

    async fn delete_session(&self, sid: &str) -> Result<(), sqlx::Error>;
}

#[async_trait]
impl SessionExt for DBClient {
    async fn ensure_session_table(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS "session" (
                sid VARCHAR PRIMARY KEY,
                user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                expires_at TIMESTAMPTZ NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn create_session(
        &self,
        user_id: i32,
        maxage_minutes: i64,
    ) -> Result<Session, sqlx::Error> {
        let sid = Uuid::new_v4().to_string();
        let expires_at = Utc::now() + Duration::minutes(maxage_minutes);

        sqlx::query_as::<_, Session>(
            r#"
            INSERT INTO "session" (sid, user_id, expires_at)
            VALUES ($1, $2, $3)
            RETURNING sid, user_id, expires_at, created_at
            "#,
        )
        .bind(&sid)
        .bind(user_id)
        .bind(expires_at)
        .fetch_one(&self.pool)
        .await
    }

    async fn get_valid_session(&self, sid: &str) -> Result<Option<Session>, sqlx::Error> {
        sqlx::query_as::<_, Session>(
            r#"
            SELECT sid, user_id, expires_at, created_at
            FROM "session"
            WHERE sid = $1 AND expires_at > NOW()
            "#,
        )
        .bind(sid)
        .fetch_optional(&self.pool)
        .await
    }

    async fn delete_session(&self, sid: &str) -> Result<(), sqlx::Error> {
        sqlx::query(r#"DELETE FROM "session" WHERE sid = $1"#)
            .bind(sid)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
