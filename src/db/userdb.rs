use anyhow;
use async_trait::async_trait;

use crate::{
    db::db::DBClient,
    dtos::userdtos::{RegisterUserDto, UpdateUserDto},
    models::usermodel::{User, UserRole},
    utils::password,
};

const USER_COLUMNS: &str =
    "id, username, password, email, name, phone, profile_image, role, created_at";

#[async_trait]
pub trait UserExt {
    async fn get_user_by_id(&self, user_id: i32) -> Result<Option<User>, sqlx::Error>;

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, sqlx::Error>;

    /// Hashes the plaintext password before persisting. Plaintext never
    /// reaches the database.
    async fn save_user(&self, user_data: RegisterUserDto) -> Result<User, anyhow::Error>;

    /// Partial profile update; absent fields keep their current value.
    async fn update_user(
        &self,
        user_id: i32,
        update: UpdateUserDto,
    ) -> Result<Option<User>, sqlx::Error>;
}

#[async_trait]
impl UserExt for DBClient {
    async fn get_user_by_id(&self, user_id: i32) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");

        sqlx::query_as::<_, User>(&query)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE username = $1");

        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(&self.pool)
            .await
    }

    async fn save_user(&self, user_data: RegisterUserDto) -> Result<User, anyhow::Error> {
        let hashed_password = password::hash(&user_data.password)
            .map_err(|e| anyhow::anyhow!(e.to_string()))?;

        let query = format!(
            r#"
            INSERT INTO users (username, password, email, name, phone, role)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {USER_COLUMNS}
            "#
        );

        let user = sqlx::query_as::<_, User>(&query)
            .bind(&user_data.username)
            .bind(&hashed_password)
            .bind(&user_data.email)
            .bind(&user_data.name)
            .bind(&user_data.phone)
            .bind(UserRole::User)
            .fetch_one(&self.pool)
            .await?;

        Ok(user)
    }

    async fn update_user(
        &self,
        user_id: i32,
        update: UpdateUserDto,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            r#"
            UPDATE users
            SET name = COALESCE($2, name),
                email = COALESCE($3, email),
                phone = COALESCE($4, phone)
            WHERE id = $1
            RETURNING {USER_COLUMNS}
            "#
        );

        sqlx::query_as::<_, User>(&query)
            .bind(user_id)
            .bind(&update.name)
            .bind(&update.email)
            .bind(&update.phone)
            .fetch_optional(&self.pool)
            .await
    }
}
