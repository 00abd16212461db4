use async_trait::async_trait;

use crate::{
    db::db::DBClient,
    models::{propertymodel::Property, savedpropertymodel::SavedProperty},
};

#[async_trait]
pub trait SavedPropertyExt {
    /// The saved listings for a user, newest save first.
    async fn get_saved_properties(&self, user_id: i32) -> Result<Vec<Property>, sqlx::Error>;

    /// Check-then-insert: saving an already saved pair returns the existing
    /// row unchanged. The UNIQUE (user_id, property_id) constraint backstops
    /// the race between two concurrent saves.
    async fn save_property(
        &self,
        user_id: i32,
        property_id: i32,
    ) -> Result<SavedProperty, sqlx::Error>;

    /// Returns false when the pair was not saved to begin with.
    async fn remove_saved_property(
        &self,
        user_id: i32,
        property_id: i32,
    ) -> Result<bool, sqlx::Error>;

    async fn is_property_saved(
        &self,
        user_id: i32,
        property_id: i32,
    ) -> Result<bool, sqlx::Error>;
}

async fn get_saved_pair(
    client: &DBClient,
    user_id: i32,
    property_id: i32,
) -> Result<Option<SavedProperty>, sqlx::Error> {
    sqlx::query_as::<_, SavedProperty>(
        r#"
        SELECT id, user_id, property_id, created_at
        FROM saved_properties
        WHERE user_id = $1 AND property_id = $2
        "#,
    )
    .bind(user_id)
    .bind(property_id)
    .fetch_optional(&client.pool)
    .await
}

#[async_trait]
impl SavedPropertyExt for DBClient {
    async fn get_saved_properties(&self, user_id: i32) -> Result<Vec<Property>, sqlx::Error> {
        sqlx::query_as::<_, Property>(
            r#"
            SELECT
                p.id, p.title, p.description, p.property_type, p.category,
                p.address, p.city, p.location, p.latitude, p.longitude,
                p.bedrooms, p.bathrooms, p.area, p.price, p.price_display,
                p.images, p.amenities, p.features, p.agent_id, p.status,
                p.featured, p.is_new_launch, p.is_exclusive, p.is_ready_to_move,
                p.created_at, p.updated_at
            FROM saved_properties sp
            JOIN properties p ON p.id = sp.property_id
            WHERE sp.user_id = $1
            ORDER BY sp.created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn save_property(
        &self,
        user_id: i32,
        property_id: i32,
    ) -> Result<SavedProperty, sqlx::Error> {
        if let Some(existing) = get_saved_pair(self, user_id, property_id).await? {
            return Ok(existing);
        }

        let inserted = sqlx::query_as::<_, SavedProperty>(
            r#"
            INSERT INTO saved_properties (user_id, property_id)
            VALUES ($1, $2)
            RETURNING id, user_id, property_id, created_at
            "#,
        )
        .bind(user_id)
        .bind(property_id)
        .fetch_one(&self.pool)
        .await;

        match inserted {
            Ok(saved) => Ok(saved),
            // A concurrent save can slip past the existence check; the unique
            // constraint catches it and the existing row is returned instead.
            Err(sqlx::Error::Database(ref db_err)) if db_err.is_unique_violation() => {
                let existing = get_saved_pair(self, user_id, property_id).await?;
                existing.ok_or(sqlx::Error::RowNotFound)
            }
            Err(e) => Err(e),
        }
    }

    async fn remove_saved_property(
        &self,
        user_id: i32,
        property_id: i32,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM saved_properties WHERE user_id = $1 AND property_id = $2",
        )
        .bind(user_id)
        .bind(property_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn is_property_saved(
        &self,
        user_id: i32,
        property_id: i32,
    ) -> Result<bool, sqlx::Error> {
        Ok(get_saved_pair(self, user_id, property_id).await?.is_some())
    }
}
