use anyhow;
use async_trait::async_trait;
use serde_json::json;

use crate::{
    db::db::DBClient,
    dtos::propertydtos::{CreatePropertyDto, PropertyFilterQueryDto},
    models::propertymodel::{Property, PropertyStatus},
};

const PROPERTY_COLUMNS: &str = r#"
    id, title, description, property_type, category,
    address, city, location, latitude, longitude,
    bedrooms, bathrooms, area, price, price_display,
    images, amenities, features, agent_id, status,
    featured, is_new_launch, is_exclusive, is_ready_to_move,
    created_at, updated_at
"#;

#[async_trait]
pub trait PropertyExt {
    async fn get_property_by_id(&self, property_id: i32)
        -> Result<Option<Property>, sqlx::Error>;

    /// Listing search. Each present filter field contributes one AND-combined
    /// equality or inclusive range condition; no filters returns everything
    /// in natural storage order.
    async fn get_properties(
        &self,
        filters: &PropertyFilterQueryDto,
    ) -> Result<Vec<Property>, sqlx::Error>;

    async fn get_featured_properties(&self, limit: i64) -> Result<Vec<Property>, sqlx::Error>;

    async fn get_properties_by_city(
        &self,
        city: &str,
        limit: i64,
    ) -> Result<Vec<Property>, sqlx::Error>;

    async fn count_properties(&self) -> Result<i64, sqlx::Error>;

    async fn create_property(
        &self,
        property_data: CreatePropertyDto,
    ) -> Result<Property, anyhow::Error>;
}

#[async_trait]
impl PropertyExt for DBClient {
    async fn get_property_by_id(
        &self,
        property_id: i32,
    ) -> Result<Option<Property>, sqlx::Error> {
        let query = format!(
            "SELECT {PROPERTY_COLUMNS} FROM properties WHERE id = $1"
        );

        sqlx::query_as::<_, Property>(&query)
            .bind(property_id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn get_properties(
        &self,
        filters: &PropertyFilterQueryDto,
    ) -> Result<Vec<Property>, sqlx::Error> {
        let query = format!(
            r#"
            SELECT {PROPERTY_COLUMNS}
            FROM properties
            WHERE ($1::text IS NULL OR category = $1::property_category)
              AND ($2::text IS NULL OR property_type = $2::property_type)
              AND ($3::text IS NULL OR city = $3)
              AND ($4::text IS NULL OR location = $4)
              AND ($5::bigint IS NULL OR price >= $5)
              AND ($6::bigint IS NULL OR price <= $6)
              AND ($7::int IS NULL OR bedrooms >= $7)
              AND ($8::int IS NULL OR bathrooms >= $8)
              AND ($9::int IS NULL OR area >= $9)
              AND ($10::int IS NULL OR area <= $10)
              AND ($11::text IS NULL OR status = $11::property_status)
              AND ($12::bool IS NULL OR featured = $12)
            "#
        );

        sqlx::query_as::<_, Property>(&query)
            .bind(filters.category.map(|c| c.to_str().to_string()))
            .bind(filters.property_type.map(|t| t.to_str().to_string()))
            .bind(filters.city.as_deref())
            .bind(filters.location.as_deref())
            .bind(filters.min_price)
            .bind(filters.max_price)
            .bind(filters.bedrooms)
            .bind(filters.bathrooms)
            .bind(filters.min_area)
            .bind(filters.max_area)
            .bind(filters.status.map(|s| s.to_str().to_string()))
            .bind(filters.featured)
            .fetch_all(&self.pool)
            .await
    }

    async fn get_featured_properties(&self, limit: i64) -> Result<Vec<Property>, sqlx::Error> {
        let query = format!(
            "SELECT {PROPERTY_COLUMNS} FROM properties WHERE featured = TRUE LIMIT $1"
        );

        sqlx::query_as::<_, Property>(&query)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
    }

    async fn get_properties_by_city(
        &self,
        city: &str,
        limit: i64,
    ) -> Result<Vec<Property>, sqlx::Error> {
        let query = city_query();

        sqlx::query_as::<_, Property>(&query)
            .bind(city)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
    }

    async fn count_properties(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM properties")
            .fetch_one(&self.pool)
            .await
    }

    async fn create_property(
        &self,
        property_data: CreatePropertyDto,
    ) -> Result<Property, anyhow::Error> {
        if property_data.images.is_empty() {
            return Err(anyhow::anyhow!("A property must have at least one image"));
        }
        if property_data.price < 0 {
            return Err(anyhow::anyhow!("Price must be non-negative"));
        }

        let query = format!(
            r#"
            INSERT INTO properties (
                title, description, property_type, category,
                address, city, location, latitude, longitude,
                bedrooms, bathrooms, area, price, price_display,
                images, amenities, features, agent_id, status,
                featured, is_new_launch, is_exclusive, is_ready_to_move
            ) VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12,
                $13, $14, $15, $16, $17, $18, $19, $20, $21, $22, $23
            )
            RETURNING {PROPERTY_COLUMNS}
            "#
        );

        let property = sqlx::query_as::<_, Property>(&query)
            .bind(&property_data.title)
            .bind(&property_data.description)
            .bind(property_data.property_type)
            .bind(property_data.category)
            .bind(&property_data.address)
            .bind(&property_data.city)
            .bind(&property_data.location)
            .bind(&property_data.latitude)
            .bind(&property_data.longitude)
            .bind(property_data.bedrooms)
            .bind(property_data.bathrooms)
            .bind(property_data.area)
            .bind(property_data.price)
            .bind(&property_data.price_display)
            .bind(json!(property_data.images))
            .bind(property_data.amenities.as_ref().map(|a| json!(a)))
            .bind(property_data.features.as_ref().map(|f| json!(f)))
            .bind(property_data.agent_id)
            .bind(property_data.status.unwrap_or(PropertyStatus::Available))
            .bind(property_data.featured)
            .bind(property_data.is_new_launch)
            .bind(property_data.is_exclusive)
            .bind(property_data.is_ready_to_move)
            .fetch_one(&self.pool)
            .await?;

        Ok(property)
    }
}

// Case-insensitive exact match. A plain equality keeps `%` and `_` in the
// path segment from acting as pattern wildcards.
fn city_query() -> String {
    format!("SELECT {PROPERTY_COLUMNS} FROM properties WHERE LOWER(city) = LOWER($1) LIMIT $2")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_lookup_compares_exactly_not_as_pattern() {
        let query = city_query();
        assert!(query.contains("LOWER(city) = LOWER($1)"));
        assert!(!query.contains("ILIKE"));
    }
}
