use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, sqlx::Type, PartialEq)]
#[sqlx(type_name = "property_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Apartment,
    Villa,
    Commercial,
    Plot,
}

impl PropertyType {
    pub fn to_str(&self) -> &str {
        match self {
            PropertyType::Apartment => "apartment",
            PropertyType::Villa => "villa",
            PropertyType::Commercial => "commercial",
            PropertyType::Plot => "plot",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, sqlx::Type, PartialEq)]
#[sqlx(type_name = "property_category", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PropertyCategory {
    Buy,
    Rent,
    Pg,
}

impl PropertyCategory {
    pub fn to_str(&self) -> &str {
        match self {
            PropertyCategory::Buy => "buy",
            PropertyCategory::Rent => "rent",
            PropertyCategory::Pg => "pg",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, sqlx::Type, PartialEq)]
#[sqlx(type_name = "property_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    Available,
    Sold,
    Rented,
}

impl PropertyStatus {
    pub fn to_str(&self) -> &str {
        match self {
            PropertyStatus::Available => "available",
            PropertyStatus::Sold => "sold",
            PropertyStatus::Rented => "rented",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Property {
    pub id: i32,

    pub title: String,
    pub description: String,
    pub property_type: PropertyType,
    pub category: PropertyCategory,

    // Location details
    pub address: String,
    pub city: String,
    pub location: String,
    pub latitude: Option<String>,
    pub longitude: Option<String>,

    // Specifications
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub area: Option<i32>,

    // Pricing
    pub price: i64,
    pub price_display: Option<String>,

    // Listing media and features, stored as JSONB arrays of strings
    pub images: JsonValue,
    pub amenities: Option<JsonValue>,
    pub features: Option<JsonValue>,

    pub agent_id: Option<i32>,
    pub status: PropertyStatus,

    pub featured: bool,
    pub is_new_launch: bool,
    pub is_exclusive: bool,
    pub is_ready_to_move: bool,

    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&PropertyType::Apartment).unwrap(),
            "\"apartment\""
        );
        assert_eq!(
            serde_json::to_string(&PropertyCategory::Pg).unwrap(),
            "\"pg\""
        );
        assert_eq!(
            serde_json::to_string(&PropertyStatus::Available).unwrap(),
            "\"available\""
        );
    }

    #[test]
    fn enums_deserialize_lowercase() {
        let t: PropertyType = serde_json::from_str("\"villa\"").unwrap();
        assert_eq!(t, PropertyType::Villa);
        let c: PropertyCategory = serde_json::from_str("\"rent\"").unwrap();
        assert_eq!(c, PropertyCategory::Rent);
    }
}
