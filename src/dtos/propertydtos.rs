use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::propertymodel::{Property, PropertyCategory, PropertyStatus, PropertyType};

/// Query-string filters for the listing search. Every present field narrows
/// the result set with one equality or inclusive range condition; all present
/// conditions are AND-combined.
#[derive(Debug, Default, Validate, Serialize, Deserialize)]
pub struct PropertyFilterQueryDto {
    pub category: Option<PropertyCategory>,

    #[serde(rename = "type")]
    pub property_type: Option<PropertyType>,

    pub city: Option<String>,
    pub location: Option<String>,

    #[serde(rename = "minPrice")]
    #[validate(range(min = 0, message = "minPrice must be non-negative"))]
    pub min_price: Option<i64>,

    #[serde(rename = "maxPrice")]
    #[validate(range(min = 0, message = "maxPrice must be non-negative"))]
    pub max_price: Option<i64>,

    #[validate(range(min = 0, message = "bedrooms must be non-negative"))]
    pub bedrooms: Option<i32>,

    #[validate(range(min = 0, message = "bathrooms must be non-negative"))]
    pub bathrooms: Option<i32>,

    #[serde(rename = "minArea")]
    #[validate(range(min = 0, message = "minArea must be non-negative"))]
    pub min_area: Option<i32>,

    #[serde(rename = "maxArea")]
    #[validate(range(min = 0, message = "maxArea must be non-negative"))]
    pub max_area: Option<i32>,

    pub status: Option<PropertyStatus>,
    pub featured: Option<bool>,
}

#[derive(Debug, Default, Validate, Serialize, Deserialize)]
pub struct LimitQueryDto {
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    pub limit: Option<i64>,
}

/// Input for inserting a listing. Only the seed task creates properties today,
/// but it goes through the same validated shape the API layer would use.
#[derive(Debug, Validate, Serialize, Deserialize)]
pub struct CreatePropertyDto {
    #[validate(length(min = 1, max = 200, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub category: PropertyCategory,

    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,

    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,

    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,

    pub latitude: Option<String>,
    pub longitude: Option<String>,

    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub area: Option<i32>,

    #[validate(range(min = 0, message = "Price must be non-negative"))]
    pub price: i64,
    pub price_display: Option<String>,

    #[validate(length(min = 1, message = "At least one image is required"))]
    pub images: Vec<String>,
    pub amenities: Option<Vec<String>>,
    pub features: Option<Vec<String>>,

    pub agent_id: Option<i32>,
    pub status: Option<PropertyStatus>,

    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub is_new_launch: bool,
    #[serde(default)]
    pub is_exclusive: bool,
    #[serde(default)]
    pub is_ready_to_move: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PropertyListResponseDto {
    pub status: String,
    pub results: usize,
    pub properties: Vec<Property>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PropertyResponseDto {
    pub status: String,
    pub property: Property,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_query_parses_from_query_string() {
        let query = "category=buy&city=Mumbai&minPrice=1000000&featured=true";
        let dto: PropertyFilterQueryDto = serde_urlencoded::from_str(query).unwrap();
        assert_eq!(dto.category, Some(PropertyCategory::Buy));
        assert_eq!(dto.city.as_deref(), Some("Mumbai"));
        assert_eq!(dto.min_price, Some(1_000_000));
        assert_eq!(dto.featured, Some(true));
        assert!(dto.property_type.is_none());
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn unknown_enum_value_is_rejected() {
        let result: Result<PropertyFilterQueryDto, _> =
            serde_urlencoded::from_str("type=castle");
        assert!(result.is_err());
    }

    #[test]
    fn negative_price_fails_validation() {
        let dto = PropertyFilterQueryDto {
            min_price: Some(-1),
            ..Default::default()
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn create_property_requires_images() {
        let dto = CreatePropertyDto {
            title: "2BHK in Andheri".to_string(),
            description: "Spacious flat close to the metro".to_string(),
            property_type: PropertyType::Apartment,
            category: PropertyCategory::Buy,
            address: "12 Link Road".to_string(),
            city: "Mumbai".to_string(),
            location: "Andheri West".to_string(),
            latitude: None,
            longitude: None,
            bedrooms: Some(2),
            bathrooms: Some(2),
            area: Some(950),
            price: 15_000_000,
            price_display: Some("₹1.5 Cr".to_string()),
            images: vec![],
            amenities: None,
            features: None,
            agent_id: None,
            status: None,
            featured: false,
            is_new_launch: false,
            is_exclusive: false,
            is_ready_to_move: false,
        };
        assert!(dto.validate().is_err());
    }
}
