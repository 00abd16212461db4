use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{propertymodel::Property, savedpropertymodel::SavedProperty};

#[derive(Debug, Validate, Serialize, Deserialize)]
pub struct SavePropertyDto {
    #[serde(rename = "propertyId")]
    #[validate(range(min = 1, message = "propertyId must be a positive id"))]
    pub property_id: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SavedPropertyResponseDto {
    pub status: String,
    pub saved: SavedProperty,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SavedPropertyListResponseDto {
    pub status: String,
    pub results: usize,
    pub properties: Vec<Property>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SavedCheckResponseDto {
    pub status: String,
    #[serde(rename = "isSaved")]
    pub is_saved: bool,
}
