use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dtos::userdtos::validate_phone;
use crate::models::enquirymodel::Enquiry;

#[derive(Debug, Default, Validate, Serialize, Deserialize)]
pub struct CreateEnquiryDto {
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,

    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Email is invalid")
    )]
    pub email: String,

    #[validate(custom = "validate_phone")]
    pub phone: String,

    #[validate(length(min = 1, max = 2000, message = "Message is required"))]
    pub message: String,

    #[serde(rename = "propertyId")]
    pub property_id: Option<i32>,

    #[serde(rename = "agentId")]
    pub agent_id: Option<i32>,

    #[serde(rename = "interestedIn")]
    pub interested_in: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EnquiryResponseDto {
    pub status: String,
    pub enquiry: Enquiry,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EnquiryListResponseDto {
    pub status: String,
    pub results: usize,
    pub enquiries: Vec<Enquiry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enquiry_requires_message() {
        let dto = CreateEnquiryDto {
            name: "Ravi".to_string(),
            email: "ravi@example.com".to_string(),
            phone: "+919876543210".to_string(),
            message: "".to_string(),
            ..Default::default()
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn valid_enquiry_passes() {
        let dto = CreateEnquiryDto {
            name: "Ravi".to_string(),
            email: "ravi@example.com".to_string(),
            phone: "+919876543210".to_string(),
            message: "Interested in a site visit this weekend".to_string(),
            property_id: Some(3),
            agent_id: None,
            interested_in: Some("buy".to_string()),
        };
        assert!(dto.validate().is_ok());
    }
}
