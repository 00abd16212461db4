use async_trait::async_trait;

use crate::{
    db::db::DBClient, dtos::enquirydtos::CreateEnquiryDto, models::enquirymodel::Enquiry,
};

const ENQUIRY_COLUMNS: &str =
    "id, name, email, phone, message, property_id, agent_id, interested_in, created_at";

#[async_trait]
pub trait EnquiryExt {
    async fn create_enquiry(&self, enquiry: CreateEnquiryDto) -> Result<Enquiry, sqlx::Error>;

    /// Newest first.
    async fn get_enquiries(&self) -> Result<Vec<Enquiry>, sqlx::Error>;
}

#[async_trait]
impl EnquiryExt for DBClient {
    async fn create_enquiry(&self, enquiry: CreateEnquiryDto) -> Result<Enquiry, sqlx::Error> {
        let query = format!(
            r#"
            INSERT INTO enquiries (name, email, phone, message, property_id, agent_id, interested_in)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {ENQUIRY_COLUMNS}
            "#
        );

        sqlx::query_as::<_, Enquiry>(&query)
            .bind(&enquiry.name)
            .bind(&enquiry.email)
            .bind(&enquiry.phone)
            .bind(&enquiry.message)
            .bind(enquiry.property_id)
            .bind(enquiry.agent_id)
            .bind(&enquiry.interested_in)
            .fetch_one(&self.pool)
            .await
    }

    async fn get_enquiries(&self) -> Result<Vec<Enquiry>, sqlx::Error> {
        let query = format!(
            "SELECT {ENQUIRY_COLUMNS} FROM enquiries ORDER BY created_at DESC"
        );

        sqlx::query_as::<_, Enquiry>(&query)
            .fetch_all(&self.pool)
            .await
    }
}
