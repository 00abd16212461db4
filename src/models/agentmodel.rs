use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Agent {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub specialization: Option<String>,
    pub areas: Option<JsonValue>,
    pub experience: Option<i32>,
    pub rating: Option<f64>,
    pub review_count: Option<i32>,
    pub image: Option<String>,
    pub bio: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}
