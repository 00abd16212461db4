use async_trait::async_trait;
use serde_json::json;

use crate::{db::db::DBClient, models::agentmodel::Agent};

const AGENT_COLUMNS: &str = r#"
    id, name, email, phone, specialization, areas, experience,
    rating, review_count, image, bio, created_at
"#;

#[async_trait]
pub trait AgentExt {
    async fn get_agents(&self) -> Result<Vec<Agent>, sqlx::Error>;

    async fn get_agent_by_id(&self, agent_id: i32) -> Result<Option<Agent>, sqlx::Error>;

    async fn create_agent(&self, agent: NewAgent) -> Result<Agent, sqlx::Error>;
}

/// Insert shape used by the seed task.
#[derive(Debug, Clone)]
pub struct NewAgent {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub specialization: Option<String>,
    pub areas: Option<Vec<String>>,
    pub experience: Option<i32>,
    pub rating: Option<f64>,
    pub review_count: Option<i32>,
    pub image: Option<String>,
    pub bio: Option<String>,
}

#[async_trait]
impl AgentExt for DBClient {
    async fn get_agents(&self) -> Result<Vec<Agent>, sqlx::Error> {
        let query = format!("SELECT {AGENT_COLUMNS} FROM agents");

        sqlx::query_as::<_, Agent>(&query)
            .fetch_all(&self.pool)
            .await
    }

    async fn get_agent_by_id(&self, agent_id: i32) -> Result<Option<Agent>, sqlx::Error> {
        let query = format!("SELECT {AGENT_COLUMNS} FROM agents WHERE id = $1");

        sqlx::query_as::<_, Agent>(&query)
            .bind(agent_id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn create_agent(&self, agent: NewAgent) -> Result<Agent, sqlx::Error> {
        let query = format!(
            r#"
            INSERT INTO agents (
                name, email, phone, specialization, areas, experience,
                rating, review_count, image, bio
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {AGENT_COLUMNS}
            "#
        );

        sqlx::query_as::<_, Agent>(&query)
            .bind(&agent.name)
            .bind(&agent.email)
            .bind(&agent.phone)
            .bind(&agent.specialization)
            .bind(agent.areas.as_ref().map(|a| json!(a)))
            .bind(agent.experience)
            .bind(agent.rating)
            .bind(agent.review_count)
            .bind(&agent.image)
            .bind(&agent.bio)
            .fetch_one(&self.pool)
            .await
    }
}
