#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub session_maxage: i64,
    pub gemini_api_key: String,
    pub seed_on_startup: bool,
}

impl Config {
    pub fn init() -> Config {
        let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

        // Session lifetime in minutes
        let session_maxage = std::env::var("SESSION_MAXAGE")
            .unwrap_or_else(|_| "1440".to_string())
            .parse::<i64>()
            .expect("SESSION_MAXAGE must be a number of minutes");

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u16>()
            .expect("PORT must be a valid port number");

        let gemini_api_key = std::env::var("GEMINI_API_KEY").unwrap_or_else(|_| "".to_string());

        let seed_on_startup = std::env::var("SEED_ON_STARTUP")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        Config {
            database_url,
            port,
            session_maxage,
            gemini_api_key,
            seed_on_startup,
        }
    }
}
