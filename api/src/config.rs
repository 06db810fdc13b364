use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    /// Base URL of the external AI prediction service
    pub ai_server_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            ai_server_url: env::var("AI_SERVER_URL")
                .unwrap_or_else(|_| "http://localhost:5000".to_string()),
        }
    }
}
