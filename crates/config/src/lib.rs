use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: String,
    pub http_host: String,
    pub http_port: u16,
}

impl Config {
    /// Load configuration from the environment, reading a `.env` file first
    /// if one exists. Every setting has a development default.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Config {
            database_path: env::var("DATABASE_PATH").unwrap_or_else(|_| "rolodex.db".to_string()),

            http_host: env::var("HTTP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),

            http_port: env::var("HTTP_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
        }
    }
}
