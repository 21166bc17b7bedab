use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub database_path: String,
    /// Directory holding the game client, served for every path the API doesn't claim
    pub static_dir: String,
    /// `*` allows any origin
    pub allowed_origins: Vec<String>,
    pub environment: String,
    pub log_requests: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if it exists (development)
        dotenvy::dotenv().ok();

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let server_port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|_| "Invalid PORT")?;

        let database_path =
            env::var("DATABASE_PATH").unwrap_or_else(|_| "leaderboard.db".to_string());

        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "public".to_string());

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        let log_requests = env::var("LOG_REQUESTS")
            .unwrap_or_else(|_| "true".to_string())
            .parse()
            .map_err(|_| "Invalid LOG_REQUESTS (expected true or false)")?;

        Ok(Config {
            server_host,
            server_port,
            database_path,
            static_dir,
            allowed_origins,
            environment,
            log_requests,
        })
    }

    /// Get server address as string
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == "*")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_origins(origins: &[&str]) -> Config {
        Config {
            server_host: "127.0.0.1".to_string(),
            server_port: 3000,
            database_path: "leaderboard.db".to_string(),
            static_dir: "public".to_string(),
            allowed_origins: origins.iter().map(|s| s.to_string()).collect(),
            environment: "test".to_string(),
            log_requests: false,
        }
    }

    #[test]
    fn test_server_address() {
        let config = config_with_origins(&["*"]);
        assert_eq!(config.server_address(), "127.0.0.1:3000");
    }

    #[test]
    fn test_allows_any_origin() {
        assert!(config_with_origins(&["*"]).allows_any_origin());
        assert!(config_with_origins(&[]).allows_any_origin());
        assert!(!config_with_origins(&["http://localhost:5173"]).allows_any_origin());
    }
}
