// Process configuration loaded once at startup
//
// Everything that used to be ambient (database URL, signing secret) is
// collected here and injected into the services that need it, so tests
// can construct state with fake secrets and pools.

/// Runtime configuration for the API process
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub host: String,
    pub port: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// DATABASE_URL and JWT_SECRET are required; HOST and PORT fall
    /// back to 0.0.0.0:8080.
    pub fn from_env() -> Result<Self, String> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| "DATABASE_URL must be set in environment".to_string())?;
        let jwt_secret = std::env::var("JWT_SECRET")
            .map_err(|_| "JWT_SECRET must be set in environment".to_string())?;
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());

        Ok(Self {
            database_url,
            jwt_secret,
            host,
            port,
        })
    }

    /// Socket address string for the HTTP listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
