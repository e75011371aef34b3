use std::env;

/// Runtime configuration for the upload relay
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Destination bucket for relayed uploads
    pub bucket_name: String,

    /// HTTP listener port (default: 8080)
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bucket_name: "your-bucket-name".to_string(),
            port: 8080,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let default = Self::default();

        Self {
            bucket_name: env::var("BUCKET_NAME")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or(default.bucket_name),

            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.port),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.bucket_name, "your-bucket-name");
        assert_eq!(config.port, 8080);
    }
}
