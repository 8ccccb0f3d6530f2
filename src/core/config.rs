use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub registry: RegistryConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

/// Location of the external RUC registry service
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Base URL of the registry API, without trailing slash
    pub base_url: String,
}

impl Config {
    /// Read configuration from the environment. `.env` is loaded by `main` beforehand.
    pub fn from_env() -> Result<Self, String> {
        Ok(Config {
            app: AppConfig::from_env()?,
            registry: RegistryConfig::from_env()?,
        })
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = parse_origins(
            &env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_string()),
        );

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl RegistryConfig {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.apis.net.pe";

    pub fn from_env() -> Result<Self, String> {
        let base_url =
            env::var("RUC_API_BASE_URL").unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_string());

        Self::new(base_url)
    }

    pub fn new(base_url: impl Into<String>) -> Result<Self, String> {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();

        if base_url.is_empty() {
            return Err("RUC_API_BASE_URL must not be empty".to_string());
        }
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(format!(
                "RUC_API_BASE_URL must be an http(s) URL, got '{}'",
                base_url
            ));
        }

        Ok(Self { base_url })
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_base_url_trims_trailing_slash() {
        let config = RegistryConfig::new("http://localhost:8080/").unwrap();
        assert_eq!(config.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_registry_base_url_rejects_non_http() {
        assert!(RegistryConfig::new("").is_err());
        assert!(RegistryConfig::new("ftp://example.com").is_err());
    }

    #[test]
    fn test_registry_default_points_at_public_api() {
        assert_eq!(RegistryConfig::default().base_url, "https://api.apis.net.pe");
    }

    #[test]
    fn test_config_from_env_does_not_need_dotenv() {
        let config = Config::from_env().unwrap();
        assert!(!config.registry.base_url.is_empty());
        assert!(!config.app.cors_allowed_origins.is_empty());
    }

    #[test]
    fn test_parse_origins() {
        assert_eq!(parse_origins("*"), vec!["*"]);
        assert_eq!(
            parse_origins("http://a.pe, http://b.pe,,"),
            vec!["http://a.pe", "http://b.pe"]
        );
    }
}
