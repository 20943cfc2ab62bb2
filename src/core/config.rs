use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::features::locations::NotFoundPolicy;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub data: DataConfig,
    pub lookup: LookupConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

/// Where the hierarchy comes from at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// Built-in sample hierarchy compiled into the binary
    Embedded,
    /// ug-locale JSON files fetched once over HTTP
    Remote,
}

impl FromStr for DataSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "embedded" => Ok(Self::Embedded),
            "remote" => Ok(Self::Remote),
            other => Err(format!(
                "DATA_SOURCE must be 'embedded' or 'remote', got '{}'",
                other
            )),
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => write!(f, "embedded"),
            Self::Remote => write!(f, "remote"),
        }
    }
}

/// What to do when the hierarchy cannot be loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadFailurePolicy {
    /// Abort startup
    Fail,
    /// Log and serve an empty hierarchy
    Degrade,
}

impl FromStr for LoadFailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fail" => Ok(Self::Fail),
            "degrade" => Ok(Self::Degrade),
            other => Err(format!(
                "DATA_LOAD_FAILURE must be 'fail' or 'degrade', got '{}'",
                other
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DataConfig {
    pub source: DataSource,
    pub base_url: String,
    pub fetch_timeout: Duration,
    pub on_failure: LoadFailurePolicy,
}

#[derive(Debug, Clone)]
pub struct LookupConfig {
    pub not_found_policy: NotFoundPolicy,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            data: DataConfig::from_env()?,
            lookup: LookupConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

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

impl DataConfig {
    pub const DEFAULT_BASE_URL: &'static str =
        "https://raw.githubusercontent.com/paulgrammer/ug-locale/main";
    const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

    pub fn from_env() -> Result<Self, String> {
        let source = env::var("DATA_SOURCE")
            .unwrap_or_else(|_| "embedded".to_string())
            .parse::<DataSource>()?;

        let base_url = env::var("DATA_BASE_URL")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let fetch_timeout_secs = env::var("DATA_FETCH_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_FETCH_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DATA_FETCH_TIMEOUT_SECS must be a valid number".to_string())?;

        let on_failure = env::var("DATA_LOAD_FAILURE")
            .unwrap_or_else(|_| "fail".to_string())
            .parse::<LoadFailurePolicy>()?;

        Ok(Self {
            source,
            base_url,
            fetch_timeout: Duration::from_secs(fetch_timeout_secs),
            on_failure,
        })
    }

    /// Human-readable origin of the dataset, reported by the info endpoints
    pub fn source_label(&self) -> String {
        match self.source {
            DataSource::Embedded => "embedded sample dataset".to_string(),
            DataSource::Remote => self.base_url.clone(),
        }
    }
}

impl LookupConfig {
    pub fn from_env() -> Result<Self, String> {
        let not_found_policy = env::var("NOT_FOUND_POLICY")
            .unwrap_or_else(|_| "strict".to_string())
            .parse::<NotFoundPolicy>()?;

        Ok(Self { not_found_policy })
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Uganda Locale API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "2.0.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION").unwrap_or_else(|_| {
            "Lookup API for Uganda administrative divisions: districts, counties, sub-counties, parishes and villages".to_string()
        });

        Ok(Self {
            title,
            version,
            description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_source_parse() {
        assert_eq!("embedded".parse::<DataSource>(), Ok(DataSource::Embedded));
        assert_eq!(" Remote ".parse::<DataSource>(), Ok(DataSource::Remote));
        assert!("postgres".parse::<DataSource>().is_err());
    }

    #[test]
    fn test_load_failure_policy_parse() {
        assert_eq!("fail".parse::<LoadFailurePolicy>(), Ok(LoadFailurePolicy::Fail));
        assert_eq!(
            "DEGRADE".parse::<LoadFailurePolicy>(),
            Ok(LoadFailurePolicy::Degrade)
        );
        assert!("retry".parse::<LoadFailurePolicy>().is_err());
    }

    #[test]
    fn test_source_label() {
        let mut data = DataConfig {
            source: DataSource::Embedded,
            base_url: DataConfig::DEFAULT_BASE_URL.to_string(),
            fetch_timeout: Duration::from_secs(30),
            on_failure: LoadFailurePolicy::Fail,
        };
        assert_eq!(data.source_label(), "embedded sample dataset");

        data.source = DataSource::Remote;
        assert_eq!(data.source_label(), DataConfig::DEFAULT_BASE_URL);
    }
}
