use anyhow::{Result, anyhow};

#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub(crate) database_url: String,
    pub(crate) http_addr: String,
    pub(crate) cors_origins: Vec<String>,
    pub(crate) log_level: String,
}

impl Settings {
    /// Read once at startup. A missing database credential is an
    /// unrecoverable startup failure; everything else has a default.
    pub(crate) fn from_env() -> Result<Self> {
        let database_url = match std::env::var("DATABASE_URL") {
            Ok(url) if !url.trim().is_empty() => url.trim().to_string(),
            _ => compose_database_url()?,
        };

        let http_addr = std::env::var("HTTP_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let cors_origins = parse_cors_origins(
            std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:3000".to_string()),
        );
        let log_level = std::env::var("LOG_LEVEL")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            database_url,
            http_addr,
            cors_origins,
            log_level,
        })
    }
}

/// Discrete credential parts, matching the deployment environment this
/// service inherits. `DATABASE_URL` takes precedence when set.
fn compose_database_url() -> Result<String> {
    let user = get_required("APP_DB_USERNAME")?;
    let password = get_required("APP_DB_PASSWORD")?;
    let dbname = get_required("APP_DB_NAME")?;
    let host = std::env::var("APP_DB_HOST").unwrap_or_else(|_| "localhost".to_string());
    let port = std::env::var("APP_DB_PORT").unwrap_or_else(|_| "5432".to_string());

    Ok(format!("postgres://{user}:{password}@{host}:{port}/{dbname}"))
}

fn get_required(key: &str) -> Result<String> {
    let value =
        std::env::var(key).map_err(|_| anyhow!("{key} is required when DATABASE_URL is unset"))?;
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(anyhow!("{key} must not be empty"));
    }
    Ok(value)
}

fn parse_cors_origins(raw: String) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::parse_cors_origins;

    #[test]
    fn parse_cors_origins_splits_and_trims() {
        let origins =
            parse_cors_origins("http://localhost:3000, http://127.0.0.1:3000 ,".to_string());
        assert_eq!(
            origins,
            vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string()
            ]
        );
    }

    #[test]
    fn parse_cors_origins_drops_empty_entries() {
        assert!(parse_cors_origins(",, ,".to_string()).is_empty());
    }
}
