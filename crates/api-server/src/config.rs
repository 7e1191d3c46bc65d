//! Server configuration
//!
//! Cross-origin policy is resolved once at startup from the environment and
//! injected into the router as a plain struct, rather than consulted per
//! request.

use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

const DEFAULT_FRONTEND_ORIGIN: &str = "http://localhost:5173";

/// Cross-origin allow-list for the REST API
#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allow_all_in_dev: bool,
}

impl CorsConfig {
    /// Build the config from `TODO_ALLOWED_ORIGINS` (comma-separated) and
    /// `TODO_CORS_ALLOW_ALL`.
    pub fn from_env() -> Self {
        let allowed_origins = std::env::var("TODO_ALLOWED_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .unwrap_or_else(|_| vec![DEFAULT_FRONTEND_ORIGIN.to_string()]);

        Self {
            allowed_origins,
            allow_all_in_dev: env_flag("TODO_CORS_ALLOW_ALL", false),
        }
    }

    /// Turn the config into a tower-http CORS layer
    ///
    /// Origins that are not valid header values are skipped with a warning,
    /// so one bad entry does not take the allow-list down with it.
    pub fn layer(&self) -> CorsLayer {
        if self.allow_all_in_dev {
            return CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
        }

        let origins: Vec<HeaderValue> = self
            .allowed_origins
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                    None
                }
            })
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn env_flag(name: &str, default: bool) -> bool {
    match std::env::var(name) {
        Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => default,
        },
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_splits_and_trims() {
        let origins = parse_origins("http://localhost:5173, https://todo.example.com ,");
        assert_eq!(
            origins,
            vec![
                "http://localhost:5173".to_string(),
                "https://todo.example.com".to_string(),
            ]
        );
    }

    #[test]
    fn test_parse_origins_empty_input() {
        assert!(parse_origins("").is_empty());
        assert!(parse_origins(" , ,").is_empty());
    }
}
