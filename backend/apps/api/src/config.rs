//! Server Configuration
//!
//! Everything the process needs from its environment, read once at start-up.
//! Missing secrets are start-up errors; nothing falls back to a built-in
//! credential.

use anyhow::{Context, bail};
use auth::application::config::{AuthConfig, JwtConfig};
use axum::http::HeaderValue;
use std::env;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

pub struct ServerConfig {
    pub port: u16,
    pub database_url: String,
    pub frontend_origins: Vec<HeaderValue>,
    pub auth: AuthConfig,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup (the process environment
    /// in production, a map in tests). Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &str| get(key).with_context(|| format!("{key} must be set"));

        let mut jwt = JwtConfig::new(
            require("AUTHENTICATION_JWT_SECRET")?,
            require("AUTHENTICATION_JWT_ISSUER")?,
            require("AUTHENTICATION_JWT_AUDIENCE")?,
        )?;

        if let Some(algorithm) = get("AUTHENTICATION_JWT_ALGORITHM") {
            jwt = jwt.with_algorithm(JwtConfig::parse_algorithm(&algorithm)?);
        }

        if let Some(days) = get("AUTHENTICATION_JWT_EXPIRY_PERIOD") {
            let days: u64 = days
                .trim()
                .parse()
                .with_context(|| format!("AUTHENTICATION_JWT_EXPIRY_PERIOD is not a number of days: {days}"))?;
            jwt = jwt.with_token_ttl_days(days)?;
        }

        let mut auth = AuthConfig::new(require("CLIENT_AUTHORIZATION_TOKEN")?, jwt)?;

        if let Some(header) = get("CLIENT_AUTHORIZATION_HEADER") {
            auth = auth.with_client_authorization_header(&header)?;
        }

        if let Some(pepper) = get("PASSWORD_PEPPER") {
            auth = auth.with_password_pepper(pepper);
        }

        let port = match get("PORT") {
            Some(port) => port
                .trim()
                .parse()
                .with_context(|| format!("PORT is not a valid port: {port}"))?,
            None => DEFAULT_PORT,
        };

        let origins = get("FRONTEND_ORIGINS").unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string());
        let frontend_origins = origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(|origin| {
                origin
                    .parse::<HeaderValue>()
                    .with_context(|| format!("FRONTEND_ORIGINS contains an invalid origin: {origin:?}"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        if frontend_origins.is_empty() {
            bail!("FRONTEND_ORIGINS contains no valid origin");
        }

        Ok(Self {
            port,
            database_url: require("DATABASE_URL")?,
            frontend_origins,
            auth,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn base_env() -> HashMap<&'static str, String> {
        HashMap::from([
            ("AUTHENTICATION_JWT_SECRET", "jwt-secret".to_string()),
            ("AUTHENTICATION_JWT_ISSUER", "kalorie-api".to_string()),
            ("AUTHENTICATION_JWT_AUDIENCE", "kalorie-app".to_string()),
            ("CLIENT_AUTHORIZATION_TOKEN", "s3cret".to_string()),
            ("DATABASE_URL", "postgres://localhost/kalorie".to_string()),
        ])
    }

    fn load(env: &HashMap<&'static str, String>) -> anyhow::Result<ServerConfig> {
        ServerConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&base_env()).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.frontend_origins.len(), 2);
        assert_eq!(
            config.auth.client_authorization_header.as_str(),
            "x-app-client-authorization-token"
        );
        assert_eq!(
            config.auth.jwt.algorithm,
            JwtConfig::parse_algorithm("HS256").unwrap()
        );
        assert_eq!(config.auth.jwt.token_ttl.as_secs(), 90 * 24 * 60 * 60);
        assert!(config.auth.pepper().is_none());
    }

    #[test]
    fn test_overrides() {
        let mut env = base_env();
        env.insert("PORT", "8080".to_string());
        env.insert("AUTHENTICATION_JWT_ALGORITHM", "HS512".to_string());
        env.insert("AUTHENTICATION_JWT_EXPIRY_PERIOD", "30".to_string());
        env.insert("CLIENT_AUTHORIZATION_HEADER", "X-Kalorie-Client".to_string());
        env.insert("PASSWORD_PEPPER", "pepper".to_string());
        env.insert("FRONTEND_ORIGINS", "https://app.kalorie.ai, ,https://kalorie.ai".to_string());

        let config = load(&env).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(
            config.auth.jwt.algorithm,
            JwtConfig::parse_algorithm("HS512").unwrap()
        );
        assert_eq!(config.auth.jwt.token_ttl.as_secs(), 30 * 24 * 60 * 60);
        assert_eq!(config.auth.client_authorization_header.as_str(), "x-kalorie-client");
        assert_eq!(config.auth.pepper(), Some(&b"pepper"[..]));
        assert_eq!(config.frontend_origins.len(), 2);
    }

    #[test]
    fn test_missing_secrets_fail() {
        for key in [
            "AUTHENTICATION_JWT_SECRET",
            "CLIENT_AUTHORIZATION_TOKEN",
            "DATABASE_URL",
        ] {
            let mut env = base_env();
            env.remove(key);
            let err = load(&env).err().unwrap();
            assert!(err.to_string().contains(key), "{key}: {err}");

            let mut env = base_env();
            env.insert(key, "  ".to_string());
            assert!(load(&env).is_err(), "blank {key} should be rejected");
        }
    }

    #[test]
    fn test_invalid_values_fail() {
        let cases = [
            ("AUTHENTICATION_JWT_ALGORITHM", "RS256"),
            ("AUTHENTICATION_JWT_EXPIRY_PERIOD", "ninety"),
            ("AUTHENTICATION_JWT_EXPIRY_PERIOD", "0"),
            ("PORT", "70000"),
            ("CLIENT_AUTHORIZATION_HEADER", "not a header"),
            ("FRONTEND_ORIGINS", " , "),
        ];
        for (key, value) in cases {
            let mut env = base_env();
            env.insert(key, value.to_string());
            assert!(load(&env).is_err(), "{key}={value} should be rejected");
        }
    }

    #[test]
    fn test_malformed_origin_names_the_value() {
        let mut env = base_env();
        env.insert(
            "FRONTEND_ORIGINS",
            "https://app.kalorie.ai,https://bad\u{7f}origin".to_string(),
        );
        let err = load(&env).err().unwrap();
        let message = format!("{err:#}");
        assert!(message.contains("FRONTEND_ORIGINS"), "{message}");
        assert!(message.contains("bad"), "{message}");
    }
}
