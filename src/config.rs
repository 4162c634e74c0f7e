use crate::{db::MAX_REVIEWS, errors::AppError};

#[derive(Debug, Clone)]
pub struct Config {
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub reviews_limit: usize,
    pub rate_limit_per_minute: u32,
}

impl Config {
    /// Reads `.env` (if present) and then the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| AppError::EnvError(format!("{key} must be set")))
        };

        let supabase_url = require("SUPABASE_URL")?;
        let supabase_anon_key = require("SUPABASE_ANON_KEY")?;

        let port = lookup("PORT")
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(3000);

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .unwrap_or_else(|| "http://localhost:3000".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let reviews_limit = lookup("REVIEWS_LIMIT")
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(MAX_REVIEWS)
            .clamp(1, MAX_REVIEWS);

        let rate_limit_per_minute = lookup("RATE_LIMIT_PER_MINUTE")
            .and_then(|s| s.parse::<u32>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(300);

        Ok(Self {
            supabase_url,
            supabase_anon_key,
            port,
            allowed_origins,
            reviews_limit,
            rate_limit_per_minute,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply() {
        let config = Config::from_lookup(lookup(&[
            ("SUPABASE_URL", "https://x.supabase.co"),
            ("SUPABASE_ANON_KEY", "anon"),
        ]))
        .unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.allowed_origins, vec!["http://localhost:3000"]);
        assert_eq!(config.reviews_limit, 500);
        assert_eq!(config.rate_limit_per_minute, 300);
    }

    #[test]
    fn reviews_limit_is_capped() {
        let config = Config::from_lookup(lookup(&[
            ("SUPABASE_URL", "https://x.supabase.co"),
            ("SUPABASE_ANON_KEY", "anon"),
            ("REVIEWS_LIMIT", "5000"),
            ("ALLOWED_ORIGINS", "https://a.com, https://b.com,"),
        ]))
        .unwrap();

        assert_eq!(config.reviews_limit, 500);
        assert_eq!(config.allowed_origins, vec!["https://a.com", "https://b.com"]);
    }

    #[test]
    fn missing_key_is_an_env_error() {
        let err = Config::from_lookup(lookup(&[("SUPABASE_URL", "https://x.supabase.co")]))
            .unwrap_err();
        assert!(matches!(err, AppError::EnvError(msg) if msg.contains("SUPABASE_ANON_KEY")));
    }
}
