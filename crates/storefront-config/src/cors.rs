use std::env;

/// `allowed_origins: None` means any origin is accepted.
#[derive(Clone, Debug, Default)]
pub struct CorsConfig {
    pub allowed_origins: Option<Vec<String>>,
}

impl CorsConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|origins| !origins.is_empty() && !origins.iter().any(|o| o == "*"));

        Self { allowed_origins }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_allows_any_origin() {
        assert!(CorsConfig::from_lookup(|_| None).allowed_origins.is_none());
    }

    #[test]
    fn test_wildcard_allows_any_origin() {
        let config = CorsConfig::from_lookup(|_| Some("*".to_string()));
        assert!(config.allowed_origins.is_none());
    }

    #[test]
    fn test_parses_origin_list() {
        let config = CorsConfig::from_lookup(|_| {
            Some("https://shop.example.com, http://localhost:5173,".to_string())
        });
        assert_eq!(
            config.allowed_origins,
            Some(vec![
                "https://shop.example.com".to_string(),
                "http://localhost:5173".to_string()
            ])
        );
    }
}
