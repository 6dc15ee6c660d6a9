use std::env;
use std::fmt;

pub const DEV_JWT_SECRET: &str = "development-secret-change-me";
pub const MAX_TOKEN_TTL_SECS: i64 = u32::MAX as i64;

#[derive(Clone, Debug)]
pub struct Config {
    pub api_host: String,
    pub api_port: u16,
    pub frontend_url: Option<String>,
    pub database_url: String,
    pub token: TokenSettings,
    pub is_production: bool,
}

/// Signing key and lifetime for session tokens.
#[derive(Clone)]
pub struct TokenSettings {
    pub secret: String,
    pub ttl_secs: i64,
}

impl fmt::Debug for TokenSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSettings")
            .field("secret", &"<redacted>")
            .field("ttl_secs", &self.ttl_secs)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_host = lookup("API_HOST").unwrap_or_else(|| "127.0.0.1".into());
        let api_port = lookup("API_PORT")
            .and_then(|s| s.parse().ok())
            .unwrap_or(8000);
        let frontend_url = lookup("FRONTEND_URL").filter(|s| !s.trim().is_empty());
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| "sqlite://students.db".into());
        // HS256 shared secret
        let secret = lookup("JWT_SECRET").unwrap_or_else(|| DEV_JWT_SECRET.into());
        let ttl_secs = lookup("JWT_EXPIRES_SECS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(60 * 60);
        if !(1..=MAX_TOKEN_TTL_SECS).contains(&ttl_secs) {
            anyhow::bail!("JWT_EXPIRES_SECS must be between 1 and {}", MAX_TOKEN_TTL_SECS);
        }
        let is_production = matches!(
            lookup("RUST_ENV").as_deref(),
            Some("production") | Some("prod")
        );

        if is_production {
            if !frontend_url
                .as_deref()
                .is_some_and(|u| u.starts_with("http"))
            {
                anyhow::bail!(
                    "FRONTEND_URL must be set to a full origin in production (e.g., https://app.example.com)"
                );
            }
            if secret == DEV_JWT_SECRET || secret.len() < 16 {
                anyhow::bail!("JWT_SECRET must be set to a strong secret in production");
            }
        }

        Ok(Self {
            api_host,
            api_port,
            frontend_url,
            database_url,
            token: TokenSettings { secret, ttl_secs },
            is_production,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn defaults_target_local_sqlite() {
        let cfg = load(&[]).unwrap();
        assert_eq!(cfg.api_host, "127.0.0.1");
        assert_eq!(cfg.api_port, 8000);
        assert_eq!(cfg.database_url, "sqlite://students.db");
        assert_eq!(cfg.token.ttl_secs, 3600);
        assert!(!cfg.is_production);
    }

    #[test]
    fn debug_output_hides_secret() {
        let cfg = load(&[("JWT_SECRET", "super-secret-value")]).unwrap();
        let printed = format!("{:?}", cfg);
        assert!(!printed.contains("super-secret-value"));
        assert!(printed.contains("<redacted>"));
    }

    #[test]
    fn rejects_non_positive_ttl() {
        assert!(load(&[("JWT_EXPIRES_SECS", "0")]).is_err());
        assert!(load(&[("JWT_EXPIRES_SECS", "-5")]).is_err());
    }

    #[test]
    fn caps_ttl() {
        let max = MAX_TOKEN_TTL_SECS.to_string();
        let cfg = load(&[("JWT_EXPIRES_SECS", max.as_str())]).unwrap();
        assert_eq!(cfg.token.ttl_secs, MAX_TOKEN_TTL_SECS);
        let over = (MAX_TOKEN_TTL_SECS + 1).to_string();
        assert!(load(&[("JWT_EXPIRES_SECS", over.as_str())]).is_err());
        let huge = i64::MAX.to_string();
        assert!(load(&[("JWT_EXPIRES_SECS", huge.as_str())]).is_err());
    }

    #[test]
    fn production_requires_strong_secret_and_origin() {
        assert!(load(&[("RUST_ENV", "production")]).is_err());
        assert!(
            load(&[
                ("RUST_ENV", "prod"),
                ("FRONTEND_URL", "https://school.example.com"),
            ])
            .is_err()
        );
        let cfg = load(&[
            ("RUST_ENV", "production"),
            ("FRONTEND_URL", "https://school.example.com"),
            ("JWT_SECRET", "0123456789abcdef0123"),
        ])
        .unwrap();
        assert!(cfg.is_production);
    }
}
