use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::application::ports::token_port::{IssuedToken, TokenError, TokenPort};
use crate::bootstrap::config::TokenSettings;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// HS256 tokens signed with the configured secret.
pub struct JwtTokenService {
    ttl_secs: i64,
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl JwtTokenService {
    pub fn new(settings: &TokenSettings) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        Self {
            ttl_secs: settings.ttl_secs,
            encoding: EncodingKey::from_secret(settings.secret.as_bytes()),
            decoding: DecodingKey::from_secret(settings.secret.as_bytes()),
            validation,
        }
    }

    fn issue_at(&self, username: &str, now: i64) -> anyhow::Result<IssuedToken> {
        let exp = now
            .checked_add(self.ttl_secs)
            .ok_or_else(|| anyhow::anyhow!("token lifetime overflows the expiry timestamp"))?;
        let claims = Claims {
            sub: username.to_string(),
            iat: now,
            exp,
        };
        let token = jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| anyhow::anyhow!("jwt encode failed: {}", e))?;
        Ok(IssuedToken {
            token,
            expires_in: self.ttl_secs,
            expires_at: claims.exp,
        })
    }
}

impl TokenPort for JwtTokenService {
    fn issue(&self, username: &str) -> anyhow::Result<IssuedToken> {
        self.issue_at(username, Utc::now().timestamp())
    }

    fn verify(&self, token: &str) -> Result<String, TokenError> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed,
            })?;
        Ok(data.claims.sub)
    }
}
