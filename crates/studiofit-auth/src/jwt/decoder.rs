//! Token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use tracing::debug;

use studiofit_core::config::auth::AuthConfig;
use studiofit_core::error::AppError;

use super::claims::Claims;

/// The single caller-visible message for every token failure. Signature
/// mismatch, malformed structure, and expiry are deliberately
/// indistinguishable.
const INVALID_TOKEN: &str = "Invalid token";

/// Validates session tokens.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // Expiry is exact: a token is invalid from the first second past exp.
        validation.leeway = 0;

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a token string.
    ///
    /// Verifies the signature and the expiration. Every failure mode folds
    /// into one authentication error so callers cannot probe *why* a token
    /// was rejected, and malformed input can never escape as anything but
    /// that same error.
    pub fn validate(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                debug!(reason = %e, "Token rejected");
                AppError::authentication(INVALID_TOKEN)
            })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use jsonwebtoken::{EncodingKey, Header, encode};

    use studiofit_core::config::auth::AuthConfig;
    use studiofit_entity::principal::Role;

    use super::super::claims::Claims;
    use super::super::encoder::JwtEncoder;
    use super::*;

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret-key-for-unit-tests".to_string(),
            ..AuthConfig::default()
        }
    }

    fn encode_raw(config: &AuthConfig, claims: &Claims) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_issue_validate_round_trip() {
        let config = test_config();
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);

        let issued = encoder.issue("maria@studiofit.local", Role::Instructor).unwrap();
        let claims = decoder.validate(&issued.token).unwrap();

        assert_eq!(claims.identifier(), "maria@studiofit.local");
        assert_eq!(claims.role(), Role::Instructor);
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
    }

    #[test]
    fn test_validate_is_idempotent() {
        let config = test_config();
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);

        let issued = encoder.issue("joao@studiofit.local", Role::Trainee).unwrap();
        let first = decoder.validate(&issued.token).unwrap();
        let second = decoder.validate(&issued.token).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_tampered_payload_rejected() {
        let config = test_config();
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);

        let issued = encoder.issue("maria@studiofit.local", Role::Instructor).unwrap();

        // Mutate one character of the payload segment; the signature no
        // longer matches regardless of whether the result still parses.
        let parts: Vec<&str> = issued.token.split('.').collect();
        assert_eq!(parts.len(), 3);
        let mut payload: Vec<u8> = parts[1].bytes().collect();
        let mid = payload.len() / 2;
        payload[mid] = if payload[mid] == b'A' { b'B' } else { b'A' };
        let tampered = format!(
            "{}.{}.{}",
            parts[0],
            String::from_utf8(payload).unwrap(),
            parts[2]
        );

        assert!(decoder.validate(&tampered).is_err());
    }

    #[test]
    fn test_wrong_key_rejected() {
        let config = test_config();
        let encoder = JwtEncoder::new(&config);

        let other = AuthConfig {
            jwt_secret: "a-completely-different-secret".to_string(),
            ..AuthConfig::default()
        };
        let decoder = JwtDecoder::new(&other);

        let issued = encoder.issue("maria@studiofit.local", Role::Instructor).unwrap();
        assert!(decoder.validate(&issued.token).is_err());
    }

    #[test]
    fn test_malformed_token_rejected_without_panic() {
        let decoder = JwtDecoder::new(&test_config());
        for garbage in ["", "not-a-token", "a.b", "a.b.c.d", "🔥🔥🔥"] {
            assert!(decoder.validate(garbage).is_err());
        }
    }

    #[test]
    fn test_expiry_boundary() {
        let config = test_config();
        let decoder = JwtDecoder::new(&config);
        let now = Utc::now().timestamp();

        // Issued just under 24h ago: still inside the window.
        let in_window = Claims {
            sub: "joao@studiofit.local".to_string(),
            role: Role::Trainee,
            iat: now - (24 * 60 * 60 - 5),
            exp: now + 5,
        };
        assert!(decoder.validate(&encode_raw(&config, &in_window)).is_ok());

        // Issued just over 24h ago: expired.
        let expired = Claims {
            sub: "joao@studiofit.local".to_string(),
            role: Role::Trainee,
            iat: now - (24 * 60 * 60 + 5),
            exp: now - 5,
        };
        assert!(decoder.validate(&encode_raw(&config, &expired)).is_err());
    }

    #[test]
    fn test_failure_message_is_uniform() {
        let config = test_config();
        let decoder = JwtDecoder::new(&config);

        let malformed = decoder.validate("garbage").unwrap_err();

        let other = AuthConfig {
            jwt_secret: "a-completely-different-secret".to_string(),
            ..AuthConfig::default()
        };
        let issued = JwtEncoder::new(&other)
            .issue("maria@studiofit.local", Role::Instructor)
            .unwrap();
        let bad_signature = decoder.validate(&issued.token).unwrap_err();

        let now = Utc::now().timestamp();
        let expired_claims = Claims {
            sub: "maria@studiofit.local".to_string(),
            role: Role::Instructor,
            iat: now - 100,
            exp: now - 50,
        };
        let expired = decoder
            .validate(&encode_raw(&config, &expired_claims))
            .unwrap_err();

        assert_eq!(malformed.to_string(), bad_signature.to_string());
        assert_eq!(malformed.to_string(), expired.to_string());
    }
}
