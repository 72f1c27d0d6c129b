use anyhow::{Context, Result};
use chrono::Utc;
use contracts::system::auth::TokenClaims;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand::Rng;

const ACCESS_TOKEN_LIFETIME_HOURS: i64 = 24;

/// Encode claims with the given secret (HS256)
pub fn encode_token(claims: &TokenClaims, secret: &str) -> Result<String> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .context("Failed to encode JWT token")
}

/// Decode and validate a token with the given secret
pub fn decode_token(token: &str, secret: &str) -> Result<TokenClaims> {
    let token_data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .context("Failed to decode JWT token")?;
    Ok(token_data.claims)
}

/// Generate JWT access token for the admin session
pub async fn generate_access_token(user_id: &str, username: &str, is_admin: bool) -> Result<String> {
    let now = Utc::now();
    let exp = (now + chrono::Duration::hours(ACCESS_TOKEN_LIFETIME_HOURS)).timestamp() as usize;
    let iat = now.timestamp() as usize;

    let claims = TokenClaims {
        sub: user_id.to_string(),
        username: username.to_string(),
        is_admin,
        exp,
        iat,
    };

    let secret = get_jwt_secret().await?;
    encode_token(&claims, &secret)
}

/// Validate JWT token and extract claims
pub async fn validate_token(token: &str) -> Result<TokenClaims> {
    let secret = get_jwt_secret().await?;
    decode_token(token, &secret)
}

/// Get or create JWT secret from sys_settings
pub async fn get_jwt_secret() -> Result<String> {
    match get_jwt_secret_from_db().await {
        Ok(Some(secret)) => Ok(secret),
        Ok(None) | Err(_) => {
            let secret = generate_jwt_secret();
            let _ = save_jwt_secret_to_db(&secret).await;
            Ok(secret)
        }
    }
}

/// Generate a cryptographically secure JWT secret (256 bits)
fn generate_jwt_secret() -> String {
    use base64::{engine::general_purpose, Engine as _};
    let mut rng = rand::thread_rng();
    let random_bytes: Vec<u8> = (0..32).map(|_| rng.gen::<u8>()).collect();
    general_purpose::STANDARD.encode(&random_bytes)
}

const JWT_SECRET_KEY: &str = "jwt_secret";

async fn get_jwt_secret_from_db() -> Result<Option<String>> {
    use crate::shared::data::db::get_connection;
    use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

    let rows = get_connection()
        .query_all(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT value FROM sys_settings WHERE key = ?",
            [JWT_SECRET_KEY.into()],
        ))
        .await?;

    match rows.first() {
        Some(row) => Ok(Some(row.try_get("", "value")?)),
        None => Ok(None),
    }
}

async fn save_jwt_secret_to_db(secret: &str) -> Result<()> {
    use crate::shared::data::db::get_connection;
    use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

    get_connection()
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "INSERT OR REPLACE INTO sys_settings (key, value) VALUES (?, ?)",
            [JWT_SECRET_KEY.into(), secret.into()],
        ))
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECRET: &str = "test-secret-for-unit-tests";

    fn claims(exp: usize) -> TokenClaims {
        TokenClaims {
            sub: "user-1".to_string(),
            username: "admin".to_string(),
            is_admin: true,
            exp,
            iat: Utc::now().timestamp() as usize,
        }
    }

    #[test]
    fn test_token_round_trip() {
        let exp = (Utc::now() + chrono::Duration::hours(1)).timestamp() as usize;
        let token = encode_token(&claims(exp), TEST_SECRET).unwrap();
        let decoded = decode_token(&token, TEST_SECRET).unwrap();
        assert_eq!(decoded.sub, "user-1");
        assert_eq!(decoded.username, "admin");
        assert!(decoded.is_admin);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let exp = (Utc::now() + chrono::Duration::hours(1)).timestamp() as usize;
        let token = encode_token(&claims(exp), TEST_SECRET).unwrap();
        assert!(decode_token(&token, "another-secret").is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let exp = (Utc::now() - chrono::Duration::hours(2)).timestamp() as usize;
        let token = encode_token(&claims(exp), TEST_SECRET).unwrap();
        assert!(decode_token(&token, TEST_SECRET).is_err());
    }
}
