use anyhow::{Context, Result};
use chrono::Utc;
use contracts::system::auth::TokenClaims;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand::Rng;

use crate::shared::config;
use crate::system::users::repository::SysUser;

const JWT_SECRET_KEY: &str = "jwt_secret";

/// Claims for a signed-in user, valid for the configured number of hours
pub fn claims_for(user: &SysUser, ttl_hours: i64) -> TokenClaims {
    let now = Utc::now();
    TokenClaims {
        sub: user.id.to_string(),
        username: user.username.clone(),
        name: user.full_name.clone(),
        role: user.role.clone(),
        exp: (now + chrono::Duration::hours(ttl_hours)).timestamp() as usize,
        iat: now.timestamp() as usize,
    }
}

pub fn encode_claims(claims: &TokenClaims, secret: &str) -> Result<String> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .context("Failed to encode JWT token")
}

pub fn decode_claims(token: &str, secret: &str) -> Result<TokenClaims> {
    let token_data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .context("Failed to decode JWT token")?;
    Ok(token_data.claims)
}

/// Generate the HS256 access token returned on login
pub async fn generate_access_token(user: &SysUser) -> Result<String> {
    let claims = claims_for(user, config::current().auth.token_ttl_hours);
    let secret = get_jwt_secret().await?;
    encode_claims(&claims, &secret)
}

/// Validate JWT token and extract claims
pub async fn validate_token(token: &str) -> Result<TokenClaims> {
    let secret = get_jwt_secret().await?;
    decode_claims(token, &secret)
}

/// Get or create JWT secret in sys_settings
pub async fn get_jwt_secret() -> Result<String> {
    match get_jwt_secret_from_db().await {
        Ok(Some(secret)) => Ok(secret),
        Ok(None) | Err(_) => {
            let secret = generate_jwt_secret();
            if let Err(e) = save_jwt_secret_to_db(&secret).await {
                tracing::warn!("Could not persist JWT secret: {}", e);
            }
            Ok(secret)
        }
    }
}

/// 256 random bits, base64 encoded
fn generate_jwt_secret() -> String {
    use base64::{engine::general_purpose, Engine as _};
    let mut rng = rand::thread_rng();
    let random_bytes: Vec<u8> = (0..32).map(|_| rng.gen::<u8>()).collect();
    general_purpose::STANDARD.encode(&random_bytes)
}

async fn get_jwt_secret_from_db() -> Result<Option<String>> {
    use crate::shared::data::db::get_connection;
    use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

    let result = get_connection()
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT value FROM sys_settings WHERE key = ?",
            [JWT_SECRET_KEY.into()],
        ))
        .await?;

    match result {
        Some(row) => {
            let secret: String = row.try_get("", "value")?;
            Ok(Some(secret))
        }
        None => Ok(None),
    }
}

async fn save_jwt_secret_to_db(secret: &str) -> Result<()> {
    use crate::shared::data::db::get_connection;
    use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

    let now = Utc::now().to_rfc3339();

    get_connection()
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "INSERT OR REPLACE INTO sys_settings (key, value, description, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?)",
            [
                JWT_SECRET_KEY.into(),
                secret.to_string().into(),
                "Auto-generated JWT secret for authentication".into(),
                now.clone().into(),
                now.into(),
            ],
        ))
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> SysUser {
        SysUser {
            id: 1,
            username: "admin".into(),
            full_name: "Admin User".into(),
            role: "Administrator".into(),
            password_hash: String::new(),
            is_active: true,
            created_at: None,
        }
    }

    #[test]
    fn token_round_trip_keeps_identity() {
        let secret = generate_jwt_secret();
        let token = encode_claims(&claims_for(&admin(), 24), &secret).unwrap();
        let claims = decode_claims(&token, &secret).unwrap();
        assert_eq!(claims.sub, "1");
        assert_eq!(claims.session_user().name, "Admin User");
        assert_eq!(claims.role, "Administrator");
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = encode_claims(&claims_for(&admin(), 24), "secret-a").unwrap();
        assert!(decode_claims(&token, "secret-b").is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let token = encode_claims(&claims_for(&admin(), -2), "s").unwrap();
        assert!(decode_claims(&token, "s").is_err());
    }

    #[test]
    fn secret_is_32_bytes() {
        use base64::{engine::general_purpose, Engine as _};
        let bytes = general_purpose::STANDARD
            .decode(generate_jwt_secret())
            .unwrap();
        assert_eq!(bytes.len(), 32);
    }
}
