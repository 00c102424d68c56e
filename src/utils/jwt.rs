//! Utilidades JWT
//! 
//! Este módulo contiene funciones helper para emitir y verificar los tokens
//! de sesión de las empresas.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{config::environment::EnvironmentConfig, utils::errors::AppError};

/// Claims del JWT token
#[derive(Debug, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String,   // company_id
    pub email: String, // email de login
    pub exp: usize,    // expiration timestamp
    pub iat: usize,    // issued at timestamp
}

impl JwtClaims {
    pub fn company_id(&self) -> Result<Uuid, AppError> {
        Uuid::parse_str(&self.sub).map_err(|_| AppError::Jwt("ID de empresa inválido".to_string()))
    }
}

/// Configuración de JWT
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration: u64,
}

impl From<&EnvironmentConfig> for JwtConfig {
    fn from(config: &EnvironmentConfig) -> Self {
        Self {
            secret: config.jwt_secret.clone(),
            expiration: config.jwt_expiration,
        }
    }
}

/// Duración máxima aceptada para un token (un año)
pub const MAX_TOKEN_LIFETIME_SECS: i64 = 365 * 24 * 60 * 60;

fn timestamp_claim(timestamp: i64) -> Result<usize, AppError> {
    usize::try_from(timestamp).map_err(|_| AppError::Jwt(format!("Timestamp inválido: {}", timestamp)))
}

/// Generar JWT token para una empresa
pub fn generate_token(company_id: Uuid, email: &str, config: &JwtConfig) -> Result<String, AppError> {
    let now = chrono::Utc::now();
    let lifetime = i64::try_from(config.expiration)
        .ok()
        .filter(|secs| *secs <= MAX_TOKEN_LIFETIME_SECS)
        .map(chrono::Duration::seconds)
        .ok_or_else(|| AppError::Jwt(format!("Duración de token fuera de rango: {}", config.expiration)))?;
    let expires_at = now
        .checked_add_signed(lifetime)
        .ok_or_else(|| AppError::Jwt("Fecha de expiración fuera de rango".to_string()))?;

    let claims = JwtClaims {
        sub: company_id.to_string(),
        email: email.to_string(),
        exp: timestamp_claim(expires_at.timestamp())?,
        iat: timestamp_claim(now.timestamp())?,
    };

    let encoding_key = EncodingKey::from_secret(config.secret.as_ref());

    encode(&Header::default(), &claims, &encoding_key)
        .map_err(|e| AppError::Jwt(format!("Error generando token: {}", e)))
}

/// Verificar y decodificar JWT token
pub fn verify_token(token: &str, config: &JwtConfig) -> Result<JwtClaims, AppError> {
    let decoding_key = DecodingKey::from_secret(config.secret.as_ref());

    let token_data = decode::<JwtClaims>(token, &decoding_key, &Validation::default())
        .map_err(|e| AppError::Jwt(format!("Token inválido: {}", e)))?;

    Ok(token_data.claims)
}

/// Extraer token del header Authorization
pub fn extract_token_from_header(auth_header: &str) -> Result<&str, AppError> {
    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("Header Authorization debe comenzar con 'Bearer '".to_string()))?;

    if token.trim().is_empty() {
        return Err(AppError::Unauthorized("Token no puede estar vacío".to_string()));
    }

    Ok(token.trim())
}
