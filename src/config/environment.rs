//! Configuración de variables de entorno
//! 
//! Este módulo maneja la configuración del entorno y variables de configuración.

use anyhow::{bail, Context, Result};
use std::env;

use crate::utils::jwt::MAX_TOKEN_LIFETIME_SECS;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub database_url: String,
    pub jwt_secret: String,
    /// Duración del token en segundos
    pub jwt_expiration: u64,
    pub cors_origins: Vec<String>,
    /// URL pública del frontend, se codifica en las etiquetas QR
    pub public_app_url: String,
}

impl EnvironmentConfig {
    /// Leer la configuración desde las variables de entorno
    ///
    /// `DATABASE_URL` y `JWT_SECRET` son obligatorias; el resto tiene valores por defecto.
    pub fn from_env() -> Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .context("PORT must be a valid number")?;

        let jwt_expiration = parse_jwt_expiration(
            &env::var("JWT_EXPIRATION").unwrap_or_else(|_| "86400".to_string()),
        )?;

        Ok(Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            port,
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            jwt_secret: env::var("JWT_SECRET").context("JWT_SECRET must be set")?,
            jwt_expiration,
            cors_origins: parse_origins(&env::var("CORS_ORIGINS").unwrap_or_default()),
            public_app_url: env::var("PUBLIC_APP_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
        })
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la dirección de escucha del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Segundos de vida del token: entero positivo de como mucho un año
fn parse_jwt_expiration(raw: &str) -> Result<u64> {
    let secs: i64 = raw
        .trim()
        .parse()
        .context("JWT_EXPIRATION must be a valid number")?;

    if secs <= 0 || secs > MAX_TOKEN_LIFETIME_SECS {
        bail!("JWT_EXPIRATION must be between 1 and {} seconds", MAX_TOKEN_LIFETIME_SECS);
    }

    Ok(secs as u64)
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
