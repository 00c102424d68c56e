//! Middleware de autenticación JWT
//! 
//! Este módulo extrae el bearer token, lo verifica e inyecta la empresa
//! autenticada en las extensions de la request.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::{
    state::AppState,
    utils::{
        errors::AppError,
        jwt::{extract_token_from_header, verify_token},
    },
};

/// Empresa autenticada que se inyecta en las requests
#[derive(Debug, Clone)]
pub struct AuthenticatedCompany {
    pub company_id: Uuid,
    pub email: String,
}

/// Middleware de autenticación JWT
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Authorization token required".to_string()))?;

    let token = extract_token_from_header(auth_header)?;
    let claims = verify_token(token, &state.jwt_config())?;

    let company = AuthenticatedCompany {
        company_id: claims.company_id()?,
        email: claims.email,
    };

    request.extensions_mut().insert(company);

    Ok(next.run(request).await)
}
