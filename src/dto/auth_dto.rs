use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
    pub token_type: &'static str,
    pub expires_in: u64,
    pub company_id: Uuid,
    pub company_name: String,
}

impl LoginResponse {
    pub fn bearer(token: String, expires_in: u64, company_id: Uuid, company_name: String) -> Self {
        Self {
            success: true,
            token,
            token_type: "Bearer",
            expires_in,
            company_id,
            company_name,
        }
    }
}
