use axum::{
    extract::State,
    routing::{get, post},
    Extension, Json, Router,
};
use crate::controllers::company_controller::CompanyController;
use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::dto::company_dto::{ApiResponse, CompanyResponse, RegisterCompanyRequest, UpdateCompanyRequest};
use crate::middleware::auth::AuthenticatedCompany;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Rutas públicas: registro y login
pub fn create_company_auth_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Rutas protegidas del perfil
pub fn create_company_profile_router() -> Router<AppState> {
    Router::new().route("/me", get(get_current_company).put(update_current_company))
}

fn controller(state: &AppState) -> CompanyController {
    CompanyController::new(state.pool.clone(), state.jwt_config())
}

async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterCompanyRequest>,
) -> Result<Json<ApiResponse<CompanyResponse>>, AppError> {
    let response = controller(&state).register(request).await?;
    Ok(Json(response))
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let response = controller(&state).login(request).await?;
    Ok(Json(response))
}

async fn get_current_company(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedCompany>,
) -> Result<Json<CompanyResponse>, AppError> {
    let response = controller(&state).profile(auth.company_id).await?;
    Ok(Json(response))
}

async fn update_current_company(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedCompany>,
    Json(request): Json<UpdateCompanyRequest>,
) -> Result<Json<ApiResponse<CompanyResponse>>, AppError> {
    let response = controller(&state).update_profile(auth.company_id, request).await?;
    Ok(Json(response))
}
