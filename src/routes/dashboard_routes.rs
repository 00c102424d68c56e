use axum::{extract::State, routing::get, Extension, Json, Router};
use chrono::Utc;

use crate::controllers::dashboard_controller::DashboardController;
use crate::dto::dashboard_dto::DashboardResponse;
use crate::middleware::auth::AuthenticatedCompany;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_dashboard_router() -> Router<AppState> {
    Router::new().route("/", get(get_dashboard))
}

async fn get_dashboard(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedCompany>,
) -> Result<Json<DashboardResponse>, AppError> {
    let controller = DashboardController::new(state.pool.clone());
    let dashboard = controller.overview(auth.company_id, Utc::now()).await?;
    Ok(Json(dashboard))
}
