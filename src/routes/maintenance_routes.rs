use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::maintenance_controller::MaintenanceController;
use crate::dto::company_dto::ApiResponse;
use crate::dto::maintenance_dto::{CreateMaintenanceRequest, MaintenanceRecordResponse, RecordMaintenanceResponse};
use crate::middleware::auth::AuthenticatedCompany;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Rutas de mantenimiento, colgadas de /api/trucks
pub fn create_maintenance_router() -> Router<AppState> {
    Router::new().route("/:id/maintenance", get(list_maintenance).post(record_maintenance))
}

async fn list_maintenance(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedCompany>,
    Path(truck_id): Path<Uuid>,
) -> Result<Json<Vec<MaintenanceRecordResponse>>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    let records = controller.list(auth.company_id, truck_id).await?;
    Ok(Json(records))
}

async fn record_maintenance(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedCompany>,
    Path(truck_id): Path<Uuid>,
    Json(request): Json<CreateMaintenanceRequest>,
) -> Result<(StatusCode, Json<ApiResponse<RecordMaintenanceResponse>>), AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    let response = controller.record(auth.company_id, truck_id, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}
