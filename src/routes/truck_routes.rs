use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::truck_controller::TruckController;
use crate::dto::company_dto::ApiResponse;
use crate::dto::truck_dto::{
    CreateTruckRequest, ImportTrucksResponse, QrLinkResponse, ScanQrRequest, TruckDetailResponse, TruckListItem,
    TruckListQuery, TruckResponse,
};
use crate::middleware::auth::AuthenticatedCompany;
use crate::routes::maintenance_routes;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_truck_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_trucks).post(create_truck))
        .route("/scan", post(scan_truck))
        .route("/import", post(import_trucks))
        .route("/import/validate", post(validate_import))
        .route("/:id", get(get_truck).delete(delete_truck))
        .route("/:id/qr", get(get_truck_qr))
        .merge(maintenance_routes::create_maintenance_router())
}

async fn list_trucks(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedCompany>,
    Query(query): Query<TruckListQuery>,
) -> Result<Json<Vec<TruckListItem>>, AppError> {
    let controller = TruckController::new(state.pool.clone());
    let trucks = controller.list(auth.company_id, query.search.as_deref()).await?;
    Ok(Json(trucks))
}

async fn create_truck(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedCompany>,
    Json(request): Json<CreateTruckRequest>,
) -> Result<(StatusCode, Json<ApiResponse<TruckResponse>>), AppError> {
    let controller = TruckController::new(state.pool.clone());
    let response = controller.create(auth.company_id, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_truck(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedCompany>,
    Path(id): Path<Uuid>,
) -> Result<Json<TruckDetailResponse>, AppError> {
    let controller = TruckController::new(state.pool.clone());
    let truck = controller.detail(auth.company_id, id).await?;
    Ok(Json(truck))
}

async fn delete_truck(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedCompany>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = TruckController::new(state.pool.clone());
    let response = controller.delete(auth.company_id, id).await?;
    Ok(Json(response))
}

async fn get_truck_qr(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedCompany>,
    Path(id): Path<Uuid>,
) -> Result<Json<QrLinkResponse>, AppError> {
    let controller = TruckController::new(state.pool.clone());
    let link = controller.qr_link(auth.company_id, id, &state.config.public_app_url).await?;
    Ok(Json(link))
}

async fn scan_truck(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedCompany>,
    Json(request): Json<ScanQrRequest>,
) -> Result<Json<TruckResponse>, AppError> {
    let controller = TruckController::new(state.pool.clone());
    let truck = controller.scan(auth.company_id, &request.payload).await?;
    Ok(Json(truck))
}

// El cuerpo es el CSV en texto plano
async fn validate_import(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<ImportTrucksResponse>, AppError> {
    let controller = TruckController::new(state.pool.clone());
    let report = controller.validate_import(&body)?;
    Ok(Json(report))
}

async fn import_trucks(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedCompany>,
    body: String,
) -> Result<Json<ApiResponse<ImportTrucksResponse>>, AppError> {
    let controller = TruckController::new(state.pool.clone());
    let response = controller.import(auth.company_id, &body).await?;
    Ok(Json(response))
}
