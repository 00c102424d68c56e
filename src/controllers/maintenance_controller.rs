use crate::dto::company_dto::ApiResponse;
use crate::dto::maintenance_dto::{CreateMaintenanceRequest, MaintenanceRecordResponse, RecordMaintenanceResponse};
use crate::models::maintenance::NewMaintenanceRecord;
use crate::repositories::maintenance_repository::MaintenanceRepository;
use crate::repositories::truck_repository::TruckRepository;
use crate::services::maintenance_schedule::resolve_next_due;
use crate::utils::errors::{not_found_error, AppError};
use crate::utils::validation::non_blank;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

pub struct MaintenanceController {
    trucks: TruckRepository,
    maintenance: MaintenanceRepository,
}

impl MaintenanceController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            trucks: TruckRepository::new(pool.clone()),
            maintenance: MaintenanceRepository::new(pool),
        }
    }

    async fn ensure_owned(&self, company_id: Uuid, truck_id: Uuid) -> Result<(), AppError> {
        self.trucks
            .find_for_company(truck_id, company_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| not_found_error("Truck", &truck_id.to_string()))
    }

    pub async fn list(&self, company_id: Uuid, truck_id: Uuid) -> Result<Vec<MaintenanceRecordResponse>, AppError> {
        self.ensure_owned(company_id, truck_id).await?;

        let records = self.maintenance.list_by_truck(truck_id).await?;
        Ok(records.iter().map(MaintenanceRecordResponse::from).collect())
    }

    pub async fn record(
        &self,
        company_id: Uuid,
        truck_id: Uuid,
        request: CreateMaintenanceRequest,
    ) -> Result<ApiResponse<RecordMaintenanceResponse>, AppError> {
        request.validate()?;
        self.ensure_owned(company_id, truck_id).await?;

        let record = NewMaintenanceRecord {
            maintenance_type: request.maintenance_type,
            mileage: request.current_mileage,
            next_due_mileage: resolve_next_due(
                request.maintenance_type,
                request.current_mileage,
                request.next_due_mileage,
            ),
            part_make_model: non_blank(request.part_make_model),
            description: non_blank(request.description),
        };

        let (created, truck_mileage) = self.maintenance
            .record_with_mileage(truck_id, company_id, &record)
            .await?;
        info!(
            "🔧 {} registrado para camión {} ({} millas)",
            created.maintenance_type, truck_id, truck_mileage
        );

        Ok(ApiResponse::success_with_message(
            RecordMaintenanceResponse {
                record: MaintenanceRecordResponse::from(&created),
                truck_mileage,
            },
            "Maintenance recorded successfully",
        ))
    }
}
