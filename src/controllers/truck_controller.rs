use crate::dto::company_dto::ApiResponse;
use crate::dto::maintenance_dto::MaintenanceRecordResponse;
use crate::dto::truck_dto::{
    CreateTruckRequest, ImportSummary, ImportTrucksResponse, MaintenanceStatusResponse, QrLinkResponse,
    TruckDetailResponse, TruckListItem, TruckResponse,
};
use crate::models::truck::{NewTruck, Truck};
use crate::repositories::maintenance_repository::MaintenanceRepository;
use crate::repositories::truck_repository::TruckRepository;
use crate::services::maintenance_status::{needs_maintenance, records_by_truck, status_for_type, TRACKED_TYPES};
use crate::services::qr_link::{resolve_scanned_truck_id, truck_link};
use crate::services::truck_import::validate_csv;
use crate::services::truck_search::matches_search;
use crate::utils::errors::{not_found_error, validation_error, AppError};
use crate::utils::validation::validate_model_year;
use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

pub struct TruckController {
    trucks: TruckRepository,
    maintenance: MaintenanceRepository,
}

impl TruckController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            trucks: TruckRepository::new(pool.clone()),
            maintenance: MaintenanceRepository::new(pool),
        }
    }

    async fn owned_truck(&self, company_id: Uuid, truck_id: Uuid) -> Result<Truck, AppError> {
        self.trucks
            .find_for_company(truck_id, company_id)
            .await?
            .ok_or_else(|| not_found_error("Truck", &truck_id.to_string()))
    }

    /// Listado de la flota, del más nuevo al más antiguo, con la alerta de mantenimiento
    pub async fn list(&self, company_id: Uuid, search: Option<&str>) -> Result<Vec<TruckListItem>, AppError> {
        let (trucks, records) = futures::try_join!(
            self.trucks.list_by_company(company_id),
            self.maintenance.list_by_company(company_id),
        )?;

        let grouped = records_by_truck(&records);
        let term = search.unwrap_or_default().trim();

        let items = trucks
            .into_iter()
            .filter(|truck| matches_search(truck, term))
            .map(|truck| {
                let needs = grouped
                    .get(&truck.id)
                    .map(|recs| needs_maintenance(truck.current_mileage, recs.iter().copied()))
                    .unwrap_or(false);
                TruckListItem {
                    truck: TruckResponse::from(truck),
                    needs_maintenance: needs,
                }
            })
            .collect();

        Ok(items)
    }

    pub async fn create(&self, company_id: Uuid, request: CreateTruckRequest) -> Result<ApiResponse<TruckResponse>, AppError> {
        let request = request.trimmed();
        request.validate()?;
        validate_model_year(request.year).map_err(|msg| validation_error("year", &msg))?;

        let new_truck = NewTruck {
            vin: request.vin,
            year: request.year,
            make: request.make,
            model: request.model,
            current_mileage: request.current_mileage,
            license_plate: request.license_plate,
            notes: request.notes,
        };

        let truck = self.trucks.create(company_id, &new_truck).await?;
        info!("🚚 Camión {} añadido a la empresa {}", truck.vin, company_id);

        Ok(ApiResponse::success_with_message(
            TruckResponse::from(truck),
            "Truck added successfully",
        ))
    }

    /// Ficha del camión con historial y estado de los tipos seguidos
    pub async fn detail(&self, company_id: Uuid, truck_id: Uuid) -> Result<TruckDetailResponse, AppError> {
        let truck = self.owned_truck(company_id, truck_id).await?;
        let records = self.maintenance.list_by_truck(truck.id).await?;

        let statuses = TRACKED_TYPES
            .into_iter()
            .map(|kind| {
                MaintenanceStatusResponse::new(kind, status_for_type(truck.current_mileage, &records, kind))
            })
            .collect();

        Ok(TruckDetailResponse {
            needs_maintenance: needs_maintenance(truck.current_mileage, &records),
            statuses,
            maintenance_records: records.iter().map(MaintenanceRecordResponse::from).collect(),
            truck: TruckResponse::from(truck),
        })
    }

    pub async fn delete(&self, company_id: Uuid, truck_id: Uuid) -> Result<ApiResponse<()>, AppError> {
        if !self.trucks.delete(truck_id, company_id).await? {
            return Err(not_found_error("Truck", &truck_id.to_string()));
        }

        info!("🗑️ Camión {} eliminado", truck_id);
        Ok(ApiResponse::message("Truck deleted successfully"))
    }

    pub async fn qr_link(&self, company_id: Uuid, truck_id: Uuid, public_app_url: &str) -> Result<QrLinkResponse, AppError> {
        let truck = self.owned_truck(company_id, truck_id).await?;

        Ok(QrLinkResponse {
            truck_id: truck.id,
            url: truck_link(public_app_url, truck.id),
        })
    }

    /// Resolver una etiqueta escaneada a un camión de la empresa
    pub async fn scan(&self, company_id: Uuid, payload: &str) -> Result<TruckResponse, AppError> {
        let truck_id = resolve_scanned_truck_id(payload).map_err(|e| {
            warn!("📷 QR no reconocido: {}", e);
            AppError::BadRequest(e.to_string())
        })?;

        let truck = self.owned_truck(company_id, truck_id).await?;
        Ok(TruckResponse::from(truck))
    }

    pub fn validate_import(&self, csv_body: &str) -> Result<ImportTrucksResponse, AppError> {
        let report = validate_csv(csv_body)
            .map_err(|e| AppError::BadRequest(format!("Could not read CSV: {}", e)))?;

        Ok(ImportTrucksResponse::from(report))
    }

    /// Inserta las filas válidas en una sola transacción
    pub async fn import(&self, company_id: Uuid, csv_body: &str) -> Result<ApiResponse<ImportTrucksResponse>, AppError> {
        let mut response = self.validate_import(csv_body)?;

        if response.valid.is_empty() {
            return Err(AppError::BadRequest("No valid trucks to import".to_string()));
        }

        let trucks: Vec<NewTruck> = response.valid.iter().map(|row| row.truck.clone()).collect();
        let success = self.trucks.create_many(company_id, &trucks).await?;
        info!("📥 Importados {} camiones para la empresa {}", success, company_id);

        response.imported = Some(ImportSummary {
            success,
            total: trucks.len(),
        });

        Ok(ApiResponse::success_with_message(
            response,
            format!("Successfully imported {} trucks", success),
        ))
    }
}
