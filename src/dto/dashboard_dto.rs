use serde::Serialize;
use uuid::Uuid;

use crate::dto::maintenance_dto::MaintenanceRecordResponse;
use crate::models::truck::Truck;

#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub total_trucks: usize,
    pub trucks_needing_maintenance: usize,
    pub recent_maintenance_count: usize,
}

// Resumen del camión para las listas del dashboard
#[derive(Debug, Serialize)]
pub struct TruckSummary {
    pub id: Uuid,
    pub vin: String,
    pub year: i32,
    pub make: String,
    pub model: String,
    pub current_mileage: i64,
}

impl From<&Truck> for TruckSummary {
    fn from(truck: &Truck) -> Self {
        Self {
            id: truck.id,
            vin: truck.vin.clone(),
            year: truck.year,
            make: truck.make.clone(),
            model: truck.model.clone(),
            current_mileage: truck.current_mileage,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RecentMaintenanceItem {
    #[serde(flatten)]
    pub record: MaintenanceRecordResponse,
    pub truck: Option<TruckSummary>,
}

#[derive(Debug, Serialize)]
pub struct UpcomingMaintenanceItem {
    #[serde(flatten)]
    pub record: MaintenanceRecordResponse,
    pub miles_remaining: i64,
    pub truck: TruckSummary,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub stats: DashboardStats,
    pub recent_maintenance: Vec<RecentMaintenanceItem>,
    pub upcoming_maintenance: Vec<UpcomingMaintenanceItem>,
}
