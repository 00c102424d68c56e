use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::maintenance::{MaintenanceRecord, MaintenanceType};

// Request del formulario de mantenimiento
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMaintenanceRequest {
    pub maintenance_type: MaintenanceType,

    /// Kilometraje leído en el momento del servicio
    #[validate(range(min = 0, max = 10000000, message = "Mileage must be between 0 and 10,000,000"))]
    pub current_mileage: i64,

    pub part_make_model: Option<String>,

    pub description: Option<String>,

    /// Ausente o 0 significa "usar el intervalo por defecto"
    #[validate(range(min = 0, max = 10000000, message = "Mileage must be between 0 and 10,000,000"))]
    pub next_due_mileage: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct MaintenanceRecordResponse {
    pub id: Uuid,
    pub truck_id: Uuid,
    pub maintenance_type: MaintenanceType,
    pub mileage: i64,
    pub next_due_mileage: Option<i64>,
    pub part_make_model: Option<String>,
    pub description: Option<String>,
    pub performed_at: DateTime<Utc>,
}

impl From<&MaintenanceRecord> for MaintenanceRecordResponse {
    fn from(record: &MaintenanceRecord) -> Self {
        Self {
            id: record.id,
            truck_id: record.truck_id,
            maintenance_type: record.maintenance_type,
            mileage: record.mileage,
            next_due_mileage: record.next_due_mileage,
            part_make_model: record.part_make_model.clone(),
            description: record.description.clone(),
            performed_at: record.performed_at,
        }
    }
}

// Response al registrar un mantenimiento
#[derive(Debug, Serialize)]
pub struct RecordMaintenanceResponse {
    pub record: MaintenanceRecordResponse,
    pub truck_mileage: i64,
}
