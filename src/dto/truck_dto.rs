use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::dto::maintenance_dto::MaintenanceRecordResponse;
use crate::models::maintenance::MaintenanceType;
use crate::models::truck::Truck;
use crate::services::maintenance_status::MaintenanceStatus;
use crate::services::truck_import::{ImportValidation, InvalidRow, ValidRow};
use crate::utils::validation::non_blank;

// Request para dar de alta un camión
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTruckRequest {
    #[validate(length(equal = 17, message = "VIN must be 17 characters"))]
    pub vin: String,

    #[validate(range(min = 1900, message = "Year must be at least 1900"))]
    pub year: i32,

    #[validate(length(min = 1, message = "Make is required"))]
    pub make: String,

    #[validate(length(min = 1, message = "Model is required"))]
    pub model: String,

    #[validate(range(min = 0, max = 10000000, message = "Mileage must be between 0 and 10,000,000"))]
    pub current_mileage: i64,

    #[validate(length(min = 1, message = "License plate is required"))]
    pub license_plate: String,

    pub notes: Option<String>,
}

impl CreateTruckRequest {
    /// Recorta los campos de texto antes de validar
    pub fn trimmed(self) -> Self {
        Self {
            vin: self.vin.trim().to_string(),
            make: self.make.trim().to_string(),
            model: self.model.trim().to_string(),
            license_plate: self.license_plate.trim().to_string(),
            notes: non_blank(self.notes),
            ..self
        }
    }
}

// Filtro del listado
#[derive(Debug, Default, Deserialize)]
pub struct TruckListQuery {
    pub search: Option<String>,
}

// Response de camión
#[derive(Debug, Serialize)]
pub struct TruckResponse {
    pub id: Uuid,
    pub company_id: Uuid,
    pub vin: String,
    pub year: i32,
    pub make: String,
    pub model: String,
    pub current_mileage: i64,
    pub license_plate: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Truck> for TruckResponse {
    fn from(truck: Truck) -> Self {
        Self {
            id: truck.id,
            company_id: truck.company_id,
            vin: truck.vin,
            year: truck.year,
            make: truck.make,
            model: truck.model,
            current_mileage: truck.current_mileage,
            license_plate: truck.license_plate,
            notes: truck.notes,
            created_at: truck.created_at,
        }
    }
}

// Elemento del listado con la alerta de mantenimiento
#[derive(Debug, Serialize)]
pub struct TruckListItem {
    #[serde(flatten)]
    pub truck: TruckResponse,
    pub needs_maintenance: bool,
}

// Estado de un tipo de mantenimiento en la ficha
#[derive(Debug, Serialize)]
pub struct MaintenanceStatusResponse {
    pub maintenance_type: MaintenanceType,
    pub status: MaintenanceStatus,
    pub label: &'static str,
}

impl MaintenanceStatusResponse {
    pub fn new(maintenance_type: MaintenanceType, status: MaintenanceStatus) -> Self {
        Self {
            maintenance_type,
            status,
            label: status.label(),
        }
    }
}

// Ficha completa del camión
#[derive(Debug, Serialize)]
pub struct TruckDetailResponse {
    pub truck: TruckResponse,
    pub needs_maintenance: bool,
    pub statuses: Vec<MaintenanceStatusResponse>,
    pub maintenance_records: Vec<MaintenanceRecordResponse>,
}

// Contenido de la etiqueta QR
#[derive(Debug, Serialize)]
pub struct QrLinkResponse {
    pub truck_id: Uuid,
    pub url: String,
}

// Resultado de un escaneo
#[derive(Debug, Deserialize)]
pub struct ScanQrRequest {
    pub payload: String,
}

// Resultado de la importación CSV
#[derive(Debug, Serialize)]
pub struct ImportTrucksResponse {
    pub valid: Vec<ValidRow>,
    pub invalid: Vec<InvalidRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imported: Option<ImportSummary>,
}

#[derive(Debug, Serialize)]
pub struct ImportSummary {
    pub success: usize,
    pub total: usize,
}

impl From<ImportValidation> for ImportTrucksResponse {
    fn from(report: ImportValidation) -> Self {
        Self {
            valid: report.valid,
            invalid: report.invalid,
            imported: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn request(vin: &str, mileage: i64) -> CreateTruckRequest {
        CreateTruckRequest {
            vin: vin.to_string(),
            year: 2021,
            make: "Kenworth".to_string(),
            model: "T680".to_string(),
            current_mileage: mileage,
            license_plate: "KEN001".to_string(),
            notes: None,
        }
    }

    #[test]
    fn test_create_truck_request_validation() {
        assert!(request("1XKYDP9X5NJ123456", 0).validate().is_ok());

        let errors = request("1XKYDP9X5NJ12345", 0).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("vin"));

        let errors = request("1XKYDP9X5NJ123456", -1).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("current_mileage"));
    }

    #[test]
    fn test_trimmed_request_is_what_gets_validated() {
        let mut padded = request(" 1XKYDP9X5NJ12345 ", 0);
        padded.make = "   ".to_string();
        padded.notes = Some("  ".to_string());

        let trimmed = padded.trimmed();
        assert_eq!(trimmed.vin, "1XKYDP9X5NJ12345");
        assert_eq!(trimmed.notes, None);

        let errors = trimmed.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("vin"));
        assert!(fields.contains_key("make"));
    }

    #[test]
    fn test_mileage_upper_bound() {
        assert!(request("1XKYDP9X5NJ123456", 10_000_000).validate().is_ok());
        let errors = request("1XKYDP9X5NJ123456", 10_000_001).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("current_mileage"));
    }

    #[test]
    fn test_list_item_flattens_truck() {
        let truck = Truck {
            id: Uuid::new_v4(),
            company_id: Uuid::new_v4(),
            vin: "1XKYDP9X5NJ123456".to_string(),
            year: 2021,
            make: "Kenworth".to_string(),
            model: "T680".to_string(),
            current_mileage: 42_000,
            license_plate: "KEN001".to_string(),
            notes: None,
            created_at: Utc::now(),
        };

        let item = TruckListItem {
            truck: TruckResponse::from(truck),
            needs_maintenance: true,
        };
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["vin"], "1XKYDP9X5NJ123456");
        assert_eq!(json["current_mileage"], 42_000);
        assert_eq!(json["needs_maintenance"], true);
    }

    #[test]
    fn test_status_response_carries_label() {
        let status = MaintenanceStatusResponse::new(MaintenanceType::OilChange, MaintenanceStatus::Soon);
        let json = serde_json::to_value(&status).unwrap();

        assert_eq!(json["maintenance_type"], "Oil Change");
        assert_eq!(json["status"], "soon");
        assert_eq!(json["label"], "Due Soon");
    }
}
