//! Modelo de MaintenanceRecord
//! 
//! Los registros de mantenimiento son inmutables una vez creados.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Tipo de mantenimiento - se guarda como TEXT con la etiqueta legible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaintenanceType {
    #[serde(rename = "Oil Change")]
    OilChange,
    #[serde(rename = "Air Filter Change")]
    AirFilterChange,
    #[serde(rename = "Fuel Filter Change")]
    FuelFilterChange,
    #[serde(rename = "Tire Rotation")]
    TireRotation,
    #[serde(rename = "Brake Service")]
    BrakeService,
    #[serde(rename = "Other")]
    Other,
}

impl MaintenanceType {
    pub const ALL: [MaintenanceType; 6] = [
        MaintenanceType::OilChange,
        MaintenanceType::AirFilterChange,
        MaintenanceType::FuelFilterChange,
        MaintenanceType::TireRotation,
        MaintenanceType::BrakeService,
        MaintenanceType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MaintenanceType::OilChange => "Oil Change",
            MaintenanceType::AirFilterChange => "Air Filter Change",
            MaintenanceType::FuelFilterChange => "Fuel Filter Change",
            MaintenanceType::TireRotation => "Tire Rotation",
            MaintenanceType::BrakeService => "Brake Service",
            MaintenanceType::Other => "Other",
        }
    }
}

impl fmt::Display for MaintenanceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown maintenance type: {0}")]
pub struct UnknownMaintenanceType(pub String);

impl FromStr for MaintenanceType {
    type Err = UnknownMaintenanceType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MaintenanceType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownMaintenanceType(s.to_string()))
    }
}

impl TryFrom<String> for MaintenanceType {
    type Error = UnknownMaintenanceType;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Registro de mantenimiento - mapea la tabla maintenance_records
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MaintenanceRecord {
    pub id: Uuid,
    pub truck_id: Uuid,
    pub company_id: Uuid,
    #[sqlx(try_from = "String")]
    pub maintenance_type: MaintenanceType,
    pub mileage: i64,
    pub next_due_mileage: Option<i64>,
    pub part_make_model: Option<String>,
    pub description: Option<String>,
    pub performed_at: DateTime<Utc>,
}

/// Datos validados para insertar un registro
#[derive(Debug, Clone)]
pub struct NewMaintenanceRecord {
    pub maintenance_type: MaintenanceType,
    pub mileage: i64,
    pub next_due_mileage: Option<i64>,
    pub part_make_model: Option<String>,
    pub description: Option<String>,
}
