//! Modelo de Truck
//! 
//! Mapea la tabla trucks. Cada camión pertenece a una única empresa.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Truck principal - mapea exactamente a la tabla trucks
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Truck {
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

/// Datos validados para insertar un camión
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTruck {
    pub vin: String,
    pub year: i32,
    pub make: String,
    pub model: String,
    pub current_mileage: i64,
    pub license_plate: String,
    pub notes: Option<String>,
}
