//! Utilidades de validación
//! 
//! Reglas compartidas entre el alta manual de camiones y la importación CSV.

use chrono::{Datelike, Utc};

/// Longitud exacta de un VIN
pub const VIN_LENGTH: usize = 17;

/// Kilometraje máximo aceptado en altas, importaciones y mantenimientos
pub const MAX_MILEAGE: i64 = 10_000_000;

/// Primer año de fabricación aceptado
pub const MIN_MODEL_YEAR: i32 = 1900;

/// Último año de fabricación aceptado (año en curso + 1)
pub fn max_model_year() -> i32 {
    Utc::now().year() + 1
}

/// Un VIN debe tener exactamente 17 caracteres
pub fn is_valid_vin(vin: &str) -> bool {
    vin.chars().count() == VIN_LENGTH
}

/// Mensaje para años fuera de rango o no numéricos
pub fn year_range_message() -> String {
    format!("Year must be between {} and {}", MIN_MODEL_YEAR, max_model_year())
}

/// Validar el año de fabricación contra el rango permitido
pub fn validate_model_year(year: i32) -> Result<(), String> {
    if year < MIN_MODEL_YEAR || year > max_model_year() {
        return Err(year_range_message());
    }
    Ok(())
}

/// Normalizar un campo de texto opcional: vacío equivale a ausente
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
