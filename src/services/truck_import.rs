//! Importación de camiones desde CSV
//! 
//! Cada fila de datos se clasifica como válida o inválida con la lista de
//! errores encontrados. Las filas se numeran desde 1 sin contar la cabecera.

use serde::{Deserialize, Serialize};

use crate::models::truck::NewTruck;
use crate::utils::validation::{is_valid_vin, non_blank, validate_model_year, year_range_message, MAX_MILEAGE};

/// Columnas obligatorias en el orden en que se reportan
pub const REQUIRED_COLUMNS: [&str; 6] = ["vin", "year", "make", "model", "current_mileage", "license_plate"];

/// Fila tal y como llega en el CSV
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawTruckRow {
    #[serde(default)]
    pub vin: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub make: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub current_mileage: Option<String>,
    #[serde(default)]
    pub license_plate: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl RawTruckRow {
    fn field(&self, column: &str) -> Option<&str> {
        let value = match column {
            "vin" => &self.vin,
            "year" => &self.year,
            "make" => &self.make,
            "model" => &self.model,
            "current_mileage" => &self.current_mileage,
            "license_plate" => &self.license_plate,
            _ => &None,
        };
        value.as_deref().map(str::trim).filter(|v| !v.is_empty())
    }

    fn missing_columns(&self) -> Vec<&'static str> {
        REQUIRED_COLUMNS
            .into_iter()
            .filter(|column| self.field(column).is_none())
            .collect()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidRow {
    pub row: usize,
    pub truck: NewTruck,
}

#[derive(Debug, Clone, Serialize)]
pub struct InvalidRow {
    pub row: usize,
    pub data: RawTruckRow,
    pub errors: Vec<String>,
}

/// Resultado de validar un CSV completo
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportValidation {
    pub valid: Vec<ValidRow>,
    pub invalid: Vec<InvalidRow>,
}

/// Validar una fila ya deserializada
pub fn validate_row(raw: &RawTruckRow) -> Result<NewTruck, Vec<String>> {
    let missing = raw.missing_columns();
    if !missing.is_empty() {
        return Err(vec![format!("Missing required fields: {}", missing.join(", "))]);
    }

    let mut errors = Vec::new();
    let text = |column: &str| raw.field(column).unwrap_or_default().to_string();

    let vin = text("vin");
    if !is_valid_vin(&vin) {
        errors.push("VIN must be 17 characters".to_string());
    }

    let year = text("year").parse::<i32>();
    match &year {
        Ok(year) => {
            if let Err(message) = validate_model_year(*year) {
                errors.push(message);
            }
        }
        Err(_) => errors.push(year_range_message()),
    }

    let mileage = text("current_mileage").parse::<i64>();
    match &mileage {
        Ok(m) if *m < 0 => errors.push("Mileage cannot be negative".to_string()),
        Ok(m) if *m > MAX_MILEAGE => errors.push("Mileage must be between 0 and 10,000,000".to_string()),
        Ok(_) => {}
        Err(_) => errors.push("Mileage must be a whole number".to_string()),
    }

    match (year, mileage) {
        (Ok(year), Ok(current_mileage)) if errors.is_empty() => Ok(NewTruck {
            vin,
            year,
            make: text("make"),
            model: text("model"),
            current_mileage,
            license_plate: text("license_plate"),
            notes: non_blank(raw.notes.clone()),
        }),
        _ => Err(errors),
    }
}

/// Parsear y validar un documento CSV con cabecera
pub fn validate_csv(input: &str) -> Result<ImportValidation, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input.as_bytes());

    let mut report = ImportValidation::default();

    for (index, result) in reader.deserialize::<RawTruckRow>().enumerate() {
        let raw = result?;
        let row = index + 1;

        match validate_row(&raw) {
            Ok(truck) => report.valid.push(ValidRow { row, truck }),
            Err(errors) => report.invalid.push(InvalidRow { row, data: raw, errors }),
        }
    }

    Ok(report)
}
