//! Búsqueda de camiones por VIN, marca, modelo o año

use crate::models::truck::Truck;

/// Coincidencia parcial sin distinguir mayúsculas; término vacío acepta todo
pub fn matches_search(truck: &Truck, term: &str) -> bool {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    truck.vin.to_lowercase().contains(&needle)
        || truck.make.to_lowercase().contains(&needle)
        || truck.model.to_lowercase().contains(&needle)
        || truck.year.to_string().contains(&needle)
}
