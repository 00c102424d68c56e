//! Programación del siguiente mantenimiento
//! 
//! Intervalos por defecto cuando el formulario no indica `next_due_mileage`.

use crate::models::maintenance::MaintenanceType;

pub const OIL_CHANGE_INTERVAL: i64 = 15_000;
pub const FILTER_CHANGE_INTERVAL: i64 = 30_000;

/// Intervalo por defecto de un tipo, si lo tiene
pub fn default_interval(kind: MaintenanceType) -> Option<i64> {
    match kind {
        MaintenanceType::OilChange => Some(OIL_CHANGE_INTERVAL),
        MaintenanceType::AirFilterChange | MaintenanceType::FuelFilterChange => Some(FILTER_CHANGE_INTERVAL),
        MaintenanceType::TireRotation | MaintenanceType::BrakeService | MaintenanceType::Other => None,
    }
}

/// Umbral a guardar para un nuevo registro.
///
/// Un valor explícito distinto de cero se respeta; si no, se deriva del
/// intervalo por defecto. Los tipos sin intervalo quedan sin programar, igual
/// que un umbral que no cabe en un i64.
pub fn resolve_next_due(kind: MaintenanceType, mileage: i64, requested: Option<i64>) -> Option<i64> {
    match requested {
        Some(due) if due > 0 => Some(due),
        _ => default_interval(kind).and_then(|interval| mileage.checked_add(interval)),
    }
}

/// Kilometraje del camión tras un mantenimiento: nunca baja
pub fn raised_mileage(current: i64, reported: i64) -> i64 {
    current.max(reported)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::MAX_MILEAGE;

    #[test]
    fn test_default_intervals() {
        assert_eq!(resolve_next_due(MaintenanceType::OilChange, 10_000, None), Some(25_000));
        assert_eq!(resolve_next_due(MaintenanceType::AirFilterChange, 10_000, Some(0)), Some(40_000));
        assert_eq!(resolve_next_due(MaintenanceType::FuelFilterChange, 0, None), Some(30_000));
    }

    #[test]
    fn test_explicit_threshold_wins() {
        assert_eq!(resolve_next_due(MaintenanceType::OilChange, 10_000, Some(18_000)), Some(18_000));
        assert_eq!(resolve_next_due(MaintenanceType::TireRotation, 10_000, Some(20_000)), Some(20_000));
    }

    #[test]
    fn test_default_threshold_does_not_overflow() {
        assert_eq!(resolve_next_due(MaintenanceType::OilChange, 9_223_372_036_854_775_000, None), None);
        assert_eq!(resolve_next_due(MaintenanceType::AirFilterChange, i64::MAX, Some(0)), None);
        assert_eq!(
            resolve_next_due(MaintenanceType::OilChange, MAX_MILEAGE, None),
            Some(MAX_MILEAGE + OIL_CHANGE_INTERVAL)
        );
    }

    #[test]
    fn test_lower_reported_mileage_keeps_current() {
        assert_eq!(raised_mileage(50_000, 40_000), 50_000);
        assert_eq!(raised_mileage(50_000, 50_000), 50_000);
        assert_eq!(raised_mileage(50_000, 52_000), 52_000);
    }

    #[test]
    fn test_types_without_interval_stay_unscheduled() {
        assert_eq!(resolve_next_due(MaintenanceType::TireRotation, 10_000, None), None);
        assert_eq!(resolve_next_due(MaintenanceType::BrakeService, 10_000, Some(0)), None);
        assert_eq!(resolve_next_due(MaintenanceType::Other, 10_000, None), None);
    }
}
