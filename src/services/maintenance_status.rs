//! Evaluador de estado de mantenimiento
//! 
//! Compara el kilometraje actual de cada camión con el umbral `next_due_mileage`
//! de sus registros. Funciones puras sobre listas ya cargadas en memoria.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use std::collections::HashMap;
use uuid::Uuid;

use crate::models::maintenance::{MaintenanceRecord, MaintenanceType};
use crate::models::truck::Truck;

/// Por debajo de esta distancia restante el mantenimiento está "soon"
pub const SOON_THRESHOLD_MILES: i64 = 1000;

/// Tamaño máximo de las listas del dashboard
pub const DASHBOARD_LIST_LIMIT: usize = 5;

/// Ventana de "mantenimiento reciente" en días
pub const RECENT_WINDOW_DAYS: i64 = 7;

/// Tipos que se muestran en la ficha de un camión
pub const TRACKED_TYPES: [MaintenanceType; 3] = [
    MaintenanceType::OilChange,
    MaintenanceType::AirFilterChange,
    MaintenanceType::FuelFilterChange,
];

/// Estado de un tipo de mantenimiento para un camión
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MaintenanceStatus {
    Unknown,
    Due,
    Soon,
    Good,
}

impl MaintenanceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            MaintenanceStatus::Unknown => "No records",
            MaintenanceStatus::Due => "Maintenance Due",
            MaintenanceStatus::Soon => "Due Soon",
            MaintenanceStatus::Good => "Good",
        }
    }
}

/// Umbral programado de un registro.
///
/// Ausente o no positivo significa "no programado".
pub fn scheduled_threshold(record: &MaintenanceRecord) -> Option<i64> {
    record.next_due_mileage.filter(|due| *due > 0)
}

/// Estado de un registro concreto frente al kilometraje actual
pub fn evaluate_record(current_mileage: i64, record: &MaintenanceRecord) -> MaintenanceStatus {
    let Some(due) = scheduled_threshold(record) else {
        return MaintenanceStatus::Good;
    };

    if current_mileage >= due {
        MaintenanceStatus::Due
    } else if due - current_mileage < SOON_THRESHOLD_MILES {
        MaintenanceStatus::Soon
    } else {
        MaintenanceStatus::Good
    }
}

/// Estado de un tipo de mantenimiento: se usa el primer registro de ese tipo.
///
/// Los repositorios devuelven los registros del más reciente al más antiguo.
pub fn status_for_type<'a, I>(current_mileage: i64, records: I, kind: MaintenanceType) -> MaintenanceStatus
where
    I: IntoIterator<Item = &'a MaintenanceRecord>,
{
    records
        .into_iter()
        .find(|r| r.maintenance_type == kind)
        .map(|r| evaluate_record(current_mileage, r))
        .unwrap_or(MaintenanceStatus::Unknown)
}

/// Verdadero si algún registro programado ya alcanzó su umbral
pub fn needs_maintenance<'a, I>(current_mileage: i64, records: I) -> bool
where
    I: IntoIterator<Item = &'a MaintenanceRecord>,
{
    records
        .into_iter()
        .filter_map(scheduled_threshold)
        .any(|due| current_mileage >= due)
}

/// Agrupar registros por camión conservando el orden de entrada
pub fn records_by_truck(records: &[MaintenanceRecord]) -> HashMap<Uuid, Vec<&MaintenanceRecord>> {
    let mut grouped: HashMap<Uuid, Vec<&MaintenanceRecord>> = HashMap::new();
    for record in records {
        grouped.entry(record.truck_id).or_default().push(record);
    }
    grouped
}

/// Número de camiones de la flota que necesitan mantenimiento
pub fn count_needing_maintenance(trucks: &[Truck], records: &[MaintenanceRecord]) -> usize {
    let grouped = records_by_truck(records);
    trucks
        .iter()
        .filter(|truck| {
            grouped
                .get(&truck.id)
                .map(|recs| needs_maintenance(truck.current_mileage, recs.iter().copied()))
                .unwrap_or(false)
        })
        .count()
}

/// Mantenimiento próximo de un camión
#[derive(Debug, Clone)]
pub struct UpcomingMaintenance<'a> {
    pub truck: &'a Truck,
    pub record: &'a MaintenanceRecord,
    pub miles_remaining: i64,
}

/// Ranking de mantenimientos próximos de toda la flota.
///
/// Solo entran registros con umbral por encima del kilometraje actual; orden
/// ascendente por millas restantes y como mucho `DASHBOARD_LIST_LIMIT` entradas.
pub fn upcoming_maintenance<'a>(
    trucks: &'a [Truck],
    records: &'a [MaintenanceRecord],
) -> Vec<UpcomingMaintenance<'a>> {
    let grouped = records_by_truck(records);

    let mut upcoming: Vec<UpcomingMaintenance<'a>> = trucks
        .iter()
        .flat_map(|truck| {
            grouped
                .get(&truck.id)
                .into_iter()
                .flatten()
                .filter_map(move |record| {
                    let record: &'a MaintenanceRecord = *record;
                    let due = scheduled_threshold(record)?;
                    (due > truck.current_mileage).then(|| UpcomingMaintenance {
                        truck,
                        record,
                        miles_remaining: due - truck.current_mileage,
                    })
                })
        })
        .collect();

    // sort_by_key es estable: empates conservan el orden de la flota
    upcoming.sort_by_key(|u| u.miles_remaining);
    upcoming.truncate(DASHBOARD_LIST_LIMIT);
    upcoming
}

/// Registros de los últimos siete días, del más reciente al más antiguo
pub fn recent_maintenance(records: &[MaintenanceRecord], now: DateTime<Utc>) -> Vec<&MaintenanceRecord> {
    let since = now - Duration::days(RECENT_WINDOW_DAYS);

    let mut recent: Vec<&MaintenanceRecord> = records.iter().filter(|r| r.performed_at >= since).collect();
    recent.sort_by(|a, b| b.performed_at.cmp(&a.performed_at));
    recent.truncate(DASHBOARD_LIST_LIMIT);
    recent
}

#[cfg(test)]
mod tests {
    use super::*;

    fn truck(mileage: i64) -> Truck {
        Truck {
            id: Uuid::new_v4(),
            company_id: Uuid::nil(),
            vin: "1HGCM82633A004352".to_string(),
            year: 2020,
            make: "Freightliner".to_string(),
            model: "Cascadia".to_string(),
            current_mileage: mileage,
            license_plate: "TRK-001".to_string(),
            notes: None,
            created_at: Utc::now(),
        }
    }

    fn record(truck: &Truck, kind: MaintenanceType, next_due: Option<i64>) -> MaintenanceRecord {
        MaintenanceRecord {
            id: Uuid::new_v4(),
            truck_id: truck.id,
            company_id: truck.company_id,
            maintenance_type: kind,
            mileage: truck.current_mileage,
            next_due_mileage: next_due,
            part_make_model: None,
            description: None,
            performed_at: Utc::now(),
        }
    }

    #[test]
    fn test_status_examples() {
        let t = truck(0);
        let oil = record(&t, MaintenanceType::OilChange, Some(50_000));
        let records = [oil];

        assert_eq!(status_for_type(50_000, &records, MaintenanceType::OilChange), MaintenanceStatus::Due);
        assert_eq!(status_for_type(49_500, &records, MaintenanceType::OilChange), MaintenanceStatus::Soon);
        assert_eq!(status_for_type(40_000, &records, MaintenanceType::OilChange), MaintenanceStatus::Good);
        assert_eq!(status_for_type(60_000, &records, MaintenanceType::OilChange), MaintenanceStatus::Due);
    }

    #[test]
    fn test_soon_boundary() {
        let t = truck(0);
        let records = [record(&t, MaintenanceType::OilChange, Some(10_000))];

        assert_eq!(status_for_type(9_001, &records, MaintenanceType::OilChange), MaintenanceStatus::Soon);
        assert_eq!(status_for_type(9_000, &records, MaintenanceType::OilChange), MaintenanceStatus::Good);
        assert_eq!(status_for_type(9_999, &records, MaintenanceType::OilChange), MaintenanceStatus::Soon);
    }

    #[test]
    fn test_unknown_without_record_of_type() {
        let t = truck(10_000);
        let records = [record(&t, MaintenanceType::OilChange, Some(5_000))];

        assert_eq!(
            status_for_type(10_000, &records, MaintenanceType::AirFilterChange),
            MaintenanceStatus::Unknown
        );
        assert_eq!(status_for_type(10_000, &[], MaintenanceType::OilChange), MaintenanceStatus::Unknown);
    }

    #[test]
    fn test_first_matching_record_wins() {
        let t = truck(20_000);
        let newest = record(&t, MaintenanceType::OilChange, Some(35_000));
        let oldest = record(&t, MaintenanceType::OilChange, Some(15_000));
        let records = [newest, oldest];

        assert_eq!(status_for_type(20_000, &records, MaintenanceType::OilChange), MaintenanceStatus::Good);
    }

    #[test]
    fn test_unscheduled_record_is_not_due() {
        let t = truck(80_000);
        let records = [
            record(&t, MaintenanceType::TireRotation, None),
            record(&t, MaintenanceType::BrakeService, Some(0)),
        ];

        assert_eq!(status_for_type(80_000, &records, MaintenanceType::TireRotation), MaintenanceStatus::Good);
        assert_eq!(status_for_type(80_000, &records, MaintenanceType::BrakeService), MaintenanceStatus::Good);
        assert!(!needs_maintenance(80_000, &records));
    }

    #[test]
    fn test_needs_maintenance() {
        let t = truck(30_000);
        let records = [
            record(&t, MaintenanceType::OilChange, Some(45_000)),
            record(&t, MaintenanceType::AirFilterChange, Some(30_000)),
        ];
        assert!(needs_maintenance(30_000, &records));
        assert!(!needs_maintenance(29_999, &records));
    }

    #[test]
    fn test_count_needing_maintenance() {
        let overdue = truck(100_000);
        let fine = truck(10_000);
        let untouched = truck(500);
        let records = vec![
            record(&overdue, MaintenanceType::OilChange, Some(90_000)),
            record(&fine, MaintenanceType::OilChange, Some(25_000)),
        ];
        let trucks = vec![overdue, fine, untouched];

        assert_eq!(count_needing_maintenance(&trucks, &records), 1);
    }

    #[test]
    fn test_upcoming_sorted_and_limited() {
        let a = truck(10_000);
        let b = truck(40_000);
        let mut records = vec![
            record(&a, MaintenanceType::OilChange, Some(25_000)),
            record(&a, MaintenanceType::AirFilterChange, Some(40_000)),
            record(&a, MaintenanceType::FuelFilterChange, Some(10_500)),
            record(&a, MaintenanceType::TireRotation, Some(9_000)),
            record(&b, MaintenanceType::OilChange, Some(41_000)),
            record(&b, MaintenanceType::AirFilterChange, Some(70_000)),
            record(&b, MaintenanceType::FuelFilterChange, Some(43_000)),
        ];
        records.push(record(&b, MaintenanceType::BrakeService, None));
        let trucks = vec![a, b];

        let upcoming = upcoming_maintenance(&trucks, &records);
        let remaining: Vec<i64> = upcoming.iter().map(|u| u.miles_remaining).collect();

        assert_eq!(remaining, vec![500, 1_000, 3_000, 15_000, 30_000]);
        assert_eq!(upcoming[0].truck.id, trucks[0].id);
        assert_eq!(upcoming[1].truck.id, trucks[1].id);
    }

    #[test]
    fn test_upcoming_excludes_reached_thresholds() {
        let t = truck(50_000);
        let records = vec![record(&t, MaintenanceType::OilChange, Some(50_000))];
        let trucks = vec![t];

        assert!(upcoming_maintenance(&trucks, &records).is_empty());
    }

    #[test]
    fn test_upcoming_ties_keep_fleet_order() {
        let first = truck(1_000);
        let second = truck(2_000);
        let records = vec![
            record(&second, MaintenanceType::OilChange, Some(3_000)),
            record(&first, MaintenanceType::OilChange, Some(2_000)),
        ];
        let trucks = vec![first, second];

        let upcoming = upcoming_maintenance(&trucks, &records);
        assert_eq!(upcoming.len(), 2);
        assert_eq!(upcoming[0].truck.id, trucks[0].id);
        assert_eq!(upcoming[1].truck.id, trucks[1].id);
    }

    #[test]
    fn test_recent_maintenance_window() {
        let t = truck(1_000);
        let now = Utc::now();
        let mut old = record(&t, MaintenanceType::OilChange, None);
        old.performed_at = now - Duration::days(8);
        let mut fresh = record(&t, MaintenanceType::TireRotation, None);
        fresh.performed_at = now - Duration::days(1);
        let mut today = record(&t, MaintenanceType::BrakeService, None);
        today.performed_at = now;

        let records = vec![old, fresh, today];
        let recent = recent_maintenance(&records, now);

        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].maintenance_type, MaintenanceType::BrakeService);
        assert_eq!(recent[1].maintenance_type, MaintenanceType::TireRotation);
    }

    #[test]
    fn test_recent_maintenance_is_capped() {
        let t = truck(1_000);
        let records: Vec<_> = (0..8).map(|_| record(&t, MaintenanceType::OilChange, None)).collect();

        assert_eq!(recent_maintenance(&records, Utc::now()).len(), DASHBOARD_LIST_LIMIT);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(MaintenanceStatus::Due.label(), "Maintenance Due");
        assert_eq!(serde_json::to_string(&MaintenanceStatus::Soon).unwrap(), "\"soon\"");
    }
}
