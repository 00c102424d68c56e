use crate::dto::dashboard_dto::{
    DashboardResponse, DashboardStats, RecentMaintenanceItem, TruckSummary, UpcomingMaintenanceItem,
};
use crate::dto::maintenance_dto::MaintenanceRecordResponse;
use crate::models::truck::Truck;
use crate::repositories::maintenance_repository::MaintenanceRepository;
use crate::repositories::truck_repository::TruckRepository;
use crate::services::maintenance_status::{count_needing_maintenance, recent_maintenance, upcoming_maintenance};
use crate::utils::errors::AppError;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::collections::HashMap;
use uuid::Uuid;

pub struct DashboardController {
    trucks: TruckRepository,
    maintenance: MaintenanceRepository,
}

impl DashboardController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            trucks: TruckRepository::new(pool.clone()),
            maintenance: MaintenanceRepository::new(pool),
        }
    }

    pub async fn overview(&self, company_id: Uuid, now: DateTime<Utc>) -> Result<DashboardResponse, AppError> {
        let (trucks, records) = futures::try_join!(
            self.trucks.list_by_company(company_id),
            self.maintenance.list_by_company(company_id),
        )?;

        let by_id: HashMap<Uuid, &Truck> = trucks.iter().map(|t| (t.id, t)).collect();

        let recent_maintenance: Vec<RecentMaintenanceItem> = recent_maintenance(&records, now)
            .into_iter()
            .map(|record| RecentMaintenanceItem {
                record: MaintenanceRecordResponse::from(record),
                truck: by_id.get(&record.truck_id).map(|t| TruckSummary::from(*t)),
            })
            .collect();

        let upcoming_maintenance = upcoming_maintenance(&trucks, &records)
            .into_iter()
            .map(|u| UpcomingMaintenanceItem {
                record: MaintenanceRecordResponse::from(u.record),
                miles_remaining: u.miles_remaining,
                truck: TruckSummary::from(u.truck),
            })
            .collect();

        Ok(DashboardResponse {
            stats: DashboardStats {
                total_trucks: trucks.len(),
                trucks_needing_maintenance: count_needing_maintenance(&trucks, &records),
                recent_maintenance_count: recent_maintenance.len(),
            },
            recent_maintenance,
            upcoming_maintenance,
        })
    }
}
