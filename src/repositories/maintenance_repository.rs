use crate::models::maintenance::{MaintenanceRecord, NewMaintenanceRecord};
use crate::services::maintenance_schedule::raised_mileage;
use crate::utils::errors::AppError;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

pub struct MaintenanceRepository {
    pool: PgPool,
}

impl MaintenanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_by_truck(&self, truck_id: Uuid) -> Result<Vec<MaintenanceRecord>, AppError> {
        let records = sqlx::query_as::<_, MaintenanceRecord>(
            "SELECT * FROM maintenance_records WHERE truck_id = $1 ORDER BY performed_at DESC"
        )
        .bind(truck_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    pub async fn list_by_company(&self, company_id: Uuid) -> Result<Vec<MaintenanceRecord>, AppError> {
        let records = sqlx::query_as::<_, MaintenanceRecord>(
            "SELECT * FROM maintenance_records WHERE company_id = $1 ORDER BY performed_at DESC"
        )
        .bind(company_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// Inserta el registro y sube el kilometraje del camión en la misma transacción.
    /// La fila del camión queda bloqueada hasta el commit. Devuelve el registro y
    /// el kilometraje resultante.
    pub async fn record_with_mileage(
        &self,
        truck_id: Uuid,
        company_id: Uuid,
        record: &NewMaintenanceRecord,
    ) -> Result<(MaintenanceRecord, i64), AppError> {
        let mut tx = self.pool.begin().await?;

        let (current,): (i64,) = sqlx::query_as(
            "SELECT current_mileage FROM trucks WHERE id = $1 AND company_id = $2 FOR UPDATE"
        )
        .bind(truck_id)
        .bind(company_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound("Truck not found".to_string()))?;

        let created = sqlx::query_as::<_, MaintenanceRecord>(
            r#"
            INSERT INTO maintenance_records (
                id, truck_id, company_id, maintenance_type, mileage,
                next_due_mileage, part_make_model, description, performed_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#
        )
        .bind(Uuid::new_v4())
        .bind(truck_id)
        .bind(company_id)
        .bind(record.maintenance_type.as_str())
        .bind(record.mileage)
        .bind(record.next_due_mileage)
        .bind(&record.part_make_model)
        .bind(&record.description)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        let mileage = raised_mileage(current, record.mileage);
        if mileage != current {
            sqlx::query("UPDATE trucks SET current_mileage = $2 WHERE id = $1")
                .bind(truck_id)
                .bind(mileage)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok((created, mileage))
    }
}
