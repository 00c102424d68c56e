use crate::models::truck::{NewTruck, Truck};
use crate::utils::errors::AppError;
use chrono::Utc;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

pub struct TruckRepository {
    pool: PgPool,
}

async fn insert_truck(
    tx: &mut Transaction<'_, Postgres>,
    company_id: Uuid,
    truck: &NewTruck,
) -> Result<Truck, sqlx::Error> {
    sqlx::query_as::<_, Truck>(
        r#"
        INSERT INTO trucks (
            id, company_id, vin, year, make, model,
            current_mileage, license_plate, notes, created_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING *
        "#
    )
    .bind(Uuid::new_v4())
    .bind(company_id)
    .bind(&truck.vin)
    .bind(truck.year)
    .bind(&truck.make)
    .bind(&truck.model)
    .bind(truck.current_mileage)
    .bind(&truck.license_plate)
    .bind(&truck.notes)
    .bind(Utc::now())
    .fetch_one(&mut **tx)
    .await
}

impl TruckRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, company_id: Uuid, truck: &NewTruck) -> Result<Truck, AppError> {
        let mut tx = self.pool.begin().await?;
        let created = insert_truck(&mut tx, company_id, truck).await?;
        tx.commit().await?;

        Ok(created)
    }

    /// Inserta todos los camiones o ninguno
    pub async fn create_many(&self, company_id: Uuid, trucks: &[NewTruck]) -> Result<usize, AppError> {
        let mut tx = self.pool.begin().await?;
        for truck in trucks {
            insert_truck(&mut tx, company_id, truck).await?;
        }
        tx.commit().await?;

        Ok(trucks.len())
    }

    /// Busca un camión solo dentro de la empresa indicada
    pub async fn find_for_company(&self, id: Uuid, company_id: Uuid) -> Result<Option<Truck>, AppError> {
        let truck = sqlx::query_as::<_, Truck>(
            "SELECT * FROM trucks WHERE id = $1 AND company_id = $2"
        )
        .bind(id)
        .bind(company_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(truck)
    }

    pub async fn list_by_company(&self, company_id: Uuid) -> Result<Vec<Truck>, AppError> {
        let trucks = sqlx::query_as::<_, Truck>(
            "SELECT * FROM trucks WHERE company_id = $1 ORDER BY created_at DESC"
        )
        .bind(company_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(trucks)
    }

    /// Devuelve false si el camión no existe en la empresa
    pub async fn delete(&self, id: Uuid, company_id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM trucks WHERE id = $1 AND company_id = $2")
            .bind(id)
            .bind(company_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
