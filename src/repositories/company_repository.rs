use crate::models::company::Company;
use crate::utils::errors::{conflict_error, AppError};
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

pub struct CompanyRepository {
    pool: PgPool,
}

/// Campos editables del perfil
pub struct CompanyProfileUpdate {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub website: Option<String>,
    pub description: Option<String>,
}

fn map_unique_email(e: sqlx::Error, email: &str) -> AppError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            conflict_error("Company", "email", email)
        }
        _ => AppError::Database(e),
    }
}

impl CompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, company: &Company) -> Result<Company, AppError> {
        sqlx::query_as::<_, Company>(
            r#"
            INSERT INTO companies (
                id, name, address, phone, email, password_hash,
                website, description, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#
        )
        .bind(company.id)
        .bind(&company.name)
        .bind(&company.address)
        .bind(&company.phone)
        .bind(&company.email)
        .bind(&company.password_hash)
        .bind(&company.website)
        .bind(&company.description)
        .bind(company.created_at)
        .bind(company.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_email(e, &company.email))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Company>, AppError> {
        let result = sqlx::query_as::<_, Company>(
            "SELECT * FROM companies WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(result)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Company>, AppError> {
        let result = sqlx::query_as::<_, Company>(
            "SELECT * FROM companies WHERE lower(email) = lower($1)"
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(result)
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM companies WHERE lower(email) = lower($1))"
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    pub async fn update_profile(&self, id: Uuid, update: CompanyProfileUpdate) -> Result<Company, AppError> {
        sqlx::query_as::<_, Company>(
            r#"
            UPDATE companies
            SET name = $2, address = $3, phone = $4, email = $5,
                website = $6, description = $7, updated_at = $8
            WHERE id = $1
            RETURNING *
            "#
        )
        .bind(id)
        .bind(&update.name)
        .bind(&update.address)
        .bind(&update.phone)
        .bind(&update.email)
        .bind(&update.website)
        .bind(&update.description)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_unique_email(e, &update.email))?
        .ok_or_else(|| AppError::NotFound("Company not found".to_string()))
    }
}
