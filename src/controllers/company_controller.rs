use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::dto::company_dto::{ApiResponse, CompanyResponse, RegisterCompanyRequest, UpdateCompanyRequest};
use crate::models::company::Company;
use crate::repositories::company_repository::{CompanyProfileUpdate, CompanyRepository};
use crate::utils::errors::{conflict_error, AppError};
use crate::utils::jwt::{generate_token, JwtConfig};
use bcrypt::{hash, verify, DEFAULT_COST};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

pub struct CompanyController {
    repository: CompanyRepository,
    jwt: JwtConfig,
}

impl CompanyController {
    pub fn new(pool: PgPool, jwt: JwtConfig) -> Self {
        Self {
            repository: CompanyRepository::new(pool),
            jwt,
        }
    }

    pub async fn register(&self, request: RegisterCompanyRequest) -> Result<ApiResponse<CompanyResponse>, AppError> {
        let request = request.trimmed();
        request.validate()?;

        let email = request.email;

        // Verificar que el email no exista
        if self.repository.email_exists(&email).await? {
            return Err(conflict_error("Company", "email", &email));
        }

        // Hash de la contraseña
        let password_hash = hash(&request.password, DEFAULT_COST)
            .map_err(|e| AppError::Hash(format!("Error hashing password: {}", e)))?;

        let company = Company::new(
            request.name,
            request.address,
            request.phone,
            email,
            password_hash,
        );

        let saved = self.repository.create(&company).await?;
        info!("🏢 Empresa registrada: {} ({})", saved.name, saved.id);

        Ok(ApiResponse::success_with_message(
            CompanyResponse::from(saved),
            "Company registered successfully",
        ))
    }

    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AppError> {
        let company = self.repository
            .find_by_email(request.email.trim())
            .await?
            .ok_or_else(|| AppError::Unauthorized("Invalid email or password".to_string()))?;

        let valid = verify(&request.password, &company.password_hash)
            .map_err(|e| AppError::Hash(format!("Error verifying password: {}", e)))?;

        if !valid {
            return Err(AppError::Unauthorized("Invalid email or password".to_string()));
        }

        let token = generate_token(company.id, &company.email, &self.jwt)?;
        info!("🔑 Login correcto para empresa {}", company.id);

        Ok(LoginResponse::bearer(token, self.jwt.expiration, company.id, company.name))
    }

    pub async fn profile(&self, company_id: Uuid) -> Result<CompanyResponse, AppError> {
        let company = self.repository
            .find_by_id(company_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Company not found".to_string()))?;

        Ok(CompanyResponse::from(company))
    }

    pub async fn update_profile(
        &self,
        company_id: Uuid,
        request: UpdateCompanyRequest,
    ) -> Result<ApiResponse<CompanyResponse>, AppError> {
        let request = request.trimmed();
        request.validate()?;

        let current = self.profile(company_id).await?;
        let email = request.email;

        if email != current.email && self.repository.email_exists(&email).await? {
            return Err(conflict_error("Company", "email", &email));
        }

        let updated = self.repository
            .update_profile(
                company_id,
                CompanyProfileUpdate {
                    name: request.name,
                    address: request.address,
                    phone: request.phone,
                    email,
                    website: request.website,
                    description: request.description,
                },
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            CompanyResponse::from(updated),
            "Profile updated successfully",
        ))
    }
}
