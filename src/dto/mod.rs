//! DTOs de la API
//! 
//! Requests y responses serializados en JSON.

pub mod auth_dto;
pub mod company_dto;
pub mod dashboard_dto;
pub mod maintenance_dto;
pub mod truck_dto;
