pub mod company_repository;
pub mod maintenance_repository;
pub mod truck_repository;
