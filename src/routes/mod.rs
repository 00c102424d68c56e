pub mod company_routes;
pub mod dashboard_routes;
pub mod maintenance_routes;
pub mod truck_routes;
