pub mod company_controller;
pub mod dashboard_controller;
pub mod maintenance_controller;
pub mod truck_controller;
