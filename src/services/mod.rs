//! Services module
//! 
//! Este módulo contiene la lógica de negocio de la aplicación. Son funciones
//! puras que los controladores aplican sobre datos ya cargados.

pub mod maintenance_schedule;
pub mod maintenance_status;
pub mod qr_link;
pub mod truck_import;
pub mod truck_search;
