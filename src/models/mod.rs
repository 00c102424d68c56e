//! Modelos del sistema
//! 
//! Este módulo contiene los modelos de datos que mapean
//! al schema PostgreSQL.

pub mod company;
pub mod maintenance;
pub mod truck;
