pub mod core;
pub mod mysql;
pub mod postgres;
