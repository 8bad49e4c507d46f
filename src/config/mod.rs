pub mod connection;
pub mod dump_config;
pub mod loader;
