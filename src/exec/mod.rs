pub mod runner;
pub mod sequential;
