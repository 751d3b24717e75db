pub mod diagnostics_service;
pub mod generation_service;
pub mod generator;
