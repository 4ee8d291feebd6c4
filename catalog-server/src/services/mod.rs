//! Business services

pub mod catalog_service;

pub use catalog_service::CatalogService;
