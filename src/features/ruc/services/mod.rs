pub mod ruc_service;

pub use ruc_service::RucService;
