pub mod ruc_dto;

pub use ruc_dto::{first_value, RucQuery, RucResponseDto};
