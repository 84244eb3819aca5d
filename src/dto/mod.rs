pub mod auth_dto;
pub mod common;
pub mod maintenance_dto;
pub mod mileage_dto;
pub mod vehicle_dto;
