pub mod alert;
pub mod auth;
pub mod maintenance;
pub mod mileage;
pub mod user;
pub mod vehicle;
