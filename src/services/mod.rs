pub mod alert_service;
pub mod authorization_service;
pub mod jwt_service;
