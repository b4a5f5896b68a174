pub mod execution_service;
pub mod messages;
pub mod telegram_service;
