//! Внешний API движка: команды, запросы, DTO и ошибки для клиента.

pub mod commands;
pub mod dto;
pub mod errors;
pub mod queries;

pub use commands::*;
pub use dto::*;
pub use errors::*;
pub use queries::*;
