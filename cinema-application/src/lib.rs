pub mod command;
pub mod command_handler;
pub mod config;
pub mod context;
pub mod dto;
pub mod error;
pub mod query;
pub mod query_handler;
pub mod telemetry;
pub mod validation;

pub use command_handler::PurchaseTicketsHandler;
