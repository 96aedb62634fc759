// src/application/commands/dp_configurations/mod.rs
mod capability;
mod create;
mod service;

pub use create::{CreateDpConfigurationCommand, CreateDpConfigurationCommandBuilder};
pub use service::DpConfigurationCommandService;
