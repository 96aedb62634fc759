pub mod dp_configuration;
pub mod errors;
pub mod user;
