pub mod dp_configurations;
pub mod users;
