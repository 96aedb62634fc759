// src/application/ports/mod.rs
pub mod media;
pub mod security;
pub mod time;
pub mod util;
