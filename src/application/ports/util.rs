// src/application/ports/util.rs

/// Source of random slug material. Output should already be in the slug
/// alphabet (lowercase ASCII letters and digits).
pub trait RandomIdGenerator: Send + Sync {
    fn generate(&self) -> String;
}
