use crate::application::ports::util::RandomIdGenerator;

/// Alphabet for generated slugs. Lowercase only, so ids already satisfy the
/// slug rules.
pub const SLUG_ID_ALPHABET: [char; 36] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i',
    'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];
pub const SLUG_ID_LENGTH: usize = 10;

#[derive(Default, Clone)]
pub struct NanoIdGenerator;

impl RandomIdGenerator for NanoIdGenerator {
    fn generate(&self) -> String {
        nanoid::nanoid!(SLUG_ID_LENGTH, &SLUG_ID_ALPHABET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dp_configuration::slug::is_url_safe_slug;
    use std::collections::HashSet;

    #[test]
    fn generated_ids_are_valid_slugs() {
        let generator = NanoIdGenerator;
        let ids: HashSet<String> = (0..64).map(|_| generator.generate()).collect();
        assert!(ids.len() > 60);
        for id in &ids {
            assert_eq!(id.len(), SLUG_ID_LENGTH);
            assert!(is_url_safe_slug(id), "{id}");
        }
    }
}
