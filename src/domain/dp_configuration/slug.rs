//! Slug sanitization.
//!
//! Candidates are reduced by plain character-class filtering: anything outside
//! `[a-z0-9-]` after lowercasing is dropped, with no transliteration. Scripts
//! without ASCII letters therefore collapse to an empty slug.
//!
//! Word separators are the `\s` class of browser regular expressions, which
//! clients use to preview slugs: Unicode `White_Space` minus U+0085 (NEL),
//! plus U+FEFF (BOM).

/// Turn user-supplied text into the URL-safe slug alphabet.
///
/// Lowercases, replaces each whitespace run with a single hyphen, removes every
/// character outside `[a-z0-9-]`, then collapses hyphen runs and trims hyphens
/// from both ends. The result is either empty or a valid slug.
pub fn sanitize_candidate(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let mut filtered = String::with_capacity(lowered.len());
    let mut in_whitespace = false;

    for ch in lowered.chars() {
        if is_separator(ch) {
            if !in_whitespace {
                filtered.push('-');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        if is_slug_char(ch) {
            filtered.push(ch);
        }
    }

    filtered
        .split('-')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// `true` for lowercase ASCII letters, digits, and single interior hyphens.
pub fn is_url_safe_slug(value: &str) -> bool {
    !value.is_empty()
        && !value.starts_with('-')
        && !value.ends_with('-')
        && !value.contains("--")
        && value.chars().all(is_slug_char)
}

fn is_separator(ch: char) -> bool {
    match ch {
        '\u{85}' => false,
        '\u{feff}' => true,
        other => other.is_whitespace(),
    }
}

const fn is_slug_char(ch: char) -> bool {
    ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-'
}
