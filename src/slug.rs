//! URL slugs for categories and courses.

use unicode_normalization::UnicodeNormalization;

/// Lowercase ASCII slug. Text is NFKD-decomposed first so accented letters keep their base
/// letter; whatever is still not ASCII is dropped. Then anything that is not alphanumeric,
/// `_`, `-` or whitespace goes, whitespace and hyphen runs collapse into one `-`, and `-`/`_`
/// are trimmed from both ends.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_dash = false;

    for ch in input.nfkd().filter(char::is_ascii) {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else if ch == '-' || ch.is_whitespace() {
            pending_dash = true;
        }
    }

    slug.trim_matches(|c| c == '-' || c == '_').to_string()
}

/// `base` with a numeric suffix, `n >= 2`.
pub fn with_suffix(base: &str, n: u32) -> String {
    format!("{base}-{n}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_joins_words() {
        assert_eq!(slugify("Web Design Basics"), "web-design-basics");
    }

    #[test]
    fn strips_punctuation() {
        assert_eq!(slugify("Rust & You: (Part 2)!"), "rust-you-part-2");
        assert_eq!(slugify("Graphic Design (Copy)"), "graphic-design-copy");
    }

    #[test]
    fn collapses_separators() {
        assert_eq!(slugify("  SAT  --  Prep  "), "sat-prep");
        assert_eq!(slugify("_private_"), "private");
    }

    #[test]
    fn folds_accents_and_drops_other_scripts() {
        assert_eq!(slugify("Café Français"), "cafe-francais");
        assert_eq!(slugify("Ōzbekiston tili"), "ozbekiston-tili");
        assert_eq!(slugify("ﬁne print"), "fine-print");
        assert_eq!(slugify("日本語"), "");
    }

    #[test]
    fn suffix_format() {
        assert_eq!(with_suffix("web-design", 2), "web-design-2");
    }
}
