//! URL-safe slugs derived from display names.

use deunicode::deunicode;
use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// Lowercase, hyphenated key derived from a display name.
///
/// Slugs are only ever built through [`slugify`], so two slugs are equal
/// exactly when their source names normalize to the same text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(String);

impl ValueObject for Slug {}

impl Slug {
    /// Derive the slug of a display name.
    pub fn from_name(name: &str) -> Self {
        Self(slugify(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl core::fmt::Display for Slug {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Standard slug derivation.
///
/// Transliterates to ASCII, lowercases, drops everything that is not a word
/// character, whitespace or hyphen, then collapses runs of whitespace and
/// hyphens into a single `-`. Leading and trailing `-`/`_` are stripped.
pub fn slugify(name: &str) -> String {
    let ascii = deunicode(name);

    let mut out = String::with_capacity(ascii.len());
    let mut in_sep = false;
    for c in ascii.chars() {
        if c == '-' || c.is_whitespace() {
            if !in_sep {
                out.push('-');
                in_sep = true;
            }
        } else if c.is_ascii_alphanumeric() || c == '_' {
            out.push(c.to_ascii_lowercase());
            in_sep = false;
        }
    }
    out.trim_matches(|c| c == '-' || c == '_').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn lowercases_and_hyphenates() {
        assert_eq!(slugify("Example name"), "example-name");
        assert_eq!(slugify("Space Grey"), "space-grey");
        assert_eq!(slugify("Red color"), slugify("red color"));
    }

    #[test]
    fn drops_punctuation_and_collapses_separators() {
        assert_eq!(slugify("  Wings -- name!  "), "wings-name");
        assert_eq!(slugify("a_b"), "a_b");
        assert_eq!(slugify("#FF69B4"), "ff69b4");
    }

    #[test]
    fn separators_never_lead_or_trail() {
        assert_eq!(slugify("-red"), "red");
        assert_eq!(slugify("red-"), "red");
        assert_eq!(slugify(" - "), "");
    }

    #[test]
    fn transliterates_non_ascii() {
        assert_eq!(slugify("Café Crème"), "cafe-creme");
        assert_eq!(slugify("Żółty"), "zolty");
        assert_eq!(slugify("Straße"), "strasse");
    }

    #[test]
    fn strips_underscores_at_the_ends() {
        assert_eq!(slugify("_red_"), "red");
        assert_eq!(slugify("__a__b__"), "a__b");
        assert_eq!(slugify("- _x_ -"), "x");
    }

    #[test]
    fn slug_value_object_compares_by_text() {
        assert_eq!(Slug::from_name("Red Color"), Slug::from_name("red   color"));
        assert_eq!(Slug::from_name("Red Color").as_str(), "red-color");
    }

    proptest! {
        #[test]
        fn slug_alphabet_is_url_safe(name in ".*") {
            let slug = slugify(&name);
            prop_assert!(slug
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-'));
        }

        #[test]
        fn slugify_is_idempotent(name in "[A-Za-z0-9 _-]{0,32}") {
            let once = slugify(&name);
            prop_assert_eq!(slugify(&once), once.clone());
        }
    }
}
