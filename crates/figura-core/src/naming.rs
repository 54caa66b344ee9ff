//! Name normalization into identifier conventions.

use serde::{Deserialize, Serialize};

use crate::errors::NamingError;

/// Target casing for a normalized name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamingConvention {
    /// `LoginButton`
    #[default]
    Pascal,
    /// `loginButton`
    Camel,
    /// `login-button`
    Slug,
}

/// Normalize a free-text label.
///
/// Hyphens and underscores separate words like spaces do. Anything else
/// outside letters, digits and whitespace is dropped. Identifier
/// conventions never start with a digit: such results get a `_` prefix.
pub fn normalize_name(raw: &str, convention: NamingConvention) -> Result<String, NamingError> {
    let cleaned: String = raw
        .chars()
        .map(|c| if c == '-' || c == '_' { ' ' } else { c })
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();
    let words: Vec<&str> = cleaned.split_whitespace().collect();
    if words.is_empty() {
        return Err(NamingError::InvalidName {
            raw: raw.to_string(),
        });
    }

    // Case mapping can expand a letter into combining marks, so the
    // alphanumeric filter runs again on the mapped text.
    let normalized = match convention {
        NamingConvention::Pascal => guard_leading_digit(retain_alphanumeric(&pascal(&words))),
        NamingConvention::Camel => {
            guard_leading_digit(retain_alphanumeric(&lower_first(&pascal(&words))))
        }
        NamingConvention::Slug => words
            .iter()
            .map(|word| retain_alphanumeric(&word.to_lowercase()))
            .filter(|word| !word.is_empty())
            .collect::<Vec<_>>()
            .join("-"),
    };
    if normalized.is_empty() {
        return Err(NamingError::InvalidName {
            raw: raw.to_string(),
        });
    }
    Ok(normalized)
}

fn retain_alphanumeric(text: &str) -> String {
    text.chars().filter(|c| c.is_alphanumeric()).collect()
}

fn pascal(words: &[&str]) -> String {
    words.iter().map(|word| upper_first(word)).collect()
}

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn lower_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn guard_leading_digit(name: String) -> String {
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{name}")
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_pascal() {
        assert_eq!(
            normalize_name("Login Button", NamingConvention::Pascal).unwrap(),
            "LoginButton"
        );
        assert_eq!(
            normalize_name("  primary   call-to-action! ", NamingConvention::Pascal).unwrap(),
            "PrimaryCallToAction"
        );
        assert_eq!(
            normalize_name("iconSet", NamingConvention::Pascal).unwrap(),
            "IconSet"
        );
    }

    #[test]
    fn test_camel_and_slug() {
        assert_eq!(
            normalize_name("Login Button", NamingConvention::Camel).unwrap(),
            "loginButton"
        );
        assert_eq!(
            normalize_name("Login Button", NamingConvention::Slug).unwrap(),
            "login-button"
        );
        assert_eq!(
            normalize_name("Nav_Bar / Main", NamingConvention::Slug).unwrap(),
            "nav-bar-main"
        );
    }

    #[test]
    fn test_leading_digit() {
        assert_eq!(
            normalize_name("2 column grid", NamingConvention::Pascal).unwrap(),
            "_2ColumnGrid"
        );
        assert_eq!(
            normalize_name("2 column grid", NamingConvention::Slug).unwrap(),
            "2-column-grid"
        );
    }

    #[test]
    fn test_empty_name_is_invalid() {
        for raw in ["", "   ", "***", "-_-"] {
            assert_eq!(
                normalize_name(raw, NamingConvention::Pascal),
                Err(NamingError::InvalidName {
                    raw: raw.to_string()
                })
            );
        }
    }

    #[test]
    fn test_case_mapping_marks_are_dropped() {
        let camel = normalize_name("İstanbul map", NamingConvention::Camel).unwrap();
        assert_eq!(camel, "istanbulMap");
        assert_eq!(normalize_name(&camel, NamingConvention::Camel).unwrap(), camel);

        let slug = normalize_name("İstanbul map", NamingConvention::Slug).unwrap();
        assert_eq!(slug, "istanbul-map");
        assert_eq!(normalize_name(&slug, NamingConvention::Slug).unwrap(), slug);
    }

    fn convention() -> impl Strategy<Value = NamingConvention> {
        prop_oneof![
            Just(NamingConvention::Pascal),
            Just(NamingConvention::Camel),
            Just(NamingConvention::Slug),
        ]
    }

    proptest! {
        #[test]
        fn prop_normalization_is_idempotent(
            raw in "[a-zA-Z0-9 _*!/İßéΩǅΣ-]{0,32}",
            convention in convention(),
        ) {
            if let Ok(once) = normalize_name(&raw, convention) {
                let twice = normalize_name(&once, convention).unwrap();
                prop_assert_eq!(once, twice);
            }
        }
    }
}
