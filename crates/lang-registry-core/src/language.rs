//! This module provides the [`LanguageDescriptor`] value type.

use crate::error::ValidationError;
use std::fmt;
use std::hash::{Hash, Hasher};
use unic_langid::{LanguageIdentifier, LanguageIdentifierError};

/// A supported language, keyed by its abbreviation (e.g. `"en"`).
///
/// Descriptors are immutable once constructed. Both fields are guaranteed to
/// contain at least one non-whitespace character. Equality and hashing use the
/// abbreviation only.
#[derive(Clone, Debug)]
pub struct LanguageDescriptor {
    abbreviation: String,
    name: String,
}

impl LanguageDescriptor {
    /// Creates a descriptor, rejecting empty or whitespace-only fields.
    pub fn new(
        abbreviation: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let abbreviation = abbreviation.into();
        let name = name.into();

        ensure_not_blank(&abbreviation, "abbreviation")?;
        ensure_not_blank(&name, "name")?;

        Ok(Self { abbreviation, name })
    }

    /// Creates a descriptor from optional document attributes.
    ///
    /// An absent attribute is reported as [`ValidationError::Missing`].
    pub fn from_attributes(
        abbreviation: Option<&str>,
        name: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let abbreviation = abbreviation.ok_or(ValidationError::Missing {
            entity: ENTITY,
            field: "abbreviation",
        })?;
        let name = name.ok_or(ValidationError::Missing {
            entity: ENTITY,
            field: "name",
        })?;
        Self::new(abbreviation, name)
    }

    /// The unique key of this language.
    pub fn abbreviation(&self) -> &str {
        &self.abbreviation
    }

    /// The display name of this language.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parses the abbreviation as a BCP 47 language identifier.
    pub fn language_identifier(&self) -> Result<LanguageIdentifier, LanguageIdentifierError> {
        self.abbreviation.parse()
    }
}

impl PartialEq for LanguageDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.abbreviation == other.abbreviation
    }
}

impl Eq for LanguageDescriptor {}

impl Hash for LanguageDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.abbreviation.hash(state);
    }
}

impl fmt::Display for LanguageDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.abbreviation)
    }
}

const ENTITY: &str = "language";

fn ensure_not_blank(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Blank {
            entity: ENTITY,
            field,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    #[test]
    fn new_keeps_fields_verbatim() {
        let language = LanguageDescriptor::new("en", "English").unwrap();

        assert_eq!(language.abbreviation(), "en");
        assert_eq!(language.name(), "English");
        assert_eq!(language.to_string(), "English (en)");
    }

    #[rstest]
    #[case("", "English", "abbreviation")]
    #[case("   ", "English", "abbreviation")]
    #[case("\t\n", "English", "abbreviation")]
    #[case("en", "", "name")]
    #[case("en", "  ", "name")]
    fn new_rejects_blank_fields(
        #[case] abbreviation: &str,
        #[case] name: &str,
        #[case] field: &'static str,
    ) {
        let err = LanguageDescriptor::new(abbreviation, name).unwrap_err();

        assert_eq!(
            err,
            ValidationError::Blank {
                entity: "language",
                field
            }
        );
    }

    #[test]
    fn from_attributes_reports_missing_field() {
        let err = LanguageDescriptor::from_attributes(Some("en"), None).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Missing {
                entity: "language",
                field: "name"
            }
        );

        let err = LanguageDescriptor::from_attributes(None, Some("English")).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Missing {
                entity: "language",
                field: "abbreviation"
            }
        );
    }

    #[test]
    fn clone_is_equal_and_independent() {
        let original = LanguageDescriptor::new("fr", "Français").unwrap();
        let copy = original.clone();

        assert_eq!(original, copy);
        assert_eq!(original.abbreviation(), copy.abbreviation());
        assert_eq!(original.name(), copy.name());
        assert_ne!(
            original.abbreviation().as_ptr(),
            copy.abbreviation().as_ptr()
        );
        assert_ne!(original.name().as_ptr(), copy.name().as_ptr());
    }

    #[test]
    fn identity_is_the_abbreviation() {
        let english = LanguageDescriptor::new("en", "English").unwrap();
        let anglais = LanguageDescriptor::new("en", "Anglais").unwrap();
        let french = LanguageDescriptor::new("fr", "English").unwrap();

        assert_eq!(english, anglais);
        assert_ne!(english, french);

        let set: HashSet<_> = [english, anglais, french].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn language_identifier_parses_abbreviation() {
        let language = LanguageDescriptor::new("en-US", "English (US)").unwrap();
        let id = language.language_identifier().unwrap();

        assert_eq!(id.language.as_str(), "en");
        assert_eq!(id.region.map(|r| r.to_string()), Some("US".to_string()));
    }
}
