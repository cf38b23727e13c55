//! Author name parts and comparison helpers

use serde::{Deserialize, Serialize};
use std::fmt;

/// One author name as it appears on a record or identity profile
///
/// Any part may be empty; bibliographic sources routinely omit middle names
/// and abbreviate first names to initials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorName {
    pub first: String,
    pub middle: String,
    pub last: String,
}

/// Case-insensitive string equality over full Unicode lowercase
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

impl AuthorName {
    pub fn new(
        first: impl Into<String>,
        middle: impl Into<String>,
        last: impl Into<String>,
    ) -> Self {
        Self {
            first: first.into(),
            middle: middle.into(),
            last: last.into(),
        }
    }

    /// Uppercased first letter of the first name, if present
    pub fn first_initial(&self) -> Option<char> {
        self.first.chars().next().map(|c| c.to_ascii_uppercase())
    }

    /// Uppercased first letter of the middle name, if present
    pub fn middle_initial(&self) -> Option<char> {
        self.middle.chars().next().map(|c| c.to_ascii_uppercase())
    }

    /// Last names equal, ignoring case
    pub fn eq_last(&self, other: &AuthorName) -> bool {
        !self.last.is_empty() && eq_ignore_case(&self.last, &other.last)
    }

    /// Full first names equal, ignoring case
    ///
    /// An abbreviated first name ("R") does not equal the full form
    /// ("Richard"); initial-level matching is a separate, weaker test.
    pub fn eq_first(&self, other: &AuthorName) -> bool {
        !self.first.is_empty() && eq_ignore_case(&self.first, &other.first)
    }

    /// First initials present on both names and equal
    pub fn eq_first_initial(&self, other: &AuthorName) -> bool {
        match (self.first_initial(), other.first_initial()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Middle initials present on both names and equal
    pub fn eq_middle_initial(&self, other: &AuthorName) -> bool {
        match (self.middle_initial(), other.middle_initial()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Middle initials present on both names but different
    pub fn conflicting_middle_initial(&self, other: &AuthorName) -> bool {
        match (self.middle_initial(), other.middle_initial()) {
            (Some(a), Some(b)) => a != b,
            _ => false,
        }
    }

    /// Full first names present on both, sharing an initial but spelled
    /// differently ("Richard" vs "Robert" conflicts; "R" vs "Richard" does
    /// not, the abbreviation is compatible with the full form)
    pub fn conflicting_first(&self, other: &AuthorName) -> bool {
        if self.first.chars().count() <= 1 || other.first.chars().count() <= 1 {
            return false;
        }
        !eq_ignore_case(&self.first, &other.first)
    }

    /// Same person as far as the name parts can tell: last names equal and
    /// neither the first names nor the middle initials conflict
    pub fn compatible_with(&self, other: &AuthorName) -> bool {
        self.eq_last(other)
            && !self.conflicting_first(other)
            && !self.conflicting_middle_initial(other)
    }
}

impl fmt::Display for AuthorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for part in [&self.first, &self.middle, &self.last] {
            if !part.is_empty() {
                if !first {
                    write!(f, " ")?;
                }
                write!(f, "{}", part)?;
                first = false;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        let name = AuthorName::new("richard", "d", "Granstein");
        assert_eq!(name.first_initial(), Some('R'));
        assert_eq!(name.middle_initial(), Some('D'));
        assert_eq!(AuthorName::new("", "", "Smith").first_initial(), None);
    }

    #[test]
    fn test_first_name_equality_is_exact() {
        let full = AuthorName::new("Richard", "", "Granstein");
        let abbreviated = AuthorName::new("R", "", "Granstein");
        assert!(full.eq_first(&AuthorName::new("RICHARD", "", "Granstein")));
        assert!(!full.eq_first(&abbreviated));
        assert!(full.eq_first_initial(&abbreviated));
    }

    #[test]
    fn test_middle_initial_comparison_requires_both() {
        let with = AuthorName::new("Richard", "D", "Granstein");
        let without = AuthorName::new("Richard", "", "Granstein");
        assert!(with.eq_middle_initial(&AuthorName::new("R", "david", "Granstein")));
        assert!(!with.eq_middle_initial(&without));
        assert!(!with.conflicting_middle_initial(&without));
        assert!(with.conflicting_middle_initial(&AuthorName::new("R", "J", "Granstein")));
    }

    #[test]
    fn test_compatibility() {
        let target = AuthorName::new("Richard", "D", "Granstein");
        // Abbreviation is compatible with the full form
        assert!(target.compatible_with(&AuthorName::new("R", "", "granstein")));
        // A different full first name is not
        assert!(!target.compatible_with(&AuthorName::new("Robert", "", "Granstein")));
        // A different middle initial is not
        assert!(!target.compatible_with(&AuthorName::new("Richard", "J", "Granstein")));
        // A different last name is not
        assert!(!target.compatible_with(&AuthorName::new("Richard", "D", "Grant")));
    }

    #[test]
    fn test_display_skips_empty_parts() {
        assert_eq!(
            AuthorName::new("Richard", "D", "Granstein").to_string(),
            "Richard D Granstein"
        );
        assert_eq!(AuthorName::new("R", "", "Granstein").to_string(), "R Granstein");
    }
}
