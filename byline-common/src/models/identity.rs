//! Target identity profile

use serde::{Deserialize, Serialize};

use crate::models::name::AuthorName;

/// The researcher whose publication record is being disambiguated
///
/// Loaded once per run from an identity store and treated as read-only for
/// the run's duration. Reference strings (emails, departments, institutions,
/// certifications) feed the evidence strategies; alias names participate in
/// target-author detection during clustering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Identity {
    /// Institutional identifier, keys the search-record lookup
    pub uid: String,

    /// Canonical name
    pub primary_name: AuthorName,

    /// Name variants the researcher has published under
    pub alias_names: Vec<AuthorName>,

    /// Known email addresses
    pub emails: Vec<String>,

    /// Department affiliations
    pub departments: Vec<String>,

    /// Institutional affiliation strings
    pub institutions: Vec<String>,

    /// Known collaborators and grant co-investigators
    pub known_relationships: Vec<AuthorName>,

    /// Board certifications and specialty credentials
    pub certifications: Vec<String>,
}

impl Identity {
    /// Primary name followed by every alias
    pub fn names(&self) -> impl Iterator<Item = &AuthorName> {
        std::iter::once(&self.primary_name).chain(self.alias_names.iter())
    }

    /// A run against an identity without a last name is undefined
    pub fn has_last_name(&self) -> bool {
        !self.primary_name.last.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_yields_primary_then_aliases() {
        let identity = Identity {
            primary_name: AuthorName::new("Richard", "D", "Granstein"),
            alias_names: vec![AuthorName::new("Rick", "", "Granstein")],
            ..Default::default()
        };
        let firsts: Vec<&str> = identity.names().map(|n| n.first.as_str()).collect();
        assert_eq!(firsts, vec!["Richard", "Rick"]);
    }

    #[test]
    fn test_last_name_presence() {
        let mut identity = Identity::default();
        assert!(!identity.has_last_name());
        identity.primary_name.last = "  ".to_string();
        assert!(!identity.has_last_name());
        identity.primary_name.last = "Granstein".to_string();
        assert!(identity.has_last_name());
    }
}
