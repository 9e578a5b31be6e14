//! Town exclusion policy.
//!
//! An [`ExclusionSet`] holds the configured town names that must never appear
//! in outward results. The same predicate backs single-town lookups and
//! aggregate counts, so a hidden town cannot surface through either.

use serde::{Deserialize, Serialize};

use crate::entities::Town;

/// Placeholder used when no exclusion list has been configured.
pub const DEFAULT_HIDDEN_TOWN: &str = "ExampleTown";

/// Ordered list of town names to hide.
///
/// Membership is an exact, case-sensitive string match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExclusionSet(Vec<String>);

impl ExclusionSet {
    pub fn new(names: Vec<String>) -> Self {
        Self(names)
    }

    /// Set that hides nothing.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check whether a town name is hidden.
    pub fn is_excluded(&self, town_name: &str) -> bool {
        self.0.iter().any(|hidden| hidden == town_name)
    }

    /// Map a hidden town to `None`, pass anything else through.
    pub fn filter_town(&self, town: Option<Town>) -> Option<Town> {
        town.filter(|t| !self.is_excluded(t.name.as_str()))
    }

    /// Count the names that are not hidden.
    pub fn count_visible<'a, I>(&self, town_names: I) -> u64
    where
        I: IntoIterator<Item = &'a str>,
    {
        town_names
            .into_iter()
            .filter(|name| !self.is_excluded(name))
            .count() as u64
    }
}

impl Default for ExclusionSet {
    /// The first-run list: a single documented placeholder, never an empty set.
    fn default() -> Self {
        Self(vec![DEFAULT_HIDDEN_TOWN.to_string()])
    }
}

impl From<Vec<String>> for ExclusionSet {
    fn from(names: Vec<String>) -> Self {
        Self(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::TownName;

    fn town(name: &str) -> Town {
        Town::new(TownName::new(name).expect("valid town name"))
    }

    fn set(names: &[&str]) -> ExclusionSet {
        ExclusionSet::new(names.iter().map(|n| n.to_string()).collect())
    }

    #[test]
    fn test_default_is_single_placeholder() {
        let default = ExclusionSet::default();
        assert_eq!(default.len(), 1);
        assert_eq!(default.names()[0], "ExampleTown");
    }

    #[test]
    fn test_membership_is_case_sensitive() {
        let hidden = set(&["Beta"]);
        assert!(hidden.is_excluded("Beta"));
        assert!(!hidden.is_excluded("beta"));
        assert!(!hidden.is_excluded("Bet"));
    }

    #[test]
    fn test_filter_town() {
        let hidden = set(&["Beta"]);
        assert!(hidden.filter_town(Some(town("Beta"))).is_none());
        assert_eq!(
            hidden
                .filter_town(Some(town("Alpha")))
                .map(|t| t.name.to_string()),
            Some("Alpha".to_string())
        );
        assert!(hidden.filter_town(None).is_none());
    }

    #[test]
    fn test_count_visible() {
        let hidden = set(&["Beta", "Gamma"]);
        let names = ["Alpha", "Beta", "Delta"];
        assert_eq!(hidden.count_visible(names), 2);
        assert_eq!(ExclusionSet::empty().count_visible(names), 3);
    }

    #[test]
    fn test_serializes_as_plain_list() {
        let json = serde_json::to_string(&set(&["Beta"])).expect("serialize");
        assert_eq!(json, r#"["Beta"]"#);
    }
}
