use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Canonical name of a subscribed streaming service (e.g. "HBO Max")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ServiceName(String);

impl ServiceName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ServiceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A subscribed service and the raw provider labels accepted for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscribedService {
    pub name: ServiceName,
    pub variants: Vec<String>,
}

impl SubscribedService {
    pub fn new(name: &str, variants: &[&str]) -> Self {
        Self {
            name: ServiceName::new(name),
            variants: variants.iter().map(|v| v.to_string()).collect(),
        }
    }

    /// Exact, case-sensitive match against the accepted labels
    pub fn accepts(&self, raw_label: &str) -> bool {
        self.variants.iter().any(|variant| variant == raw_label)
    }
}

/// Ordered table of subscribed services
///
/// Lookups scan entries in declared order, so the first entry listing a label wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceTable {
    entries: Vec<SubscribedService>,
}

impl ServiceTable {
    pub fn new(entries: Vec<SubscribedService>) -> Self {
        Self { entries }
    }

    /// The services this deployment is subscribed to
    pub fn subscribed() -> Self {
        Self::new(vec![
            SubscribedService::new(
                "Amazon Prime",
                &["Amazon Prime Video", "Amazon Prime Video Free with Ads"],
            ),
            SubscribedService::new("Apple TV", &["Apple TV", "Apple TV+", "Apple TV Plus"]),
            SubscribedService::new("Disney Plus", &["Disney Plus", "Disney+"]),
            SubscribedService::new(
                "HBO Max",
                &["HBO Max", "Max", "Max Amazon Channel", "HBO Max Amazon Channel"],
            ),
            SubscribedService::new("Hulu", &["Hulu"]),
            SubscribedService::new("Netflix", &["Netflix"]),
            SubscribedService::new("Peacock", &["Peacock Premium", "Peacock"]),
        ])
    }

    pub fn entries(&self) -> &[SubscribedService] {
        &self.entries
    }
}

impl Default for ServiceTable {
    fn default() -> Self {
        Self::subscribed()
    }
}
