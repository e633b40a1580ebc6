use crate::models::{ServiceName, ServiceTable};

/// Maps raw provider labels onto subscribed service names
#[derive(Debug, Clone, Default)]
pub struct ServiceNormalizer {
    table: ServiceTable,
}

impl ServiceNormalizer {
    pub fn new(table: ServiceTable) -> Self {
        Self { table }
    }

    /// Canonical name for `raw_label`, or `None` for unsubscribed services
    ///
    /// Entries are scanned in declared order and the first exact match wins.
    pub fn normalize(&self, raw_label: Option<&str>) -> Option<&ServiceName> {
        let label = raw_label.filter(|l| !l.is_empty())?;

        self.table
            .entries()
            .iter()
            .find(|service| service.accepts(label))
            .map(|service| &service.name)
    }

    pub fn table(&self) -> &ServiceTable {
        &self.table
    }
}
