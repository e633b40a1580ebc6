/// Catalog data provider abstraction
///
/// A provider pages through a catalog's "new titles" listing and returns the raw
/// nodes, each tagged with the provider label of its watch offer. Extraction and
/// grouping happen downstream and are provider-independent.
use chrono::{Local, NaiveDate};

use crate::{error::AppResult, models::RawNode};

pub mod justwatch;
pub mod queries;

pub use justwatch::JustWatchProvider;

/// Parameters of one new-titles listing
#[derive(Debug, Clone, PartialEq)]
pub struct FetchParams {
    pub country: String,
    pub language: String,
    pub date: NaiveDate,
    /// Catalog package filter; empty means every package
    pub packages: Vec<String>,
    pub page_size: u32,
}

impl Default for FetchParams {
    fn default() -> Self {
        Self {
            country: "US".to_string(),
            language: "en".to_string(),
            date: Local::now().date_naive(),
            packages: Vec::new(),
            page_size: 50,
        }
    }
}

/// Trait for new-title catalog providers
#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Fetch every page of the listing
    ///
    /// Any failed page aborts the whole fetch; no partial results are returned.
    async fn fetch_new_titles(&self, params: &FetchParams) -> AppResult<Vec<RawNode>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
