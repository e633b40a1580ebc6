use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

use crate::{config::Config, services::FetchParams};

/// Post newly released streaming titles to Discord
#[derive(Parser, Debug)]
#[command(name = "new-titles")]
#[command(about = "Fetch new streaming titles and post a summary to Discord", long_about = None)]
pub struct Cli {
    /// Replay a previously saved titles file instead of querying the catalog
    pub file: Option<PathBuf>,

    /// Catalog country code (overrides CATALOG_COUNTRY)
    #[arg(long)]
    pub country: Option<String>,

    /// Catalog language code (overrides CATALOG_LANGUAGE)
    #[arg(long)]
    pub language: Option<String>,

    /// Listing date, YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Titles per page (overrides CATALOG_PAGE_SIZE)
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Restrict the listing to a catalog package; repeatable
    #[arg(long = "package")]
    pub packages: Vec<String>,
}

impl Cli {
    /// Fetch parameters from flags, falling back to configuration
    pub fn fetch_params(&self, config: &Config, today: NaiveDate) -> FetchParams {
        FetchParams {
            country: self
                .country
                .clone()
                .unwrap_or_else(|| config.catalog_country.clone()),
            language: self
                .language
                .clone()
                .unwrap_or_else(|| config.catalog_language.clone()),
            date: self.date.unwrap_or(today),
            packages: self.packages.clone(),
            page_size: self.page_size.unwrap_or(config.catalog_page_size),
        }
    }
}
