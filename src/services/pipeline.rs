use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{GroupedTitles, TitleRecord},
    services::{
        artifact::{load_titles, save_titles},
        grouper::{group_by_service, total_titles},
        normalizer::ServiceNormalizer,
        notifier::{DiscordNotifier, NotifyOutcome},
        providers::{CatalogProvider, FetchParams},
    },
};

/// Result of one fetch-or-replay run
#[derive(Debug)]
pub struct RunReport {
    /// Records fetched or loaded, before filtering
    pub records: usize,
    pub grouped: GroupedTitles,
    /// Artifact written in live mode
    pub artifact: Option<PathBuf>,
    pub notification: NotifyOutcome,
}

impl RunReport {
    /// Per-service counts, in service name order
    pub fn summary(&self) -> String {
        format_counts(&self.grouped)
    }
}

/// "Filtered to N titles across M services:" followed by one line per service
pub fn format_counts(grouped: &GroupedTitles) -> String {
    let mut services: Vec<_> = grouped.iter().collect();
    services.sort_by(|a, b| a.0.cmp(b.0));

    let mut lines = vec![format!(
        "Filtered to {} titles across {} services:",
        total_titles(grouped),
        grouped.len()
    )];
    lines.extend(
        services
            .into_iter()
            .map(|(service, titles)| format!("  {}: {} titles", service, titles.len())),
    );

    lines.join("\n")
}

/// Fetch, extract, persist, group and notify
pub struct Pipeline {
    provider: Arc<dyn CatalogProvider>,
    normalizer: ServiceNormalizer,
    notifier: DiscordNotifier,
    output_dir: PathBuf,
    today: NaiveDate,
}

impl Pipeline {
    pub fn new(
        provider: Arc<dyn CatalogProvider>,
        normalizer: ServiceNormalizer,
        notifier: DiscordNotifier,
        output_dir: PathBuf,
        today: NaiveDate,
    ) -> Self {
        Self {
            provider,
            normalizer,
            notifier,
            output_dir,
            today,
        }
    }

    /// Query the catalog, save the extracted records, then notify
    pub async fn run_live(&self, params: &FetchParams) -> AppResult<RunReport> {
        let nodes = self.provider.fetch_new_titles(params).await?;
        let records: Vec<TitleRecord> = nodes.into_iter().map(TitleRecord::from).collect();

        let artifact = save_titles(&self.output_dir, self.today, &records).await?;

        let mut report = self.process_and_notify(records).await?;
        report.artifact = Some(artifact);
        Ok(report)
    }

    /// Notify from a previously saved artifact, without touching the catalog
    pub async fn run_replay(&self, path: &Path) -> AppResult<RunReport> {
        let records = load_titles(path).await?;
        self.process_and_notify(records).await
    }

    async fn process_and_notify(&self, records: Vec<TitleRecord>) -> AppResult<RunReport> {
        let count = records.len();
        let grouped = group_by_service(&self.normalizer, records);

        tracing::info!(
            records = count,
            kept = total_titles(&grouped),
            services = grouped.len(),
            "Filtered titles to subscribed services"
        );

        let notification = self.notifier.notify(&grouped, self.today).await?;

        Ok(RunReport {
            records: count,
            grouped,
            artifact: None,
            notification,
        })
    }
}
