/// Discord webhook notifier
///
/// Delivery is best effort: a rejected or failed POST is logged and reported
/// through [`NotifyOutcome`], never raised. Only a missing webhook URL is an error.
use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::GroupedTitles,
    services::{
        formatter::format_summary,
        grouper::total_titles,
        transport::{Transport, TransportRequest},
    },
};

pub const EMBED_TITLE: &str = "🎬 New Streaming Titles";
pub const EMBED_COLOR: u32 = 0x5865F2;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WebhookPayload {
    pub embeds: Vec<Embed>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Embed {
    pub title: String,
    pub description: String,
    pub color: u32,
    pub footer: EmbedFooter,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EmbedFooter {
    pub text: String,
}

/// What happened to a notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyOutcome {
    /// Nothing to send; no request was made
    Skipped,
    Delivered { total: usize },
    Failed { status: Option<u16>, reason: String },
}

/// Single-embed payload summarising `grouped`
pub fn build_payload(grouped: &GroupedTitles, date: NaiveDate) -> WebhookPayload {
    let total = total_titles(grouped);

    WebhookPayload {
        embeds: vec![Embed {
            title: EMBED_TITLE.to_string(),
            description: format_summary(grouped),
            color: EMBED_COLOR,
            footer: EmbedFooter {
                text: format!("{} new title(s) • {}", total, date.format("%Y-%m-%d")),
            },
        }],
    }
}

pub struct DiscordNotifier {
    transport: Arc<dyn Transport>,
    webhook_url: Option<String>,
}

impl DiscordNotifier {
    pub fn new(transport: Arc<dyn Transport>, webhook_url: Option<String>) -> Self {
        Self {
            transport,
            webhook_url: webhook_url.filter(|url| !url.trim().is_empty()),
        }
    }

    pub async fn notify(&self, grouped: &GroupedTitles, date: NaiveDate) -> AppResult<NotifyOutcome> {
        let webhook_url = self.webhook_url.as_deref().ok_or_else(|| {
            AppError::Configuration("DISCORD_WEBHOOK_URL environment variable is not set".to_string())
        })?;

        let total = total_titles(grouped);
        if total == 0 {
            tracing::info!("No titles to send");
            return Ok(NotifyOutcome::Skipped);
        }

        let payload = build_payload(grouped, date);
        let request = TransportRequest {
            url: webhook_url.to_string(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: serde_json::to_value(&payload)?,
        };

        let outcome = match self.transport.post_json(request).await {
            Ok(response) if response.is_success() => {
                tracing::info!(total, services = grouped.len(), "Sent combined embed");
                NotifyOutcome::Delivered { total }
            }
            Ok(response) => {
                tracing::warn!(
                    status = response.status,
                    body = %response.body,
                    "Webhook rejected notification"
                );
                NotifyOutcome::Failed {
                    status: Some(response.status),
                    reason: response.body,
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Webhook delivery failed");
                NotifyOutcome::Failed {
                    status: None,
                    reason: e.to_string(),
                }
            }
        };

        Ok(outcome)
    }
}
