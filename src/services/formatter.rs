use crate::models::{GroupedTitles, ServiceName, TitleRecord};

/// Titles listed per service before the "...and N more" footer
pub const MAX_TITLES_PER_SERVICE: usize = 10;

/// Shown when a record has neither a show title nor its own title
pub const UNKNOWN_TITLE: &str = "Unknown";

/// One bullet line for a title
///
/// Seasons are shown under their show's name, with the season's own title
/// appended when it differs (e.g. "• Example Show - Season 2").
pub fn format_title_line(record: &TitleRecord) -> String {
    let own_title = record.title.as_deref().filter(|t| !t.is_empty());
    let mut name = record
        .show_title
        .as_deref()
        .filter(|t| !t.is_empty())
        .or(own_title)
        .unwrap_or(UNKNOWN_TITLE)
        .to_string();

    if record.is_season() {
        if let Some(season) = own_title.filter(|season| *season != name) {
            name = format!("{} - {}", name, season);
        }
    }

    match record.imdb_score {
        Some(score) => format!("• {} (IMDb: {})", name, score),
        None => format!("• {}", name),
    }
}

/// Header, up to [`MAX_TITLES_PER_SERVICE`] lines, and an overflow footer
pub fn format_service_section(service: &ServiceName, titles: &[TitleRecord]) -> Option<String> {
    if titles.is_empty() {
        return None;
    }

    let mut lines = Vec::with_capacity(titles.len().min(MAX_TITLES_PER_SERVICE) + 2);
    lines.push(format!("{} ({})", service, titles.len()));
    lines.extend(
        titles
            .iter()
            .take(MAX_TITLES_PER_SERVICE)
            .map(format_title_line),
    );

    if titles.len() > MAX_TITLES_PER_SERVICE {
        lines.push(format!(
            "...and {} more",
            titles.len() - MAX_TITLES_PER_SERVICE
        ));
    }

    Some(lines.join("\n"))
}

/// Renders every non-empty service, sorted by name, separated by blank lines
pub fn format_summary(grouped: &GroupedTitles) -> String {
    let mut services: Vec<&ServiceName> = grouped.keys().collect();
    services.sort();

    services
        .into_iter()
        .filter_map(|service| format_service_section(service, &grouped[service]))
        .collect::<Vec<_>>()
        .join("\n\n")
}
