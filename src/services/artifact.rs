use chrono::NaiveDate;
use std::path::{Path, PathBuf};

use crate::{error::AppResult, models::TitleRecord};

/// `new_titles_<date>.json`
pub fn artifact_file_name(date: NaiveDate) -> String {
    format!("new_titles_{}.json", date.format("%Y-%m-%d"))
}

/// Writes the fetched records as a pretty-printed JSON array
pub async fn save_titles(
    output_dir: &Path,
    date: NaiveDate,
    records: &[TitleRecord],
) -> AppResult<PathBuf> {
    let path = output_dir.join(artifact_file_name(date));
    let json = serde_json::to_string_pretty(records)?;

    tokio::fs::create_dir_all(output_dir).await?;
    tokio::fs::write(&path, json).await?;

    tracing::info!(path = %path.display(), count = records.len(), "Saved titles");

    Ok(path)
}

/// Reads records previously written by [`save_titles`]
pub async fn load_titles(path: &Path) -> AppResult<Vec<TitleRecord>> {
    let json = tokio::fs::read_to_string(path).await?;
    let records: Vec<TitleRecord> = serde_json::from_str(&json)?;

    tracing::info!(path = %path.display(), count = records.len(), "Loaded titles");

    Ok(records)
}
