use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{null_as_default, RawNode, ServiceName};

/// Object type tag the catalog uses for a single season of a show
pub const SEASON_OBJECT_TYPE: &str = "SHOW_SEASON";

/// Flat, stable record extracted from one catalog node
///
/// This is also the shape of each entry in the persisted JSON artifact.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TitleRecord {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default, rename = "type")]
    pub object_type: Option<String>,
    /// Raw provider label, before normalization
    #[serde(default)]
    pub streaming_service: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub show_title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub imdb_score: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub genres: Vec<Option<String>>,
}

impl TitleRecord {
    pub fn is_season(&self) -> bool {
        self.object_type.as_deref() == Some(SEASON_OBJECT_TYPE)
    }
}

impl From<RawNode> for TitleRecord {
    fn from(node: RawNode) -> Self {
        let show_title = node
            .show
            .and_then(|show| show.content)
            .and_then(|content| content.title);

        let (title, description, runtime, imdb_score, genres) = match node.content {
            Some(content) => (
                content.title,
                content.short_description,
                content.runtime,
                content.scoring.and_then(|scoring| scoring.imdb_score),
                content
                    .genres
                    .into_iter()
                    .map(|genre| genre.translation)
                    .collect(),
            ),
            None => (None, None, None, None, Vec::new()),
        };

        TitleRecord {
            id: node.object_id,
            object_type: node.object_type,
            streaming_service: node.streaming_service,
            title,
            show_title,
            description,
            runtime,
            imdb_score,
            genres,
        }
    }
}

/// Titles partitioned by canonical service name
///
/// Iteration order is unspecified; the formatter sorts services itself.
pub type GroupedTitles = HashMap<ServiceName, Vec<TitleRecord>>;
