use serde::{Deserialize, Deserializer};

pub mod streaming_service;
pub mod title;

pub use streaming_service::{ServiceName, ServiceTable, SubscribedService};
pub use title::{GroupedTitles, TitleRecord, SEASON_OBJECT_TYPE};

/// Treats an explicit JSON `null` the same as a missing field
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// Catalog GraphQL API Types
// ============================================================================

/// Top-level response from the `GetNewTitles` query
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTitlesResponse {
    #[serde(default)]
    pub data: Option<NewTitlesData>,
    #[serde(default)]
    pub errors: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTitlesData {
    #[serde(default)]
    pub new_titles: Option<NewTitlesPage>,
}

/// One page of the `newTitles` connection
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTitlesPage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub edges: Vec<ApiEdge>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub page_info: PageInfo,
}

/// A result entry pairing a node with its watch offer
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEdge {
    #[serde(default)]
    pub cursor: Option<String>,
    #[serde(default)]
    pub watch_now_offer: Option<ApiOffer>,
    #[serde(default)]
    pub node: Option<RawNode>,
}

impl ApiEdge {
    /// Provider label of the offer, if the edge carries one
    pub fn provider_label(&self) -> Option<String> {
        self.watch_now_offer
            .as_ref()
            .and_then(|offer| offer.package.as_ref())
            .and_then(|package| package.clear_name.clone())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiOffer {
    #[serde(default)]
    pub package: Option<ApiPackage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiPackage {
    #[serde(default)]
    pub clear_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    #[serde(default)]
    pub end_cursor: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_previous_page: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_next_page: bool,
}

/// Raw movie or season node as returned by the catalog
///
/// Every field is optional. Season nodes carry a `show` reference; movies do not.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawNode {
    #[serde(default, rename = "__typename")]
    pub typename: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub object_id: Option<u64>,
    #[serde(default)]
    pub object_type: Option<String>,
    #[serde(default)]
    pub content: Option<RawContent>,
    #[serde(default)]
    pub show: Option<RawShow>,
    /// Provider label copied from the edge's watch offer during fetch
    #[serde(skip)]
    pub streaming_service: Option<String>,
}

impl RawNode {
    /// True for `{}` nodes the API emits for filtered-out entries
    pub fn is_empty(&self) -> bool {
        self.typename.is_none()
            && self.id.is_none()
            && self.object_id.is_none()
            && self.object_type.is_none()
            && self.content.is_none()
            && self.show.is_none()
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawContent {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub scoring: Option<RawScoring>,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub genres: Vec<RawGenre>,
    #[serde(default)]
    pub season_number: Option<u32>,
    #[serde(default)]
    pub is_released: Option<bool>,
}

/// Scoring block; only `imdb_score` is carried into a [`TitleRecord`]
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawScoring {
    #[serde(default)]
    pub imdb_votes: Option<f64>,
    #[serde(default)]
    pub imdb_score: Option<f64>,
    #[serde(default)]
    pub tmdb_popularity: Option<f64>,
    #[serde(default)]
    pub tmdb_score: Option<f64>,
    #[serde(default)]
    pub tomato_meter: Option<f64>,
    #[serde(default)]
    pub certified_fresh: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RawGenre {
    #[serde(default)]
    pub translation: Option<String>,
}

/// Parent show reference on a season node
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawShow {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub object_id: Option<u64>,
    #[serde(default)]
    pub object_type: Option<String>,
    #[serde(default)]
    pub content: Option<RawShowContent>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RawShowContent {
    #[serde(default)]
    pub title: Option<String>,
}
