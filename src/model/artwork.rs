use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Query parameters accepted by `GET /artwork`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ArtworkFilter {
    pub keys: Option<String>,
    /// Room id; resolved to the room name before searching.
    pub room: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

/// One page of artwork search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtworkPage {
    pub offset: i64,
    pub rows: i64,
    pub found: i64,
    pub items: Vec<Value>,
}

/// The part of an SMK search response the gateway reads.
///
/// Every field is optional upstream, so missing values fall back to empty ones.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SmkSearchResponse {
    #[serde(default)]
    pub offset: i64,
    #[serde(default)]
    pub rows: i64,
    #[serde(default)]
    pub found: i64,
    #[serde(default)]
    pub items: Vec<Value>,
    #[serde(default)]
    pub facets: Option<Map<String, Value>>,
    #[serde(default)]
    pub autocomplete: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCount {
    pub key: String,
    pub count: u64,
}

/// All values of one facet (e.g. `creator`) with their artwork counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterGroup {
    #[serde(rename = "type")]
    pub kind: String,
    pub filters: Vec<FilterCount>,
}
