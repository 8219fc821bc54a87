//! # Artwork Queries
//!
//! Builds SMK search queries from client filters and trims the results.
//!
//! A `room` filter is an id from the sensor simulation service. It is resolved to the
//! room name first (the SMK API filters by location *name*), and a failed lookup is
//! returned with the lookup's own status and detail.

pub mod error;

pub use error::*;

use crate::clients::{RoomClient, SmkClient};
use crate::model::{ArtworkFilter, ArtworkPage, FilterCount, FilterGroup, SmkSearchResponse};
use gateway_framework::{QueryParams, UpstreamClient};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, instrument};

/// Upper bound for the `rows` parameter.
pub const MAX_ARTWORK_ROWS: u32 = 100;
pub const DEFAULT_SEARCH_KEYS: &str = "*";
pub const ON_DISPLAY_FILTER: &str = "[on_display:true]";

/// Fields requested for each artwork. `part_of` must stay in the list for sub-part
/// filtering to work.
pub const ARTWORK_FIELDS: &str = "id,object_number,titles,artist,production_date,techniques,\
colors,dimensions,image_thumbnail,current_location_name,responsible_department,\
acquisition_date,part_of";

/// Facets offered as filters.
pub const FILTER_FACETS: [&str; 2] = ["creator", "materials"];
const FILTER_SAMPLE_ROWS: u32 = 10;

#[derive(Clone)]
pub struct ArtworkQueryBuilder {
    rooms: RoomClient,
    smk: SmkClient,
}

impl ArtworkQueryBuilder {
    pub fn new(rooms: RoomClient, smk: SmkClient) -> Self {
        Self { rooms, smk }
    }

    /// Searches artworks, optionally restricted to the room with id `filter.room`.
    #[instrument(skip(self))]
    pub async fn query_artwork(&self, filter: &ArtworkFilter) -> Result<ArtworkPage, ArtworkError> {
        let room_name = match filter.room.as_deref().map(str::trim).filter(|id| !id.is_empty()) {
            Some(room_id) => {
                let room = self.rooms.get(room_id).await?;
                debug!(room_id, room_name = %room.parsed.name, "Room resolved");
                Some(room.parsed.name)
            }
            None => None,
        };

        let params = build_search_params(filter, room_name.as_deref());
        let response = self.smk.search(params).await.map_err(ArtworkError::Search)?;
        let search = parse_search(response.payload)?;

        let found_items = search.items.len();
        let items: Vec<Value> = search.items.into_iter().filter(|item| !is_sub_part(item)).collect();
        debug!(kept = items.len(), dropped = found_items - items.len(), "Sub-parts filtered");

        Ok(ArtworkPage {
            offset: search.offset,
            rows: search.rows,
            found: search.found,
            items,
        })
    }

    /// Autocomplete suggestions for a search term.
    #[instrument(skip(self))]
    pub async fn search_suggestions(&self, keys: &str) -> Result<Value, ArtworkError> {
        let keys = keys.trim();
        if keys.is_empty() {
            return Err(ArtworkError::Validation(
                "The 'keys' parameter must be a non-empty string.".to_string(),
            ));
        }

        let response = self
            .smk
            .search(QueryParams::new().push("keys", keys))
            .await
            .map_err(ArtworkError::Search)?;
        let search = parse_search(response.payload)?;
        Ok(search.autocomplete.unwrap_or_else(|| Value::Array(Vec::new())))
    }

    /// Available filter values (creators, materials) for artworks on display.
    #[instrument(skip(self))]
    pub async fn filters(&self) -> Result<Vec<FilterGroup>, ArtworkError> {
        let params = FILTER_FACETS.iter().fold(
            QueryParams::new()
                .push("keys", DEFAULT_SEARCH_KEYS)
                .push("offset", "0")
                .push("rows", FILTER_SAMPLE_ROWS.to_string())
                .push("filters", ON_DISPLAY_FILTER),
            |params, facet| params.push("facets", *facet),
        );

        let response = self.smk.search(params).await.map_err(ArtworkError::Search)?;
        let facets = parse_search(response.payload)?
            .facets
            .filter(|facets| !facets.is_empty())
            .ok_or(ArtworkError::NoFilters)?;

        Ok(facet_groups(&facets))
    }
}

/// SMK query for an artwork filter. `room_name` is the already-resolved room.
pub fn build_search_params(filter: &ArtworkFilter, room_name: Option<&str>) -> QueryParams {
    let keys = filter
        .keys
        .as_deref()
        .map(str::trim)
        .filter(|keys| !keys.is_empty())
        .unwrap_or(DEFAULT_SEARCH_KEYS);
    let location = match room_name {
        Some(name) => format!("[current_location_name:{name}]"),
        None => ON_DISPLAY_FILTER.to_string(),
    };

    QueryParams::new()
        .push("keys", keys)
        .push("filters", location)
        .push_opt("rows", filter.limit.map(|limit| limit.min(MAX_ARTWORK_ROWS)))
        .push_opt("offset", filter.offset)
        .push("fields", ARTWORK_FIELDS)
}

/// Converts SMK facets (`{"creator": ["Name", 12, "Other", 3]}`) into filter groups.
pub fn facet_groups(facets: &Map<String, Value>) -> Vec<FilterGroup> {
    facets
        .iter()
        .map(|(kind, values)| {
            let filters = values
                .as_array()
                .map(|values| {
                    values
                        .chunks_exact(2)
                        .map(|pair| FilterCount {
                            key: match &pair[0] {
                                Value::String(key) => key.clone(),
                                other => other.to_string(),
                            },
                            count: pair[1].as_u64().unwrap_or(0),
                        })
                        .collect()
                })
                .unwrap_or_default();
            FilterGroup {
                kind: kind.clone(),
                filters,
            }
        })
        .collect()
}

fn is_sub_part(item: &Value) -> bool {
    match item.get("part_of") {
        None | Some(Value::Null) => false,
        Some(Value::Array(parents)) => !parents.is_empty(),
        Some(Value::String(parent)) => !parent.is_empty(),
        Some(_) => true,
    }
}

fn parse_search(payload: Value) -> Result<SmkSearchResponse, ArtworkError> {
    SmkSearchResponse::deserialize(payload).map_err(|e| ArtworkError::InvalidResponse {
        reason: e.to_string(),
    })
}
