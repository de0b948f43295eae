//! City search payload (`/search.ashx`)

use serde::{Deserialize, Serialize};

use super::{first_value, parse_number, TextValue};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub search_api: Option<SearchApi>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchApi {
    #[serde(default)]
    pub result: Vec<SearchResult>,
}

/// One matching location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    #[serde(default)]
    pub area_name: Vec<TextValue>,
    #[serde(default)]
    pub country: Vec<TextValue>,
    #[serde(default)]
    pub region: Vec<TextValue>,
    #[serde(default)]
    pub latitude: Option<String>,
    #[serde(default)]
    pub longitude: Option<String>,
}

impl SearchResponse {
    /// Matching locations, or `None` when the provider returned no result list.
    pub fn results(&self) -> Option<&[SearchResult]> {
        self.search_api.as_ref().map(|api| api.result.as_slice())
    }
}

impl SearchResult {
    pub fn area_name(&self) -> Option<&str> {
        first_value(&self.area_name)
    }

    pub fn country(&self) -> Option<&str> {
        first_value(&self.country)
    }

    pub fn region(&self) -> Option<&str> {
        first_value(&self.region)
    }

    /// `(latitude, longitude)` when both are present and numeric.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        let lat = parse_number(self.latitude.as_deref())?;
        let lon = parse_number(self.longitude.as_deref())?;
        Some((lat, lon))
    }

    /// "Area, Region, Country" from whichever parts are present.
    pub fn display_name(&self) -> Option<String> {
        let parts: Vec<&str> = [self.area_name(), self.region(), self.country()]
            .into_iter()
            .flatten()
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}
