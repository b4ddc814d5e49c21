use crate::Result;
use serde::Deserialize;

/// Knobs for [`super::MapLoader`]. Every field is optional when read from JSON.
///
/// ```
/// let options = geolayers::LoaderOptions::from_json_str(r#"{ "fit_padding": 40 }"#).unwrap();
/// assert_eq!(options.fit_padding, 40.0);
/// assert_eq!(options.max_zoom, 10.0);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoaderOptions {
    /// Source holding the document as loaded.
    pub source_id: String,
    /// Source holding the features extracted from geometry collections.
    pub collection_source_id: String,
    /// Screen pixels kept clear around the data when fitting the viewport to it.
    pub fit_padding: f64,
    pub max_zoom: f64,
    pub pitch: f64,
    pub bearing: f64,
    /// Zoom used when the whole document is a single point, which has no extent to fit.
    pub single_point_zoom: f64,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            source_id: "geojson-data".to_string(),
            collection_source_id: "geometry-collection-source".to_string(),
            fit_padding: 100.0,
            max_zoom: 10.0,
            pitch: 45.0,
            bearing: 0.0,
            single_point_zoom: 4.0,
        }
    }
}

impl LoaderOptions {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
