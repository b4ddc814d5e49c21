use crate::{Feature, Geometry, LngLat, Properties};
use serde_json::{json, Value};

/// One of every geometry type, plus two collections (one without an id).
pub fn mixed_document() -> Value {
    json!({
      "type": "FeatureCollection",
      "features": [
        {
          "type": "Feature",
          "id": "fountain",
          "geometry": { "type": "Point", "coordinates": [2.0, 41.0] },
          "properties": { "description": "A fountain" }
        },
        {
          "type": "Feature",
          "geometry": { "type": "MultiPoint", "coordinates": [[1.0, 40.0], [1.5, 40.5]] },
          "properties": {}
        },
        {
          "type": "Feature",
          "geometry": { "type": "LineString", "coordinates": [[0.0, 40.0], [1.0, 41.0], [2.0, 42.0]] },
          "properties": { "description": "Trail" }
        },
        {
          "type": "Feature",
          "geometry": { "type": "MultiLineString", "coordinates": [[[3.0, 39.0], [3.5, 39.5]]] }
        },
        {
          "type": "Feature",
          "geometry": { "type": "Polygon", "coordinates": [[[0.0, 38.0], [4.0, 38.0], [4.0, 42.0], [0.0, 38.0]]] },
          "properties": { "description": "Park" }
        },
        {
          "type": "Feature",
          "geometry": { "type": "MultiPolygon", "coordinates": [[[[5.0, 40.0], [6.0, 40.0], [6.0, 41.0], [5.0, 40.0]]]] }
        },
        {
          "type": "Feature",
          "id": "ruins",
          "geometry": {
            "type": "GeometryCollection",
            "geometries": [
              { "type": "Point", "coordinates": [-1.0, 43.0] },
              { "type": "LineString", "coordinates": [[-1.0, 43.0], [-0.5, 43.5]] },
              { "type": "Polygon", "coordinates": [[[-1.0, 43.0], [-0.5, 43.0], [-0.5, 43.5], [-1.0, 43.0]]] }
            ]
          },
          "properties": { "name": "Old town" }
        },
        {
          "type": "Feature",
          "geometry": {
            "type": "GeometryCollection",
            "geometries": [{ "type": "Point", "coordinates": [7.0, 37.0] }]
          },
          "properties": { "description": "Lone marker" }
        }
      ]
    })
}

/// `feature_count` points along the diagonal, each with a `name`.
pub fn points(feature_count: usize) -> Vec<Feature> {
    (0..feature_count)
        .map(|feature_idx| {
            let geometry = Geometry::from(LngLat::new(feature_idx as f64, feature_idx as f64));
            let mut properties = Properties::empty();
            properties.insert("name".to_string(), format!("prop-{}", feature_idx).into());
            Feature::new(geometry, properties)
        })
        .collect()
}
