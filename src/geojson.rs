//! Reading and writing GeoJSON documents.
//!
//! Reading is deliberately forgiving: the documents we're handed are display data, so anything we
//! can't make sense of is skipped (and logged) rather than failing the whole load.

use crate::feature::{Properties, PropertyValue};
use crate::{
    Feature, Geometry, GeometryCollection, LineString, LngLat, MultiLineString, MultiPoint,
    MultiPolygon, Polygon, Result, UnknownGeometry,
};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map as JsonObject, Value as JsonValue};
use std::io::Read;
use std::str::FromStr;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureCollection {
    features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self { features }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let value: JsonValue = serde_json::from_reader(reader)?;
        Ok(Self::from_json_value(value))
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let value: JsonValue = serde_json::from_slice(bytes)?;
        Ok(Self::from_json_value(value))
    }

    /// Never fails: a document without a `features` array is an empty collection.
    pub fn from_json_value(value: JsonValue) -> Self {
        let JsonValue::Object(mut document) = value else {
            warn!("GeoJSON document is not an object, treating as empty");
            return Self::default();
        };
        let Some(JsonValue::Array(features)) = document.remove("features") else {
            warn!("GeoJSON document has no `features` array, treating as empty");
            return Self::default();
        };

        let features: Vec<Feature> = features.into_iter().filter_map(feature_from_json).collect();
        debug!("read {} features", features.len());
        Self { features }
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn into_features(self) -> Vec<Feature> {
        self.features
    }

    pub fn to_json_value(&self) -> Result<JsonValue> {
        Ok(serde_json::to_value(self)?)
    }
}

impl FromStr for FeatureCollection {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        let value: JsonValue = serde_json::from_str(s)?;
        Ok(Self::from_json_value(value))
    }
}

impl From<Vec<Feature>> for FeatureCollection {
    fn from(features: Vec<Feature>) -> Self {
        Self::new(features)
    }
}

impl<'de> Deserialize<'de> for FeatureCollection {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = JsonValue::deserialize(deserializer)?;
        Ok(Self::from_json_value(value))
    }
}

impl Serialize for FeatureCollection {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("type", "FeatureCollection")?;
        map.serialize_entry("features", &self.features)?;
        map.end()
    }
}

impl Serialize for Geometry {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let type_name = self.type_name();
        match self {
            Geometry::Point(point) => serialize_geometry(serializer, type_name, point),
            Geometry::LineString(line_string) => {
                serialize_geometry(serializer, type_name, line_string)
            }
            Geometry::Polygon(polygon) => serialize_geometry(serializer, type_name, polygon),
            Geometry::MultiPoint(multi_point) => {
                serialize_geometry(serializer, type_name, multi_point)
            }
            Geometry::MultiLineString(multi_line_string) => {
                serialize_geometry(serializer, type_name, multi_line_string)
            }
            Geometry::MultiPolygon(multi_polygon) => {
                serialize_geometry(serializer, type_name, multi_polygon)
            }
            Geometry::GeometryCollection(collection) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", type_name)?;
                map.serialize_entry("geometries", collection.geometries())?;
                map.end()
            }
            Geometry::Unknown(unknown) => unknown.raw().serialize(serializer),
        }
    }
}

fn serialize_geometry<S, T>(
    serializer: S,
    type_name: &str,
    coordinates: &T,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize,
{
    let mut map = serializer.serialize_map(Some(2))?;
    map.serialize_entry("type", type_name)?;
    map.serialize_entry("coordinates", coordinates)?;
    map.end()
}

impl Geometry {
    /// Reads a GeoJSON geometry object, degrading anything unreadable to [`Geometry::Unknown`].
    pub fn from_json_value(mut value: JsonValue) -> Geometry {
        let type_name = value
            .get("type")
            .and_then(JsonValue::as_str)
            .unwrap_or_default()
            .to_string();
        let coordinates = value.get("coordinates");

        match type_name.as_str() {
            "Point" => match coordinates.and_then(position) {
                Some(point) => Geometry::Point(point),
                None => {
                    warn!("Point without readable coordinates");
                    UnknownGeometry::new(type_name.clone(), value).into()
                }
            },
            "MultiPoint" => MultiPoint::new(positions(coordinates)).into(),
            "LineString" => LineString::new(positions(coordinates)).into(),
            "MultiLineString" => MultiLineString::new(line_strings(coordinates)).into(),
            "Polygon" => Polygon::new(line_strings(coordinates)).into(),
            "MultiPolygon" => MultiPolygon::new(
                nested(coordinates)
                    .map(|polygon| Polygon::new(line_strings(Some(polygon))))
                    .collect(),
            )
            .into(),
            "GeometryCollection" => match value
                .as_object_mut()
                .and_then(|object| object.remove("geometries"))
            {
                Some(JsonValue::Array(geometries)) => GeometryCollection::new(
                    geometries
                        .into_iter()
                        .map(Geometry::from_json_value)
                        .collect(),
                )
                .into(),
                _ => {
                    warn!("malformed GeometryCollection: missing `geometries`");
                    GeometryCollection::default().into()
                }
            },
            _ => {
                trace!("unrecognized geometry type {type_name:?}");
                UnknownGeometry::new(type_name.clone(), value).into()
            }
        }
    }
}

fn feature_from_json(value: JsonValue) -> Option<Feature> {
    let JsonValue::Object(mut object) = value else {
        warn!("skipping feature which is not an object");
        return None;
    };

    let properties = match object.remove("properties") {
        Some(JsonValue::Object(properties)) => properties_from_json(properties),
        _ => Properties::empty(),
    };

    let mut feature = match object.remove("geometry") {
        Some(geometry @ JsonValue::Object(_)) => {
            Feature::new(Geometry::from_json_value(geometry), properties)
        }
        _ => Feature::without_geometry(properties),
    };

    match object.remove("id") {
        Some(JsonValue::String(id)) => feature = feature.with_id(id),
        Some(JsonValue::Number(id)) => feature = feature.with_id(id.to_string()),
        _ => {}
    }
    Some(feature)
}

fn properties_from_json(object: JsonObject<String, JsonValue>) -> Properties {
    object
        .into_iter()
        .map(|(key, value)| (key, property_value_from_json(value)))
        .collect()
}

fn property_value_from_json(value: JsonValue) -> PropertyValue {
    match value {
        JsonValue::Null => PropertyValue::Null,
        JsonValue::Bool(value) => PropertyValue::Bool(value),
        JsonValue::Number(number) => {
            if let Some(value) = number.as_u64() {
                PropertyValue::UInt64(value)
            } else if let Some(value) = number.as_i64() {
                PropertyValue::Int64(value)
            } else {
                PropertyValue::Float64(number.as_f64().unwrap_or(f64::NAN))
            }
        }
        JsonValue::String(value) => PropertyValue::String(value),
        JsonValue::Array(values) => {
            PropertyValue::Vec(values.into_iter().map(property_value_from_json).collect())
        }
        JsonValue::Object(object) => PropertyValue::Map(properties_from_json(object)),
    }
}

/// `[lng, lat, ...]`. Extra ordinates (e.g. altitude) are ignored.
fn position(value: &JsonValue) -> Option<LngLat> {
    let ordinates = value.as_array()?;
    let lng = ordinates.first()?.as_f64()?;
    let lat = ordinates.get(1)?.as_f64()?;
    Some(LngLat::new(lng, lat))
}

fn nested(value: Option<&JsonValue>) -> impl Iterator<Item = &JsonValue> {
    value
        .and_then(JsonValue::as_array)
        .into_iter()
        .flatten()
}

fn positions(value: Option<&JsonValue>) -> Vec<LngLat> {
    nested(value).filter_map(position).collect()
}

fn line_strings(value: Option<&JsonValue>) -> Vec<LineString> {
    nested(value)
        .map(|line| LineString::new(positions(Some(line))))
        .collect()
}
