use crate::Geometry;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt::Formatter;

/// Property key holding the human readable text shown in a feature's popup.
pub const DESCRIPTION: &str = "description";
/// Property key, on features extracted from a collection, naming the collection they came from.
pub const COLLECTION_ID: &str = "collectionId";
/// Property key, on features extracted from a collection, holding their position in it.
pub const GEOMETRY_INDEX: &str = "geometryIndex";

#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    id: Option<String>,
    geometry: Option<Geometry>,
    properties: Properties,
}

impl Feature {
    pub fn new(geometry: Geometry, properties: Properties) -> Self {
        Self {
            id: None,
            geometry: Some(geometry),
            properties,
        }
    }

    /// A feature whose `geometry` member was missing or `null`.
    pub fn without_geometry(properties: Properties) -> Self {
        Self {
            id: None,
            geometry: None,
            properties,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    pub fn insert_property(&mut self, name: String, value: PropertyValue) {
        self.properties.insert(name, value);
    }

    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    /// The `description` property, unless it's `null` or an empty string. Any other value counts,
    /// text or not.
    pub fn description(&self) -> Option<&PropertyValue> {
        match self.property(DESCRIPTION)? {
            PropertyValue::Null => None,
            PropertyValue::String(description) if description.is_empty() => None,
            description => Some(description),
        }
    }

    pub fn into_inner(self) -> (Option<String>, Option<Geometry>, Properties) {
        (self.id, self.geometry, self.properties)
    }
}

impl Serialize for Feature {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let len = if self.id.is_some() { 4 } else { 3 };
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("type", "Feature")?;
        if let Some(id) = &self.id {
            map.serialize_entry("id", id)?;
        }
        map.serialize_entry("geometry", &self.geometry)?;
        map.serialize_entry("properties", &self.properties)?;
        map.end()
    }
}

type PropertyMap = HashMap<String, PropertyValue>;

/// Feature properties, remembering the order keys were first inserted in.
#[derive(Clone, PartialEq, Default)]
pub struct Properties {
    ordered_keys: Vec<String>,
    property_map: PropertyMap,
}

impl Serialize for Properties {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map_serializer = serializer.serialize_map(Some(self.ordered_keys.len()))?;
        for (key, value) in self.iter() {
            map_serializer.serialize_entry(key, value)?;
        }
        map_serializer.end()
    }
}

impl std::fmt::Debug for Properties {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            write!(f, "Properties {{ }}")
        } else {
            let mut debug_struct = f.debug_struct("Properties");
            for (key, value) in self.iter() {
                debug_struct.field(key, value);
            }
            debug_struct.finish()
        }
    }
}

impl Properties {
    pub fn empty() -> Self {
        Self {
            ordered_keys: vec![],
            property_map: PropertyMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ordered_keys.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ordered_keys.len()
    }

    /// Sets `name` to `value`, returning the value it replaced.
    ///
    /// A replaced key keeps its original position.
    pub fn insert(&mut self, name: String, value: PropertyValue) -> Option<PropertyValue> {
        if !self.property_map.contains_key(&name) {
            self.ordered_keys.push(name.clone());
        }
        self.property_map.insert(name, value)
    }

    /// Inserts every entry of `overrides`, in order. Where both have a key, `overrides` wins.
    pub fn merge(&mut self, overrides: Properties) {
        for (key, value) in overrides {
            self.insert(key, value);
        }
    }

    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.property_map.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        PropertyIter {
            keys_iter: self.ordered_keys.iter(),
            values: &self.property_map,
        }
    }
}

impl FromIterator<(String, PropertyValue)> for Properties {
    fn from_iter<T: IntoIterator<Item = (String, PropertyValue)>>(iter: T) -> Self {
        let mut properties = Properties::empty();
        for (key, value) in iter {
            properties.insert(key, value);
        }
        properties
    }
}

impl IntoIterator for Properties {
    type Item = (String, PropertyValue);
    type IntoIter = PropertiesIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            keys_iter: self.ordered_keys.into_iter(),
            property_map: self.property_map,
        }
    }
}

pub struct PropertiesIntoIter {
    keys_iter: std::vec::IntoIter<String>,
    property_map: PropertyMap,
}

impl Iterator for PropertiesIntoIter {
    type Item = (String, PropertyValue);

    fn next(&mut self) -> Option<(String, PropertyValue)> {
        loop {
            let next_key = self.keys_iter.next()?;
            if let Some(next_value) = self.property_map.remove(&next_key) {
                return Some((next_key, next_value));
            }
        }
    }
}

struct PropertyIter<'a> {
    keys_iter: std::slice::Iter<'a, String>,
    values: &'a PropertyMap,
}

impl<'a> Iterator for PropertyIter<'a> {
    type Item = (&'a str, &'a PropertyValue);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let next_key = self.keys_iter.next()?;
            if let Some(next_value) = self.values.get(next_key) {
                return Some((next_key, next_value));
            }
        }
    }
}

/// A JSON property value.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum PropertyValue {
    Null,
    Bool(bool),
    Int64(i64),
    UInt64(u64),
    Float64(f64),
    String(String),
    Vec(Vec<PropertyValue>),
    Map(Properties),
}

impl PropertyValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::String(value) => Some(value),
            _ => None,
        }
    }
}

impl std::fmt::Display for PropertyValue {
    /// Strings are written bare, everything else as JSON.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyValue::String(value) => f.write_str(value),
            other => match serde_json::to_string(other) {
                Ok(json) => f.write_str(&json),
                Err(_) => Err(std::fmt::Error),
            },
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::String(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::String(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

impl From<u64> for PropertyValue {
    fn from(value: u64) -> Self {
        PropertyValue::UInt64(value)
    }
}

impl From<usize> for PropertyValue {
    fn from(value: usize) -> Self {
        PropertyValue::UInt64(value as u64)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Int64(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Float64(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wkt;

    fn properties(entries: &[(&str, PropertyValue)]) -> Properties {
        entries
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut props = properties(&[("a", 1u64.into()), ("b", "two".into())]);
        let previous = props.insert("a".to_string(), "one".into());
        assert_eq!(previous, Some(PropertyValue::UInt64(1)));

        let keys: Vec<_> = props.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(props.get("a"), Some(&PropertyValue::from("one")));
        assert_eq!(props.len(), 2);
    }

    #[test]
    fn merge_prefers_overrides() {
        let mut base = properties(&[("name", "park".into()), ("description", "old".into())]);
        base.merge(properties(&[
            ("description", "new".into()),
            ("geometryIndex", 3usize.into()),
        ]));

        let entries: Vec<_> = base.into_iter().collect();
        assert_eq!(
            entries,
            vec![
                ("name".to_string(), PropertyValue::from("park")),
                ("description".to_string(), PropertyValue::from("new")),
                ("geometryIndex".to_string(), PropertyValue::UInt64(3)),
            ]
        );
    }

    #[test]
    fn description_must_be_non_empty() {
        let point = Geometry::from(wkt!(POINT(0 0)));
        let mut feature = Feature::new(point, Properties::empty());
        assert_eq!(feature.description(), None);

        feature.insert_property(DESCRIPTION.to_string(), "".into());
        assert_eq!(feature.description(), None);

        feature.insert_property(DESCRIPTION.to_string(), PropertyValue::Null);
        assert_eq!(feature.description(), None);

        feature.insert_property(DESCRIPTION.to_string(), 7u64.into());
        assert_eq!(feature.description(), Some(&PropertyValue::UInt64(7)));

        feature.insert_property(DESCRIPTION.to_string(), "A fountain".into());
        assert_eq!(feature.description(), Some(&PropertyValue::from("A fountain")));
    }

    #[test]
    fn display() {
        assert_eq!(PropertyValue::from("c1").to_string(), "c1");
        assert_eq!(PropertyValue::from(2usize).to_string(), "2");
        assert_eq!(
            PropertyValue::Vec(vec![true.into(), PropertyValue::Null]).to_string(),
            "[true,null]"
        );
    }

    #[test]
    fn debug_properties() {
        assert_eq!(format!("{:?}", Properties::empty()), "Properties { }");
        let props = properties(&[("name", "park".into())]);
        assert_eq!(
            format!("{props:?}"),
            "Properties { name: String(\"park\") }"
        );
    }
}
