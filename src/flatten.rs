use crate::feature::{COLLECTION_ID, DESCRIPTION, GEOMETRY_INDEX};
use crate::{Feature, Geometry, Properties, PropertyValue};

/// Splits every `GeometryCollection` feature into one feature per child geometry.
///
/// Features that aren't collections are left out of the result entirely, they're rendered from the
/// document's own source as-is. Each extracted feature copies its collection's properties and adds:
///
/// - `collectionId`: the collection's id, or `collection-{index}` when it has none.
/// - `geometryIndex`: the child's position in the collection.
/// - `description`: the collection's description, whatever its type, or a generated "Part n" label.
///
/// An empty result just means there's nothing extra to draw.
///
/// ```
/// use geolayers::{flatten, wkt, Feature, Properties};
///
/// let collection = Feature::new(
///     wkt!(GEOMETRYCOLLECTION(POINT(0 0), LINESTRING(1 1,2 2))).into(),
///     Properties::empty(),
/// )
/// .with_id("c1");
///
/// let parts = flatten(&[collection]);
/// let ids: Vec<_> = parts.iter().map(|part| part.id().unwrap()).collect();
/// assert_eq!(ids, vec!["c1-0", "c1-1"]);
/// ```
pub fn flatten<'a>(features: impl IntoIterator<Item = &'a Feature>) -> Vec<Feature> {
    let mut extracted = vec![];
    for feature in features {
        let Some(Geometry::GeometryCollection(collection)) = feature.geometry() else {
            continue;
        };
        if collection.geometries().is_empty() {
            debug!("collection {:?} has no geometries to extract", feature.id());
        }
        for (index, child) in collection.geometries().iter().enumerate() {
            extracted.push(extract_part(feature, index, child.clone()));
        }
    }
    debug!("extracted {} features from geometry collections", extracted.len());
    extracted
}

fn extract_part(collection: &Feature, index: usize, geometry: Geometry) -> Feature {
    let collection_id = match collection.id() {
        Some(id) if !id.is_empty() => Some(id),
        _ => None,
    };

    let description = match collection.description() {
        Some(description) => description.clone(),
        None => format!("Part {} of the geometry collection", index + 1).into(),
    };

    let mut overrides = Properties::empty();
    overrides.insert(
        COLLECTION_ID.to_string(),
        collection_id
            .map(str::to_string)
            .unwrap_or_else(|| format!("collection-{index}"))
            .into(),
    );
    overrides.insert(GEOMETRY_INDEX.to_string(), PropertyValue::from(index));
    overrides.insert(DESCRIPTION.to_string(), description);

    let mut properties = collection.properties().clone();
    properties.merge(overrides);

    let id = format!("{}-{index}", collection_id.unwrap_or("geom"));
    Feature::new(geometry, properties).with_id(id)
}
