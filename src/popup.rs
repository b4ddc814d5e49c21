use crate::feature::{COLLECTION_ID, GEOMETRY_INDEX};
use crate::{Bounded, Feature, Geometry, LineString, LngLat};

/// Where to pin a feature's popup.
///
/// These are cheap stand-ins rather than true centroids: lines use the vertex at `len / 2`, and
/// polygons use the centre of their outer ring's bounding box. Anything without an obvious spot
/// (no geometry, empty coordinates, collections, unknown types) falls back to `viewport_center`.
pub fn anchor_for(feature: &Feature, viewport_center: LngLat) -> LngLat {
    feature
        .geometry()
        .and_then(geometry_anchor)
        .unwrap_or(viewport_center)
}

fn geometry_anchor(geometry: &Geometry) -> Option<LngLat> {
    match geometry {
        Geometry::Point(point) => Some(*point),
        Geometry::MultiPoint(multi_point) => multi_point.points().first().copied(),
        Geometry::LineString(line_string) => {
            // For a two point line this is the second point, not the midpoint.
            let points = line_string.points();
            points.get(points.len() / 2).copied()
        }
        Geometry::MultiLineString(multi_line_string) => multi_line_string
            .first()
            .and_then(|line_string| line_string.points().first().copied()),
        Geometry::Polygon(polygon) => polygon.exterior().and_then(ring_center),
        Geometry::MultiPolygon(multi_polygon) => multi_polygon
            .first()
            .and_then(|polygon| polygon.exterior())
            .and_then(ring_center),
        Geometry::GeometryCollection(_) | Geometry::Unknown(_) => None,
    }
}

fn ring_center(ring: &LineString) -> Option<LngLat> {
    ring.bounds().map(|bounds| bounds.center())
}

/// The popup body: geometry type, description, and where it came from if it was extracted from a
/// geometry collection.
///
/// Everything interpolated is HTML-escaped, so a description containing markup is shown as text
/// rather than rendered. Descriptions that aren't text are written as JSON.
pub fn popup_html(feature: &Feature) -> String {
    let type_name = feature
        .geometry()
        .map(Geometry::type_name)
        .unwrap_or("None");
    let description = feature
        .description()
        .map(ToString::to_string)
        .unwrap_or_else(|| "No description".to_string());

    let mut html = format!(
        "<h3>Geometry: {}</h3><p>{}</p>",
        escape_html(type_name),
        escape_html(&description)
    );
    if let Some(collection_id) = feature.property(COLLECTION_ID) {
        let geometry_index = feature
            .property(GEOMETRY_INDEX)
            .map(ToString::to_string)
            .unwrap_or_default();
        html.push_str(&format!(
            "<p><em>Part of collection: {}, index: {}</em></p>",
            escape_html(&collection_id.to_string()),
            escape_html(&geometry_index)
        ));
    }
    html
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{flatten, wkt, GeometryCollection, Properties, PropertyValue, UnknownGeometry};
    use approx::assert_relative_eq;

    const CENTER: LngLat = LngLat::new(-3.7, 40.4);

    fn anchor(geometry: impl Into<Geometry>) -> LngLat {
        anchor_for(&Feature::new(geometry.into(), Properties::empty()), CENTER)
    }

    #[test]
    fn point() {
        assert_eq!(anchor(wkt!(POINT(1 2))), LngLat::new(1.0, 2.0));
    }

    #[test]
    fn multi_point_uses_first() {
        assert_eq!(anchor(wkt!(MULTIPOINT(5 6,7 8))), LngLat::new(5.0, 6.0));
    }

    #[test]
    fn line_string_uses_floor_half_index() {
        assert_eq!(anchor(wkt!(LINESTRING(0 0,2 2,4 4))), LngLat::new(2.0, 2.0));
        assert_eq!(anchor(wkt!(LINESTRING(0 0,2 2))), LngLat::new(2.0, 2.0));
        assert_eq!(anchor(wkt!(LINESTRING(0 0,1 1,2 2,3 3))), LngLat::new(2.0, 2.0));
        assert_eq!(anchor(wkt!(LINESTRING(9 9))), LngLat::new(9.0, 9.0));
    }

    #[test]
    fn multi_line_string_uses_first_vertex() {
        assert_eq!(
            anchor(wkt!(MULTILINESTRING((3 4,5 6),(7 8,9 10)))),
            LngLat::new(3.0, 4.0)
        );
    }

    #[test]
    fn polygon_uses_exterior_box_center() {
        assert_eq!(
            anchor(wkt!(POLYGON((0 0,10 0,10 10,0 10,0 0),(20 20,30 20,30 30,20 20)))),
            LngLat::new(5.0, 5.0)
        );
        assert_relative_eq!(
            anchor(wkt!(POLYGON((0.1 0.1,0.3 0.1,0.3 0.7,0.1 0.1)))),
            LngLat::new(0.2, 0.4),
            epsilon = 1e-12
        );
    }

    #[test]
    fn multi_polygon_uses_first_polygon() {
        assert_eq!(
            anchor(wkt!(MULTIPOLYGON(((0 0,4 0,4 2,0 0)),((50 50,60 50,60 60,50 50))))),
            LngLat::new(2.0, 1.0)
        );
    }

    #[test]
    fn falls_back_to_viewport_center() {
        assert_eq!(anchor(wkt!(GEOMETRYCOLLECTION(POINT(1 1)))), CENTER);
        assert_eq!(
            anchor(UnknownGeometry::new("Curve", serde_json::Value::Null)),
            CENTER
        );
        assert_eq!(anchor(wkt!(LINESTRING EMPTY)), CENTER);
        assert_eq!(anchor(wkt!(MULTIPOINT EMPTY)), CENTER);
        assert_eq!(anchor(wkt!(MULTILINESTRING(EMPTY))), CENTER);
        assert_eq!(anchor(wkt!(POLYGON EMPTY)), CENTER);
        assert_eq!(anchor(wkt!(POLYGON(EMPTY))), CENTER);
        assert_eq!(anchor(wkt!(MULTIPOLYGON EMPTY)), CENTER);
        assert_eq!(
            anchor_for(&Feature::without_geometry(Properties::empty()), CENTER),
            CENTER
        );
    }

    #[test]
    fn html_for_plain_feature() {
        let feature = Feature::new(wkt!(POINT(1 2)).into(), Properties::empty());
        assert_eq!(
            popup_html(&feature),
            "<h3>Geometry: Point</h3><p>No description</p>"
        );
    }

    #[test]
    fn html_for_collection_part() {
        let collection = Feature::new(
            GeometryCollection::new(vec![wkt!(POINT(0 0)).into(), wkt!(POINT(1 1)).into()]).into(),
            Properties::empty(),
        )
        .with_id("c1");
        let parts = flatten(&[collection]);
        assert_eq!(
            popup_html(&parts[1]),
            "<h3>Geometry: Point</h3><p>Part 2 of the geometry collection</p>\
             <p><em>Part of collection: c1, index: 1</em></p>"
        );
    }

    #[test]
    fn html_for_structured_description() {
        let mut properties = Properties::empty();
        properties.insert("description".to_string(), 7u64.into());
        let feature = Feature::new(wkt!(POINT(1 2)).into(), properties);
        assert_eq!(popup_html(&feature), "<h3>Geometry: Point</h3><p>7</p>");

        let mut properties = Properties::empty();
        properties.insert(
            "description".to_string(),
            PropertyValue::Vec(vec!["a".into(), true.into()]),
        );
        let feature = Feature::new(wkt!(POINT(1 2)).into(), properties);
        assert_eq!(
            popup_html(&feature),
            "<h3>Geometry: Point</h3><p>[&quot;a&quot;,true]</p>"
        );
    }

    #[test]
    fn html_is_escaped() {
        let mut properties = Properties::empty();
        properties.insert("description".to_string(), "<b>Fish & Chips</b>".into());
        let feature = Feature::new(wkt!(POINT(1 2)).into(), properties);
        assert_eq!(
            popup_html(&feature),
            "<h3>Geometry: Point</h3><p>&lt;b&gt;Fish &amp; Chips&lt;/b&gt;</p>"
        );
    }
}
