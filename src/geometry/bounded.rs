use crate::{
    Bounds, BoundsAccumulator, Geometry, GeometryCollection, LineString, LngLat, MultiLineString,
    MultiPoint, MultiPolygon, Polygon,
};

/// Anything that can feed its coordinates into a [`BoundsAccumulator`].
pub trait Bounded {
    fn extend_bounds(&self, bounds: &mut BoundsAccumulator);

    fn bounds(&self) -> Option<Bounds> {
        let mut bounds = BoundsAccumulator::new();
        self.extend_bounds(&mut bounds);
        bounds.finalize()
    }
}

impl Bounded for LngLat {
    fn extend_bounds(&self, bounds: &mut BoundsAccumulator) {
        bounds.observe(self)
    }
}

impl Bounded for LineString {
    fn extend_bounds(&self, bounds: &mut BoundsAccumulator) {
        bounds.observe_all(&self.0)
    }
}

impl Bounded for Polygon {
    fn extend_bounds(&self, bounds: &mut BoundsAccumulator) {
        for ring in &self.0 {
            ring.extend_bounds(bounds)
        }
    }
}

impl Bounded for MultiPoint {
    fn extend_bounds(&self, bounds: &mut BoundsAccumulator) {
        bounds.observe_all(&self.0)
    }
}

impl Bounded for MultiLineString {
    fn extend_bounds(&self, bounds: &mut BoundsAccumulator) {
        for line_string in &self.0 {
            line_string.extend_bounds(bounds)
        }
    }
}

impl Bounded for MultiPolygon {
    fn extend_bounds(&self, bounds: &mut BoundsAccumulator) {
        for polygon in &self.0 {
            polygon.extend_bounds(bounds)
        }
    }
}

impl Bounded for GeometryCollection {
    fn extend_bounds(&self, bounds: &mut BoundsAccumulator) {
        for geometry in &self.0 {
            geometry.extend_bounds(bounds)
        }
    }
}

impl Bounded for Geometry {
    fn extend_bounds(&self, bounds: &mut BoundsAccumulator) {
        match self {
            Geometry::Point(point) => point.extend_bounds(bounds),
            Geometry::LineString(line_string) => line_string.extend_bounds(bounds),
            Geometry::Polygon(polygon) => polygon.extend_bounds(bounds),
            Geometry::MultiPoint(multi_point) => multi_point.extend_bounds(bounds),
            Geometry::MultiLineString(multi_line_string) => multi_line_string.extend_bounds(bounds),
            Geometry::MultiPolygon(multi_polygon) => multi_polygon.extend_bounds(bounds),
            Geometry::GeometryCollection(collection) => collection.extend_bounds(bounds),
            Geometry::Unknown(unknown) => {
                trace!("ignoring bounds of unknown geometry {:?}", unknown.type_name())
            }
        }
    }
}
