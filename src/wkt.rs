/// Builds a geometry (or a [`crate::Bounds`] via `RECT`) from a
/// [WKT](https://en.wikipedia.org/wiki/Well-known_text_representation_of_geometry) literal.
///
/// Malformed WKT is rejected at compile time.
///
/// ```
/// use geolayers::{wkt, Bounded};
/// let point = wkt! { POINT(1.0 2.0) };
/// assert_eq!(point.lng(), 1.0);
/// assert_eq!(point.lat(), 2.0);
///
/// let geometry_collection = wkt! {
///     GEOMETRYCOLLECTION(
///         POINT(1.0 2.0),
///         LINESTRING EMPTY,
///         POLYGON((0.0 0.0,1.0 0.0,1.0 1.0,0.0 0.0))
///     )
/// };
/// assert_eq!(geometry_collection.geometries().len(), 3);
/// assert_eq!(geometry_collection.bounds(), Some(wkt!(RECT(0 0,1 2))));
/// ```
#[macro_export]
macro_rules! wkt {
    ($($wkt:tt)+) => {
        {
            $crate::wkt_internal!($($wkt)+)
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! wkt_internal {
    (POINT EMPTY) => {
        compile_error!("EMPTY points have no coordinate to anchor anything to")
    };
    (POINT($x: literal $y: literal)) => {
        $crate::Point::new(f64::from($x), f64::from($y))
    };
    (POINT $($tail: tt)*) => {
        compile_error!("Invalid POINT wkt. Should be like POINT(x y)")
    };
    (LINESTRING EMPTY) => {
        $crate::LineString::new(vec![])
    };
    (LINESTRING ($($x: literal $y: literal),+)) => {
        $crate::LineString::new(vec![
            $($crate::Point::new(f64::from($x), f64::from($y)),)+
        ])
    };
    (LINESTRING $($tail: tt)*) => {
        compile_error!("Invalid LINESTRING wkt")
    };
    (POLYGON EMPTY) => {
        $crate::Polygon::new(vec![])
    };
    (POLYGON( $($rings_tt: tt),+ )) => {
        $crate::Polygon::new(vec![
           $($crate::wkt!(LINESTRING $rings_tt)),*
        ])
    };
    (POLYGON $($tail: tt)*) => {
        compile_error!("Invalid POLYGON wkt")
    };
    (MULTIPOINT EMPTY) => {
        $crate::MultiPoint::new(vec![])
    };
    (MULTIPOINT ($($x: literal $y: literal),+ )) => {
        $crate::MultiPoint::new(vec![
            $($crate::Point::new(f64::from($x), f64::from($y)),)+
        ])
    };
    (MULTIPOINT $($tail: tt)*) => {
        compile_error!("Invalid MULTIPOINT wkt")
    };
    (MULTILINESTRING EMPTY) => {
        $crate::MultiLineString::new(vec![])
    };
    (MULTILINESTRING ( $($line_string_tt: tt),+ )) => {
        $crate::MultiLineString::new(vec![
           $($crate::wkt!(LINESTRING $line_string_tt)),+
        ])
    };
    (MULTILINESTRING $($tail: tt)*) => {
        compile_error!("Invalid MULTILINESTRING wkt")
    };
    (MULTIPOLYGON EMPTY) => {
        $crate::MultiPolygon::new(vec![])
    };
    (MULTIPOLYGON ( $($polygon_tt: tt),+ )) => {
        $crate::MultiPolygon::new(vec![
           $($crate::wkt!(POLYGON $polygon_tt)),+
        ])
    };
    (MULTIPOLYGON $($tail: tt)*) => {
        compile_error!("Invalid MULTIPOLYGON wkt")
    };
    (RECT ($x1: literal $y1: literal, $x2: literal $y2: literal)) => {
        $crate::Bounds::from_corners(
            &$crate::wkt!(POINT($x1 $y1)),
            &$crate::wkt!(POINT($x2 $y2)),
        )
    };
    (RECT $($tail: tt)*) => {
      compile_error!("Invalid RECT wkt. Should be like RECT(x1 y1,x2 y2)")
    };
    (GEOMETRYCOLLECTION EMPTY) => {
        $crate::GeometryCollection::new(vec![])
    };
    (GEOMETRYCOLLECTION ( $($el_type:tt $el_tt: tt),+ )) => {
        $crate::GeometryCollection::new(vec![
           $($crate::Geometry::from($crate::wkt!($el_type $el_tt))),+
        ])
    };
    (GEOMETRYCOLLECTION $($tail: tt)*) => {
        compile_error!("Invalid GEOMETRYCOLLECTION wkt")
    };
    ($name: ident ($($tail: tt)*)) => {
        compile_error!("Unknown type. Must be one of POINT, LINESTRING, POLYGON, MULTIPOINT, MULTILINESTRING, MULTIPOLYGON, RECT, or GEOMETRYCOLLECTION")
    };
}

#[cfg(test)]
mod tests {
    use crate::{Geometry, GeometryCollection, LineString, LngLat, MultiLineString, Polygon};

    #[test]
    fn integer_and_decimal_literals() {
        assert_eq!(wkt! { POINT(1 2.5) }, LngLat::new(1.0, 2.5));
        assert_eq!(wkt! { POINT(-1 -2) }, LngLat::new(-1.0, -2.0));
    }

    #[test]
    fn nested_rings() {
        let polygon = wkt! { POLYGON((0 0,2 0,2 2,0 0),(1 1,1.5 1,1.5 1.5,1 1)) };
        assert_eq!(polygon.rings().len(), 2);
        assert_eq!(polygon.rings()[1].points()[1], LngLat::new(1.5, 1.0));
    }

    #[test]
    fn empty_members() {
        let multi_line_string = wkt! { MULTILINESTRING((1 2,3 4),EMPTY) };
        assert_eq!(
            multi_line_string,
            MultiLineString::new(vec![
                LineString::new(vec![LngLat::new(1.0, 2.0), LngLat::new(3.0, 4.0)]),
                LineString::new(vec![]),
            ])
        );
    }

    #[test]
    fn nested_collection() {
        let collection = wkt! { GEOMETRYCOLLECTION(
            POLYGON EMPTY,
            GEOMETRYCOLLECTION(POINT(5 6))
        )};
        assert_eq!(
            collection,
            GeometryCollection::new(vec![
                Polygon::new(vec![]).into(),
                Geometry::from(GeometryCollection::new(vec![LngLat::new(5.0, 6.0).into()])),
            ])
        );
    }
}
