#[macro_use]
extern crate log;

mod bounds;
mod error;
mod feature;
mod flatten;
mod geojson;
mod geometry;
pub mod map;
mod popup;
#[cfg(test)]
mod test_data;
mod wkt;

pub use bounds::{compute_bounds, Bounds, BoundsAccumulator};
pub use error::{Error, Result};
pub use feature::{Feature, Properties, PropertyValue, COLLECTION_ID, DESCRIPTION, GEOMETRY_INDEX};
pub use flatten::flatten;
pub use geojson::FeatureCollection;
pub use geometry::{
    Bounded, Geometry, GeometryCollection, GeometryType, LineString, LngLat, MultiLineString,
    MultiPoint, MultiPolygon, Point, Polygon, UnknownGeometry,
};
pub use map::{LoaderOptions, MapHost, MapLoader};
pub use popup::{anchor_for, popup_html};

#[cfg(test)]
fn ensure_logging() {
    use std::io::Write;

    let result = env_logger::builder()
        .is_test(true)
        .format(|buf, record| {
            let file = record.file().unwrap_or("?");
            let line = record
                .line()
                .map(|line| line.to_string())
                .unwrap_or("?".to_string());
            writeln!(
                buf,
                "[ {log_level} {file}:{line:3} ] {args}",
                log_level = record.level(),
                args = record.args()
            )
        })
        .try_init();
    if let Err(e) = result {
        // Already initialized by an earlier test in this process.
        trace!("logging already set up: {e:?}");
    }
}
