use crate::GeometryType;
use serde::Serialize;

pub const POINTS_LAYER: &str = "points-layer";
pub const MULTIPOINTS_LAYER: &str = "multipoints-layer";
pub const LINESTRING_LAYER: &str = "linestring-layer";
pub const MULTILINESTRING_LAYER: &str = "multilinestring-layer";
pub const POLYGON_LAYER: &str = "polygon-layer";
pub const MULTIPOLYGON_LAYER: &str = "multipolygon-layer";
pub const COLLECTION_POINTS_LAYER: &str = "gc-points-layer";
pub const COLLECTION_LINES_LAYER: &str = "gc-lines-layer";
pub const COLLECTION_POLYGONS_LAYER: &str = "gc-polygons-layer";

/// Every layer the loader may create, in the order click handling is wired up.
pub const INTERACTIVE_LAYERS: [&str; 9] = [
    POINTS_LAYER,
    MULTIPOINTS_LAYER,
    LINESTRING_LAYER,
    MULTILINESTRING_LAYER,
    POLYGON_LAYER,
    MULTIPOLYGON_LAYER,
    COLLECTION_POINTS_LAYER,
    COLLECTION_LINES_LAYER,
    COLLECTION_POLYGONS_LAYER,
];

/// A styled layer drawing the features of one source that have one geometry type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerSpec {
    pub id: String,
    pub source: String,
    pub filter: GeometryType,
    pub paint: Paint,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Paint {
    Circle(CirclePaint),
    Line(LinePaint),
    Fill(FillPaint),
    FillExtrusion(FillExtrusionPaint),
}

/// A value that is either fixed or interpolated linearly between `(zoom, value)` stops.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ZoomValue {
    Fixed(f64),
    Linear(Vec<(f64, f64)>),
}

impl ZoomValue {
    pub fn at_zoom(&self, zoom: f64) -> f64 {
        let stops = match self {
            ZoomValue::Fixed(value) => return *value,
            ZoomValue::Linear(stops) => stops,
        };
        let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
            return 0.0;
        };
        if zoom <= first.0 {
            return first.1;
        }
        for window in stops.windows(2) {
            let ((z0, v0), (z1, v1)) = (window[0], window[1]);
            if zoom <= z1 {
                let t = (zoom - z0) / (z1 - z0);
                return v0 + t * (v1 - v0);
            }
        }
        last.1
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CirclePaint {
    pub radius: ZoomValue,
    pub color: String,
    pub stroke_width: f64,
    pub stroke_color: String,
    /// Lay circles flat on the map when it is pitched, rather than facing the camera.
    pub pitch_aligned: bool,
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinePaint {
    pub color: String,
    pub width: ZoomValue,
    pub dash_array: Option<[f64; 2]>,
    pub opacity: f64,
    pub round: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FillPaint {
    pub color: String,
    pub opacity: f64,
    pub outline_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FillExtrusionPaint {
    pub color: String,
    pub opacity: f64,
    pub height: f64,
    pub base: f64,
}

const COLLECTION_COLOR: &str = "#8B008B";

fn point_radius() -> ZoomValue {
    ZoomValue::Linear(vec![(0.0, 5.0), (4.0, 8.0), (8.0, 12.0)])
}

fn line_width() -> ZoomValue {
    ZoomValue::Linear(vec![(0.0, 2.0), (8.0, 4.0)])
}

fn circle(color: &str) -> Paint {
    Paint::Circle(CirclePaint {
        radius: point_radius(),
        color: color.to_string(),
        stroke_width: 2.0,
        stroke_color: "#FFFFFF".to_string(),
        pitch_aligned: true,
        opacity: 0.9,
    })
}

fn line(color: &str, dash_array: Option<[f64; 2]>) -> Paint {
    Paint::Line(LinePaint {
        color: color.to_string(),
        width: line_width(),
        dash_array,
        opacity: 0.8,
        round: true,
    })
}

fn extrusion(color: &str) -> Paint {
    Paint::FillExtrusion(FillExtrusionPaint {
        color: color.to_string(),
        opacity: 0.6,
        height: 0.0,
        base: 0.0,
    })
}

fn layer(id: &str, source: &str, filter: GeometryType, paint: Paint) -> LayerSpec {
    LayerSpec {
        id: id.to_string(),
        source: source.to_string(),
        filter,
        paint,
    }
}

/// One layer per geometry type over the document's own source.
pub fn base_layers(source: &str) -> Vec<LayerSpec> {
    vec![
        layer(POINTS_LAYER, source, GeometryType::Point, circle("#FF0000")),
        layer(MULTIPOINTS_LAYER, source, GeometryType::MultiPoint, circle("#FFA500")),
        layer(LINESTRING_LAYER, source, GeometryType::LineString, line("#0000FF", None)),
        layer(
            MULTILINESTRING_LAYER,
            source,
            GeometryType::MultiLineString,
            line("#00FFFF", Some([1.0, 1.0])),
        ),
        layer(POLYGON_LAYER, source, GeometryType::Polygon, extrusion("#00FF00")),
        layer(MULTIPOLYGON_LAYER, source, GeometryType::MultiPolygon, extrusion("#FFFF00")),
    ]
}

/// Layers over the source of features extracted from geometry collections, all drawn in one color
/// so they stand apart from the rest of the document.
pub fn collection_layers(source: &str) -> Vec<LayerSpec> {
    vec![
        layer(
            COLLECTION_POINTS_LAYER,
            source,
            GeometryType::Point,
            Paint::Circle(CirclePaint {
                radius: ZoomValue::Fixed(6.0),
                color: COLLECTION_COLOR.to_string(),
                stroke_width: 2.0,
                stroke_color: "#FFFFFF".to_string(),
                pitch_aligned: false,
                opacity: 1.0,
            }),
        ),
        layer(
            COLLECTION_LINES_LAYER,
            source,
            GeometryType::LineString,
            Paint::Line(LinePaint {
                color: COLLECTION_COLOR.to_string(),
                width: ZoomValue::Fixed(4.0),
                dash_array: None,
                opacity: 1.0,
                round: true,
            }),
        ),
        layer(
            COLLECTION_POLYGONS_LAYER,
            source,
            GeometryType::Polygon,
            Paint::Fill(FillPaint {
                color: COLLECTION_COLOR.to_string(),
                opacity: 0.5,
                outline_color: "#4B0082".to_string(),
            }),
        ),
    ]
}
