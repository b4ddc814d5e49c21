mod bounded;
#[cfg(test)]
mod relative_eq;

pub use bounded::Bounded;

use serde::ser::SerializeTuple;
use serde::{Serialize, Serializer};
use serde_json::Value as JsonValue;
use std::fmt::{Debug, Display, Formatter};

#[derive(Clone, PartialEq)]
pub enum Geometry {
    Point(LngLat),
    LineString(LineString),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
    /// A geometry whose `type` we don't recognize, or whose coordinates couldn't be read.
    ///
    /// These are carried along untouched so they can be handed back to the host, but they
    /// contribute nothing to bounds or popup anchors.
    Unknown(UnknownGeometry),
}

impl Geometry {
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Geometry::Point(_) => GeometryType::Point,
            Geometry::LineString(_) => GeometryType::LineString,
            Geometry::Polygon(_) => GeometryType::Polygon,
            Geometry::MultiPoint(_) => GeometryType::MultiPoint,
            Geometry::MultiLineString(_) => GeometryType::MultiLineString,
            Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
            Geometry::GeometryCollection(_) => GeometryType::GeometryCollection,
            Geometry::Unknown(_) => GeometryType::Unknown,
        }
    }

    /// The GeoJSON `type` member, including the original name of an unknown geometry.
    pub fn type_name(&self) -> &str {
        match self {
            Geometry::Unknown(unknown) => unknown.type_name(),
            other => other.geometry_type().as_str(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum GeometryType {
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
    Unknown,
}

impl GeometryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GeometryType::Point => "Point",
            GeometryType::LineString => "LineString",
            GeometryType::Polygon => "Polygon",
            GeometryType::MultiPoint => "MultiPoint",
            GeometryType::MultiLineString => "MultiLineString",
            GeometryType::MultiPolygon => "MultiPolygon",
            GeometryType::GeometryCollection => "GeometryCollection",
            GeometryType::Unknown => "Unknown",
        }
    }
}

impl Display for GeometryType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Debug for Geometry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Geometry::Point(g) => write!(f, "POINT({g:?})"),
            Geometry::LineString(g) => g.fmt(f),
            Geometry::Polygon(g) => g.fmt(f),
            Geometry::MultiPoint(g) => g.fmt(f),
            Geometry::MultiLineString(g) => g.fmt(f),
            Geometry::MultiPolygon(g) => g.fmt(f),
            Geometry::GeometryCollection(g) => g.fmt(f),
            Geometry::Unknown(g) => g.fmt(f),
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
pub struct LngLat {
    lng: f64,
    lat: f64,
}
pub type Point = LngLat;

impl LngLat {
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn set_lng(&mut self, lng: f64) {
        self.lng = lng;
    }

    pub fn set_lat(&mut self, lat: f64) {
        self.lat = lat;
    }
}

impl From<[f64; 2]> for LngLat {
    fn from([lng, lat]: [f64; 2]) -> Self {
        Self::new(lng, lat)
    }
}

impl From<LngLat> for [f64; 2] {
    fn from(value: LngLat) -> Self {
        [value.lng, value.lat]
    }
}

/// Positions are written as a bare `[lng, lat]` pair.
impl Serialize for LngLat {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.lng)?;
        tuple.serialize_element(&self.lat)?;
        tuple.end()
    }
}

#[derive(Clone, Default, Serialize, PartialEq)]
pub struct LineString(Vec<LngLat>);
impl LineString {
    pub fn new(points: Vec<LngLat>) -> Self {
        Self(points)
    }
    pub fn points_len(&self) -> usize {
        self.0.len()
    }
    pub fn points(&self) -> &[LngLat] {
        &self.0
    }
    pub fn push_point(&mut self, point: LngLat) {
        self.0.push(point)
    }
}

#[derive(Clone, Default, Serialize, PartialEq)]
pub struct Polygon(Vec<LineString>);
impl Polygon {
    pub fn new(rings: Vec<LineString>) -> Self {
        Self(rings)
    }

    pub fn rings(&self) -> &[LineString] {
        &self.0
    }

    /// The outer ring, if the polygon has any rings at all.
    pub fn exterior(&self) -> Option<&LineString> {
        self.0.first()
    }

    pub fn push_ring(&mut self, ring: LineString) {
        self.0.push(ring)
    }
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct MultiPoint(Vec<Point>);
impl MultiPoint {
    pub fn new(points: Vec<Point>) -> Self {
        Self(points)
    }
    pub fn points(&self) -> &[Point] {
        &self.0
    }
    pub fn push(&mut self, point: Point) {
        self.0.push(point)
    }
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct MultiLineString(Vec<LineString>);
impl MultiLineString {
    pub fn new(line_strings: Vec<LineString>) -> Self {
        Self(line_strings)
    }
    pub fn push(&mut self, line_string: LineString) {
        self.0.push(line_string)
    }

    pub fn line_strings(&self) -> &[LineString] {
        &self.0
    }

    pub fn first(&self) -> Option<&LineString> {
        self.0.first()
    }
}

#[derive(Clone, Default, Serialize, PartialEq)]
pub struct MultiPolygon(Vec<Polygon>);
impl MultiPolygon {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self(polygons)
    }
    pub fn push(&mut self, polygon: Polygon) {
        self.0.push(polygon)
    }
    pub fn polygons(&self) -> &[Polygon] {
        &self.0
    }
    pub fn first(&self) -> Option<&Polygon> {
        self.0.first()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeometryCollection(Vec<Geometry>);
impl GeometryCollection {
    pub fn new(geometries: Vec<Geometry>) -> Self {
        Self(geometries)
    }

    pub fn push(&mut self, geometry: Geometry) {
        self.0.push(geometry)
    }

    pub fn geometries(&self) -> &[Geometry] {
        &self.0
    }

    pub fn into_geometries(self) -> Vec<Geometry> {
        self.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct UnknownGeometry {
    type_name: String,
    raw: JsonValue,
}

impl UnknownGeometry {
    pub fn new(type_name: impl Into<String>, raw: JsonValue) -> Self {
        Self {
            type_name: type_name.into(),
            raw,
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The geometry object exactly as it appeared in the source document.
    pub fn raw(&self) -> &JsonValue {
        &self.raw
    }
}

impl From<Point> for Geometry {
    fn from(value: Point) -> Self {
        Self::Point(value)
    }
}
impl From<LineString> for Geometry {
    fn from(value: LineString) -> Self {
        Self::LineString(value)
    }
}
impl From<Polygon> for Geometry {
    fn from(value: Polygon) -> Self {
        Self::Polygon(value)
    }
}
impl From<MultiPoint> for Geometry {
    fn from(value: MultiPoint) -> Self {
        Self::MultiPoint(value)
    }
}
impl From<MultiLineString> for Geometry {
    fn from(value: MultiLineString) -> Self {
        Self::MultiLineString(value)
    }
}
impl From<MultiPolygon> for Geometry {
    fn from(value: MultiPolygon) -> Self {
        Self::MultiPolygon(value)
    }
}
impl From<GeometryCollection> for Geometry {
    fn from(value: GeometryCollection) -> Self {
        Self::GeometryCollection(value)
    }
}
impl From<UnknownGeometry> for Geometry {
    fn from(value: UnknownGeometry) -> Self {
        Self::Unknown(value)
    }
}

impl Debug for LngLat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.lng, self.lat)
    }
}

impl Debug for LineString {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "LINESTRING ")?;
        fmt_points(&self.0, f)
    }
}

fn fmt_points(points: &[LngLat], f: &mut Formatter) -> std::fmt::Result {
    if points.is_empty() {
        return write!(f, "EMPTY");
    }

    write!(f, "(")?;
    for (idx, point) in points.iter().enumerate() {
        if idx == points.len() - 1 {
            write!(f, "{point:?}")?;
        } else {
            write!(f, "{point:?},")?;
        }
    }
    write!(f, ")")
}

impl Debug for Polygon {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "POLYGON ")?;
        fmt_polygon_rings_wkt(self, f)
    }
}

fn fmt_polygon_rings_wkt(polygon: &Polygon, f: &mut Formatter) -> std::fmt::Result {
    if polygon.rings().is_empty() {
        return write!(f, "EMPTY");
    }

    write!(f, "(")?;
    for (idx, ring) in polygon.rings().iter().enumerate() {
        fmt_points(ring.points(), f)?;
        if idx != polygon.rings().len() - 1 {
            write!(f, ",")?;
        }
    }
    write!(f, ")")
}

impl Debug for MultiPolygon {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.polygons().is_empty() {
            return write!(f, "MULTIPOLYGON EMPTY");
        }
        write!(f, "MULTIPOLYGON (")?;
        for (idx, polygon) in self.polygons().iter().enumerate() {
            fmt_polygon_rings_wkt(polygon, f)?;
            if idx != self.polygons().len() - 1 {
                write!(f, ",")?;
            }
        }
        write!(f, ")")
    }
}
