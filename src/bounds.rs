use crate::{Bounded, Feature, LngLat};
use serde::Serialize;
use std::fmt::{Debug, Formatter};

/// An axis-aligned bounding box. Every field is finite and `min` never exceeds `max`.
///
/// The only way to get one out of a geometry is through a [`BoundsAccumulator`], which refuses to
/// produce a box until it has observed at least one coordinate.
#[derive(Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    min: LngLat,
    max: LngLat,
}

impl Debug for Bounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "RECT({} {}, {} {})",
            self.min.lng(),
            self.min.lat(),
            self.max.lng(),
            self.max.lat()
        )
    }
}

impl Bounds {
    pub fn min(&self) -> &LngLat {
        &self.min
    }

    pub fn max(&self) -> &LngLat {
        &self.max
    }

    pub fn width(&self) -> f64 {
        self.max.lng() - self.min.lng()
    }

    pub fn height(&self) -> f64 {
        self.max.lat() - self.min.lat()
    }

    pub fn from_corners(a: &LngLat, b: &LngLat) -> Self {
        Bounds {
            min: LngLat::new(a.lng().min(b.lng()), a.lat().min(b.lat())),
            max: LngLat::new(a.lng().max(b.lng()), a.lat().max(b.lat())),
        }
    }

    pub fn extend(&mut self, other: &Bounds) {
        self.extend_point(&other.min);
        self.extend_point(&other.max);
    }

    fn extend_point(&mut self, point: &LngLat) {
        self.min.set_lng(self.min.lng().min(point.lng()));
        self.min.set_lat(self.min.lat().min(point.lat()));
        self.max.set_lng(self.max.lng().max(point.lng()));
        self.max.set_lat(self.max.lat().max(point.lat()));
    }

    pub fn center(&self) -> LngLat {
        LngLat::new(
            (self.min.lng() + self.max.lng()) / 2.0,
            (self.min.lat() + self.max.lat()) / 2.0,
        )
    }

    pub fn contains(&self, point: &LngLat) -> bool {
        point.lng() >= self.min.lng()
            && point.lng() <= self.max.lng()
            && point.lat() >= self.min.lat()
            && point.lat() <= self.max.lat()
    }

    /// `[[min_lng, min_lat], [max_lng, max_lat]]`, the shape map hosts expect for fitting.
    pub fn to_corner_array(&self) -> [[f64; 2]; 2] {
        [self.min.into(), self.max.into()]
    }
}

/// Running min/max over every coordinate it is shown.
///
/// Starts out "inverted" at `(+∞, +∞, −∞, −∞)` so the first observed point becomes both corners.
#[derive(Clone, Debug)]
pub struct BoundsAccumulator {
    min_lng: f64,
    min_lat: f64,
    max_lng: f64,
    max_lat: f64,
}

impl Default for BoundsAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl BoundsAccumulator {
    pub fn new() -> Self {
        Self {
            min_lng: f64::INFINITY,
            min_lat: f64::INFINITY,
            max_lng: f64::NEG_INFINITY,
            max_lat: f64::NEG_INFINITY,
        }
    }

    pub fn observe(&mut self, point: &LngLat) {
        self.min_lng = self.min_lng.min(point.lng());
        self.min_lat = self.min_lat.min(point.lat());
        self.max_lng = self.max_lng.max(point.lng());
        self.max_lat = self.max_lat.max(point.lat());
    }

    pub fn observe_all<'a>(&mut self, points: impl IntoIterator<Item = &'a LngLat>) {
        for point in points {
            self.observe(point)
        }
    }

    /// The accumulated box, or `None` if nothing finite was ever observed.
    pub fn finalize(&self) -> Option<Bounds> {
        let all_finite = self.min_lng.is_finite()
            && self.min_lat.is_finite()
            && self.max_lng.is_finite()
            && self.max_lat.is_finite();
        if !all_finite {
            return None;
        }
        Some(Bounds {
            min: LngLat::new(self.min_lng, self.min_lat),
            max: LngLat::new(self.max_lng, self.max_lat),
        })
    }
}

/// The box around every coordinate of every feature, descending into geometry collections.
///
/// `None` when there's nothing to measure: no features, or only features without geometry (or with
/// empty ones). Callers should leave the viewport alone rather than fit to a box at the origin.
pub fn compute_bounds<'a>(features: impl IntoIterator<Item = &'a Feature>) -> Option<Bounds> {
    let mut accumulator = BoundsAccumulator::new();
    for geometry in features.into_iter().filter_map(Feature::geometry) {
        geometry.extend_bounds(&mut accumulator);
    }
    accumulator.finalize()
}
