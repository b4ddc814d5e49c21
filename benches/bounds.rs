use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use geolayers::{
    compute_bounds, flatten, Feature, FeatureCollection, Geometry, GeometryCollection, LineString,
    LngLat, Polygon, Properties,
};

const FEATURE_COUNT: usize = 10_000;

fn ring(origin: LngLat) -> LineString {
    let (x, y) = (origin.lng(), origin.lat());
    LineString::new(vec![
        LngLat::new(x, y),
        LngLat::new(x + 0.5, y),
        LngLat::new(x + 0.5, y + 0.5),
        LngLat::new(x, y),
    ])
}

/// Every third feature is a geometry collection, the rest alternate between points and polygons.
fn features() -> Vec<Feature> {
    (0..FEATURE_COUNT)
        .map(|feature_idx| {
            let origin = LngLat::new(
                (feature_idx % 360) as f64 - 180.0,
                (feature_idx % 170) as f64 - 85.0,
            );
            let geometry = match feature_idx % 3 {
                0 => Geometry::from(origin),
                1 => Polygon::new(vec![ring(origin)]).into(),
                _ => GeometryCollection::new(vec![
                    origin.into(),
                    ring(origin).into(),
                    Polygon::new(vec![ring(origin)]).into(),
                ])
                .into(),
            };
            let mut properties = Properties::empty();
            properties.insert("name".to_string(), format!("feature-{feature_idx}").into());
            Feature::new(geometry, properties).with_id(feature_idx.to_string())
        })
        .collect()
}

fn benchmark(c: &mut Criterion) {
    let features = features();
    c.bench_function("compute_bounds", |b| {
        b.iter(|| compute_bounds(black_box(&features)));
    });
    c.bench_function("flatten", |b| {
        b.iter(|| flatten(black_box(&features)));
    });

    let json = serde_json::to_vec(&FeatureCollection::new(features)).unwrap();
    c.bench_function("read geojson", |b| {
        b.iter_batched(
            || json.clone(),
            |bytes| FeatureCollection::from_slice(black_box(&bytes)).unwrap(),
            BatchSize::LargeInput,
        );
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
