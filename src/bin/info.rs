use geolayers::{compute_bounds, flatten, FeatureCollection, GeometryType};
use std::collections::BTreeMap;
use std::fs;
use std::io::BufReader;

type Error = Box<dyn std::error::Error>;
type Result<T> = std::result::Result<T, Error>;

fn main() -> Result<()> {
    let mut args = std::env::args();
    let bin_name = args.next().expect("Missing bin name");
    let input_path = args.next().unwrap_or_else(|| {
        panic!("Missing input path.\nUsage:\n\t`{bin_name} <input-path.geojson>`")
    });

    let file_size = fs::metadata(&input_path)?.len();
    let input = BufReader::new(fs::File::open(&input_path)?);
    let document = FeatureCollection::from_reader(input)?;

    let mut type_counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut without_geometry = 0;
    for feature in document.features() {
        match feature.geometry() {
            Some(geometry) => *type_counts.entry(geometry.type_name().to_string()).or_default() += 1,
            None => without_geometry += 1,
        }
    }

    eprintln!("       file_size: {file_size}");
    eprintln!("   feature_count: {}", document.len());
    for (type_name, count) in &type_counts {
        eprintln!("{type_name:>16}: {count}");
    }
    eprintln!("without_geometry: {without_geometry}");

    match compute_bounds(document.features()) {
        Some(bounds) => eprintln!("          bounds: {bounds:?}"),
        None => eprintln!("          bounds: none"),
    }

    let collection_count = type_counts
        .get(GeometryType::GeometryCollection.as_str())
        .copied()
        .unwrap_or(0);
    let extracted = flatten(document.features());
    eprintln!(
        "       extracted: {} from {collection_count} geometry collections",
        extracted.len()
    );

    eprintln!("done");
    Ok(())
}
