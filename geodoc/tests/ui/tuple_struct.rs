use geodoc::GeoJson;

#[derive(GeoJson)]
#[geojson(shape = "feature")]
struct Pair(f64, f64);

fn main() {}
