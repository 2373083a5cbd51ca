use geodoc::GeoJson;

#[derive(GeoJson)]
#[geojson(shape = "feature")]
enum Kind {
    Museum,
}

fn main() {}
