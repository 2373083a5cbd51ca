use geodoc::GeoJson;

#[derive(GeoJson)]
#[geojson(shape = "feature")]
struct Shop {
    #[geojson(property = " ")]
    name: String,
}

fn main() {}
