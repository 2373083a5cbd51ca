use geodoc::GeoJson;

#[derive(GeoJson)]
#[geojson(shape = "feature")]
struct Shop {
    #[geojson(geometri)]
    location: String,
}

fn main() {}
