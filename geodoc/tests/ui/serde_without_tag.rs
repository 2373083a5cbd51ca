use geodoc::GeoJson;

#[derive(GeoJson)]
#[geojson(shape = "feature")]
struct Shop {
    #[geojson(serde)]
    hours: Vec<u8>,
}

fn main() {}
