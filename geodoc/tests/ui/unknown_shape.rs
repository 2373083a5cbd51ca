use geodoc::GeoJson;

#[derive(GeoJson)]
#[geojson(shape = "polygon")]
struct Area {
    #[geojson(id)]
    id: u32,
}

fn main() {}
