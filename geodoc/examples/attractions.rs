use geo_types::Point;
use geodoc::GeoJson;

#[derive(GeoJson)]
#[geojson(shape = "feature", accessors)]
struct Attraction {
    #[geojson(id)]
    id: String,
    #[geojson(property)]
    name: String,
    #[geojson(geometry)]
    location: Point,
    description: String,
}

#[geodoc::accessors]
impl Attraction {
    #[geojson(property = "alteredDescription")]
    fn get_description(&self) -> String {
        format!("{} (altered)", self.description)
    }
}

#[derive(GeoJson)]
#[geojson(shape = "feature_collection")]
struct Guide {
    #[geojson(features)]
    attractions: Vec<Attraction>,
}

#[derive(GeoJson)]
#[geojson(shape = "geometry_collection")]
struct Walk {
    #[geojson(geometry)]
    start: Point,
    #[geojson(geometry)]
    finish: Option<Point>,
}

fn main() -> Result<(), geodoc::GeoDocError> {
    env_logger::init();

    let guide = Guide {
        attractions: vec![
            Attraction {
                id: "louvre".into(),
                name: "Louvre".into(),
                location: Point::new(2.3376, 48.8606),
                description: "Art museum".into(),
            },
            Attraction {
                id: "eiffel".into(),
                name: "Eiffel Tower".into(),
                location: Point::new(2.2945, 48.8584),
                description: "Wrought-iron lattice tower".into(),
            },
        ],
    };
    println!("{}", geodoc::to_string_pretty(&guide)?);

    let walk = Walk {
        start: Point::new(2.3376, 48.8606),
        finish: None,
    };
    println!("{}", geodoc::to_string(&walk)?);

    Ok(())
}
