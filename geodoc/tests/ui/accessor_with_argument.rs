struct Shop {
    name: String,
}

#[geodoc::accessors]
impl Shop {
    #[geojson(property)]
    fn name_in(&self, language: &str) -> String {
        format!("{} ({language})", self.name)
    }
}

fn main() {}
