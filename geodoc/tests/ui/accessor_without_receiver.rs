struct Shop;

#[geodoc::accessors]
impl Shop {
    #[geojson(id)]
    fn code() -> u32 {
        7
    }
}

fn main() {}
