struct Shop;

#[geodoc::accessors]
impl Default for Shop {
    fn default() -> Self {
        Shop
    }
}

fn main() {}
