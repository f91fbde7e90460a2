//! Seed document and the built-in catalog.
//!
//! [`SeedData`] is the serialized form of a whole store: three ordered entity
//! sets. The server loads it at startup, either from [`SeedData::builtin`] or
//! from a YAML/JSON file.

use serde::{Deserialize, Serialize};

use crate::types::{Category, CategoryId, Product, ProductId, Review, ReviewId};

/// Initial contents of the in-memory store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

const KITCHEN: &str = "c01b1ff4-f894-4ef2-b27a-22aacc2fca70";
const GARDEN: &str = "34115aac-0ff5-4859-8f43-10e8db23602b";
const SPORTS: &str = "d914aec0-25b2-4103-9ed8-225d39018d1d";

const STEEL_POT: &str = "53a0724c-a416-4cac-ae45-bfaedce1f147";
const SALAD_BOWL: &str = "c2af9adc-d0b8-4d44-871f-cef66f86f7f6";
const SPOON: &str = "2c931e7e-510f-49e5-aed6-d6b44087e5a1";
const SHOVEL: &str = "404daf2a-9b97-4b99-b9af-614d07f818d7";
const FERTILIZER: &str = "6379c436-9fad-4b3f-a427-2d7241f5c1b1";
const BASKETBALL: &str = "f01bcdec-6783-464e-8f9e-8416830f7569";
const GOLF_CLUBS: &str = "a4824a31-5c83-42af-8c1b-6e2461aae1ef";
const BASEBALL_GLOVES: &str = "b553085a-a7e1-4339-b13f-c8ef8d4a6e3a";
const SOCCER_BALL: &str = "47bf3941-9c8b-42c0-9c72-7f3985492a5b";

impl SeedData {
    /// The built-in catalog: Kitchen, Garden and Sports with nine products.
    #[must_use]
    pub fn builtin() -> Self {
        let categories = vec![
            category(KITCHEN, "Kitchen"),
            category(GARDEN, "Garden"),
            category(SPORTS, "Sports"),
        ];

        let products = vec![
            product(STEEL_POT, "Steel Pot", "Silver steel pot that is perfect for cooking", 230, 42.44, false, "img-1", KITCHEN),
            product(SALAD_BOWL, "Salad Bowl", "Round wooden bowl perfect for tossing and making salads", 33, 53.5, false, "img-2", KITCHEN),
            product(SPOON, "Spoon", "Small and delicate spoon", 4266, 1.33, true, "img-3", KITCHEN),
            product(SHOVEL, "Shovel", "Grey rounded shovel for digging", 753, 332.0, false, "img-4", GARDEN),
            product(FERTILIZER, "Fertilizer", "Nitrogen based fertilizer", 53453, 23.11, true, "img-5", GARDEN),
            product(BASKETBALL, "Basketball", "Outdoor adult size 7 basketball", 3, 50.99, false, "img-6", SPORTS),
            product(GOLF_CLUBS, "Golf Clubs", "Right handed set of irons and woods", 3, 427.44, false, "img-7", SPORTS),
            product(BASEBALL_GLOVES, "Baseball Gloves", "Professional catcher baseball gloves", 745, 77.0, true, "img-8", SPORTS),
            product(SOCCER_BALL, "Soccer Ball", "Standard adult size 5 soccer ball", 734, 93.44, true, "img-9", SPORTS),
        ];

        // Basketball is deliberately left without reviews.
        let reviews = vec![
            review("92896589-91d8-4e06-8190-3129b7645c6e", STEEL_POT, "2021-01-01", "This is bad", "Worst pot I ever bought, it scratched on day one", 1),
            review("91fa2371-4c26-467b-879b-4583a8a40326", STEEL_POT, "2021-03-11", "Solid pot", "Heats evenly and cleans up well", 5),
            review("245b8e00-391f-454d-9328-8d298947d27a", SALAD_BOWL, "2021-02-14", "Too small", "Fine for one person, not for a family", 2),
            review("903f9e92-8d35-4f06-b99b-3519e38e2947", SPOON, "2021-04-02", "Does the job", "It is a spoon. It works", 4),
            review("7de7d054-70c9-4953-936a-c4117b02bb8c", SPOON, "2021-05-20", "Great value", "Bought a dozen, no complaints", 5),
            review("89ed913e-25a6-401b-9d16-fb1a00ca71cf", SHOVEL, "2021-06-08", "Handle snapped", "Broke on the first rocky patch", 1),
            review("b6f833e2-cef6-4dfb-82ef-8461bb751d42", SHOVEL, "2021-06-30", "Meh", "Blade bends more than it should", 2),
            review("aa18e90f-f068-44f1-afb2-524be4f5a8df", FERTILIZER, "2021-07-15", "Green lawn", "Lawn turned green within two weeks", 4),
            review("21be8fda-09ad-4676-8184-6052ec4687da", GOLF_CLUBS, "2021-08-01", "Love them", "Took three strokes off my game", 5),
            review("d6b52006-1050-47f2-8083-d1454f3f0f8c", BASEBALL_GLOVES, "2021-08-19", "Stiff at first", "Needs a few weeks of breaking in", 3),
            review("3edf480a-2be1-4819-9aa5-4a9761bd34d8", BASEBALL_GLOVES, "2021-09-03", "Good glove", "Comfortable once broken in", 4),
            review("5a27622f-340e-4c8c-8ceb-c46a69f38488", SOCCER_BALL, "2021-09-27", "Perfect", "Holds air and feels right", 5),
            review("34431d8b-735b-4eb2-b8c3-f13fe6774b9d", SOCCER_BALL, "2021-10-10", "Kids love it", "Survived a whole season of practice", 5),
            review("9225b4c1-1251-43f6-ae44-b6761f8138da", SOCCER_BALL, "2021-11-05", "Nice ball", "Stitching started to fray a little", 4),
        ];

        Self {
            categories,
            products,
            reviews,
        }
    }
}

fn category(id: &str, name: &str) -> Category {
    Category {
        id: CategoryId::new(id),
        name: name.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    description: &str,
    quantity: i32,
    price: f64,
    on_sale: bool,
    image: &str,
    category: &str,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        description: description.to_string(),
        quantity,
        price,
        on_sale,
        image: image.to_string(),
        category_id: Some(CategoryId::new(category)),
    }
}

fn review(id: &str, product: &str, date: &str, title: &str, comment: &str, rating: i32) -> Review {
    Review {
        id: ReviewId::new(id),
        date: date.to_string(),
        title: title.to_string(),
        comment: comment.to_string(),
        rating,
        product_id: ProductId::new(product),
    }
}
