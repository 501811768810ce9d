//! First-launch sample data.

use chrono::Duration;
use tracing::{debug, info};

use super::catalog_repository::CatalogRepository;
use crate::domain::{Category, NewDish, now_millis};
use crate::events::CatalogEvent;
use crate::ports::{CatalogEventEmitter, CoreError, DishQuery};

const SAMPLES: [(&str, &str, Category, &[&str]); 10] = [
    (
        "MW SS25 Scallop",
        "Roe-off scallops with tomato vinaigrette, compressed watermelon and avocado puree",
        Category::Starter,
        &["Fish", "Gluten", "Mollusc", "Soy", "Sulphites"],
    ),
    (
        "MW SS25 Lamb Skewer",
        "Marinated lamb backstrap with red capsicum, onion petals, lemon herb marinade",
        Category::Main,
        &["Gluten", "Milk", "Soy"],
    ),
    (
        "MW SS25 Chocolate Fondant",
        "Warm chocolate fondant with pistachio cream, white chocolate snow, and hazelnut gelato",
        Category::Dessert,
        &["Egg", "Gluten", "Milk", "Hazelnut", "Pistachio", "Soy"],
    ),
    (
        "MW SS25 Broccolini",
        "Grilled broccolini with whipped ricotta, pesto, and roasted almonds",
        Category::Side,
        &["Almond", "Egg", "Milk"],
    ),
    (
        "MW SS25 LUNCH Bowl - Pork",
        "Crispy pork belly with yellow rice, roasted cauliflower, and brussel sprout slaw",
        Category::Lunch,
        &["Gluten", "Milk", "Soy", "Sulphites"],
    ),
    (
        "MW SS25 Barramundi",
        "Skin-on barramundi with lemon butter sauce, mussels, and potato",
        Category::Main,
        &["Fish", "Milk", "Mollusc", "Sulphites"],
    ),
    (
        "MW SS25 Pavlova",
        "Crisp meringue with raspberry sorbet, strawberry puree, and white chocolate chantilly",
        Category::Dessert,
        &["Egg", "Gluten", "Milk"],
    ),
    (
        "MW SS25 Tomato & Melon Salad",
        "Heirloom tomatoes with compressed watermelon, stracciatella, and walnut crispy",
        Category::Starter,
        &["Gluten", "Milk", "Pine nut", "Sesame", "Walnut"],
    ),
    (
        "MW SS25 Roasted Cauliflower",
        "Tandoori roasted cauliflower with coconut curry sauce and nut crumbs",
        Category::Side,
        &["Almond", "Gluten", "Milk", "Pistachio"],
    ),
    (
        "MW SS25 Garlic Bread",
        "Glazed bun with green garlic butter, parmesan, and garlic crisps",
        Category::Side,
        &["Egg", "Gluten", "Milk", "Wheat"],
    ),
];

/// The sample menu, newest first once stored.
///
/// `date_added` is staggered by one millisecond per entry so the list keeps
/// a stable order under the `date_added DESC` sort.
pub fn sample_dishes() -> Vec<NewDish> {
    let base = now_millis();
    SAMPLES
        .iter()
        .zip(0_i64..)
        .map(|(&(name, description, category, allergens), offset)| {
            NewDish::new(name, description, category)
                .with_allergens(allergens.iter().copied())
                .with_date_added(base + Duration::milliseconds(offset))
        })
        .collect()
}

/// Insert the sample menu if the catalog holds no dishes at all.
///
/// Returns how many dishes were inserted (zero when the catalog already has
/// content).
pub async fn seed_if_empty(
    repo: &CatalogRepository,
    emitter: &dyn CatalogEventEmitter,
) -> Result<usize, CoreError> {
    let existing = repo.snapshot(DishQuery::All).await?;
    if !existing.dishes.is_empty() {
        debug!(count = existing.dishes.len(), "Catalog not empty, skipping seed");
        return Ok(0);
    }
    seed(repo, emitter).await
}

/// Insert the sample menu unconditionally.
pub async fn seed(
    repo: &CatalogRepository,
    emitter: &dyn CatalogEventEmitter,
) -> Result<usize, CoreError> {
    let samples = sample_dishes();
    let count = samples.len();
    for dish in &samples {
        repo.insert(dish).await?;
    }
    info!(count, "Seeded sample dishes");
    emitter.emit(CatalogEvent::CatalogSeeded { count });
    Ok(count)
}
