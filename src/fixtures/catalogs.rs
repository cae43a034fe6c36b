// fixtures/catalogs.rs - Product lists used across the test suites

use crate::web_app::model::Product;
use super::{product, CatalogFixture};

/// Thirteen identical-looking packs: one more than a page
pub struct NumberedPacks;

impl CatalogFixture for NumberedPacks {
    fn products() -> Vec<Product> {
        (1..=13)
            .map(|i| product(i, &format!("Scarlet & Violet Pack {i:02}"), 449, "English", "Booster Pack", "TCG Republic"))
            .collect()
    }
}

/// The three names used to check case-insensitive search
pub struct NameSearchSample;

impl CatalogFixture for NameSearchSample {
    fn products() -> Vec<Product> {
        vec![
            product(1, "Booster Box", 15999, "English", "Booster Box", "TCG Republic"),
            product(2, "booster pack", 449, "English", "Booster Pack", "Bored Game Company"),
            product(3, "Elite Trainer BOX", 5499, "English", "Elite Trainer Box", "TCG Republic"),
        ]
    }
}

/// A realistic shelf: several languages, types and sellers, repeated prices,
/// an unstyled seller, one sold-out product and nothing from TCG Republic
pub struct MixedShelf;

impl CatalogFixture for MixedShelf {
    fn products() -> Vec<Product> {
        let mut products = vec![
            product(1, "Surging Sparks Booster Box", 15999, "English", "Booster Box", "Bored Game Company"),
            product(2, "Terastal Festival ex Booster Box", 7499, "Japanese", "Booster Box", "Bored Game Company"),
            product(3, "Prismatic Evolutions Elite Trainer Box", 8999, "English", "Elite Trainer Box", "PokeVolt"),
            product(4, "Stellar Crown Booster Pack", 449, "English", "Booster Pack", "Bored Game Company"),
            product(5, "Gem Pack Vol. 2", 449, "Simplified Chinese", "Booster Pack", "Bored Game Company"),
            product(6, "Paradise Dragona Booster Box", 5999, "Japanese", "Booster Box", "PokeVolt"),
            product(7, "151 Collection Box", 3999, "Korean", "Collection Box", "Bored Game Company"),
            product(8, "Twilight Masquerade 3 Pack Blister", 1499, "English", "3 Pack Blister", "Bored Game Company"),
            product(9, "Crown Zenith Precious Collector Box", 12999, "English", "Precious Collector Box", "PokeVolt"),
            product(10, "Shrouded Fable Booster Pack", 449, "English", "Booster Pack", "PokeVolt"),
            product(11, "Night Wanderer Booster Box", 5499, "Japanese", "Booster Box", "Bored Game Company"),
            product(12, "Obsidian Flames Booster Display Box (36 Packs)", 14999, "English", "Booster Display Box (36 Packs)", "Bored Game Company"),
            product(13, "Journey Together Elite Trainer Box", 5999, "English", "Elite Trainer Box", "PokeVolt"),
            product(14, "Battle Partners Booster Box", 6999, "Japanese", "Booster Box", "Bored Game Company"),
        ];
        products[2].in_stock = false;
        products
    }
}
