// src/search/catalog.rs

use crate::domain::{ProductResult, ProductSource, SearchIntent, SourceError};

/// Substring that switches the catalog to its branded naming template.
pub const BRAND_MARKER: &str = "iPhone";

struct Template {
    branded_name: &'static str,
    generic_suffix: &'static str,
    price: &'static str,
    original_price: &'static str,
    rating: f32,
    review_count: u32,
    retailer: &'static str,
    image_url: &'static str,
    deal_badge: &'static str,
    key_features: [&'static str; 3],
    pros: [&'static str; 3],
    cons: [&'static str; 2],
}

const TEMPLATES: [Template; 3] = [
    Template {
        branded_name: "iPhone 16 Pro 128GB Black",
        generic_suffix: "Premium Model",
        price: "$999",
        original_price: "$1,199",
        rating: 4.8,
        review_count: 2847,
        retailer: "Apple Store",
        image_url: "https://images.pexels.com/photos/788946/pexels-photo-788946.jpeg?auto=compress&cs=tinysrgb&w=400",
        deal_badge: "17% OFF",
        key_features: ["Latest A18 Pro chip", "48MP camera system", "Titanium design"],
        pros: ["Exceptional performance", "Outstanding camera quality", "Premium build"],
        cons: ["Expensive", "No charger included"],
    },
    Template {
        branded_name: "iPhone 16 128GB Blue",
        generic_suffix: "Standard Model",
        price: "$799",
        original_price: "$899",
        rating: 4.6,
        review_count: 1923,
        retailer: "Best Buy",
        image_url: "https://images.pexels.com/photos/1649771/pexels-photo-1649771.jpeg?auto=compress&cs=tinysrgb&w=400",
        deal_badge: "11% OFF",
        key_features: ["A18 chip", "Dual camera system", "All-day battery"],
        pros: ["Great value", "Reliable performance", "Good camera"],
        cons: ["Limited storage options", "Plastic back"],
    },
    Template {
        branded_name: "iPhone 15 Pro 256GB Natural",
        generic_suffix: "Previous Gen",
        price: "$899",
        original_price: "$1,099",
        rating: 4.7,
        review_count: 3456,
        retailer: "Amazon",
        image_url: "https://images.pexels.com/photos/1927259/pexels-photo-1927259.jpeg?auto=compress&cs=tinysrgb&w=400",
        deal_badge: "18% OFF",
        key_features: ["A17 Pro chip", "Pro camera system", "Titanium build"],
        pros: ["Proven performance", "Excellent cameras", "More storage"],
        cons: ["Previous generation", "Still expensive"],
    },
];

/// Fabricates three results from the query text. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockCatalog;

impl MockCatalog {
    pub fn new() -> Self {
        Self
    }
}

impl ProductSource for MockCatalog {
    fn search(&self, intent: &SearchIntent) -> Result<Vec<ProductResult>, SourceError> {
        let query = intent.query.trim();
        let branded = query.contains(BRAND_MARKER);

        let results = TEMPLATES
            .iter()
            .enumerate()
            .map(|(i, t)| ProductResult {
                id: (i + 1).to_string(),
                name: if branded {
                    t.branded_name.to_string()
                } else {
                    format!("{query} - {}", t.generic_suffix)
                },
                price: t.price.to_string(),
                original_price: Some(t.original_price.to_string()),
                rating: t.rating,
                review_count: t.review_count,
                retailer: t.retailer.to_string(),
                image_url: t.image_url.to_string(),
                deal_badge: Some(t.deal_badge.to_string()),
                key_features: to_strings(&t.key_features),
                pros: to_strings(&t.pros),
                cons: to_strings(&t.cons),
            })
            .collect();

        Ok(results)
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
