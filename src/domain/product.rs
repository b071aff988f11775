// src/domain/product.rs

use crate::domain::search::SearchIntent;
use serde::Serialize;
use thiserror::Error;

/// A single item shown in the result panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResult {
    pub id: String,
    pub name: String,
    pub price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<String>,
    /// 0.0 to 5.0
    pub rating: f32,
    pub review_count: u32,
    pub retailer: String,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deal_badge: Option<String>,
    pub key_features: Vec<String>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

impl ProductResult {
    /// Number of filled stars in a five-star row (whole stars only).
    pub fn filled_stars(&self) -> usize {
        self.rating.clamp(0.0, 5.0).floor() as usize
    }

    /// Review count with thousands separators, e.g. `2,847`.
    pub fn review_count_display(&self) -> String {
        group_thousands(self.review_count)
    }
}

pub fn group_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("product source failed: {0}")]
pub struct SourceError(pub String);

/// Anything that can turn a search intent into product results.
///
/// The mock catalog is the only implementation; a real backend slots in here
/// without the views or the session state noticing.
pub trait ProductSource: Send + Sync {
    fn search(&self, intent: &SearchIntent) -> Result<Vec<ProductResult>, SourceError>;
}
