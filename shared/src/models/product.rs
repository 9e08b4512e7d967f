//! Product Model

use serde::{Deserialize, Serialize};

/// Product information embedded in order line items
///
/// Snapshot of the product at order time. Every field is optional on the
/// wire; missing values get display-safe defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductInfo {
    #[serde(default)]
    pub id: String,
    #[serde(default = "ProductInfo::unknown_name")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    #[serde(default)]
    pub image_urls: Vec<String>,
}

impl ProductInfo {
    fn unknown_name() -> String {
        "Unknown product".to_string()
    }

    /// First image URL, if any
    pub fn primary_image(&self) -> Option<&str> {
        self.image_urls.first().map(String::as_str)
    }
}

// An entirely absent snapshot must render the same as a nameless one.
impl Default for ProductInfo {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: Self::unknown_name(),
            description: None,
            category_name: None,
            image_urls: Vec::new(),
        }
    }
}


/// Live product as referenced by cart items
///
/// Price, discount and stock are read live until checkout converts the cart
/// into immutable order details.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Current unit price
    pub price: f64,
    /// Current discount percentage
    #[serde(default)]
    pub discount: f64,
    /// Units in stock
    pub quantity: i32,
    #[serde(default)]
    pub image_urls: Vec<String>,
}

impl Product {
    /// Effective unit price after discount
    pub fn effective_price(&self) -> f64 {
        self.price * (1.0 - self.discount / 100.0)
    }
}
