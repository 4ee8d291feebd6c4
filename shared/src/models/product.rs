//! Product Model

use super::Price;
use serde::{Deserialize, Serialize};

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub icon: String,
    pub price: Price,
    /// Category reference (Category.id)
    pub category: String,
    #[serde(default)]
    pub featured: bool,
    pub in_stock: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    /// Average review score, 0.0 - 5.0
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
}

impl Product {
    /// Build a product from a create payload and an assigned id
    pub fn from_create(id: u64, data: ProductCreate) -> Self {
        Self {
            id,
            title: data.title,
            description: data.description,
            image: data.image.unwrap_or_default(),
            icon: data.icon.unwrap_or_default(),
            price: data.price,
            category: data.category,
            featured: data.featured.unwrap_or(false),
            in_stock: data.in_stock.unwrap_or(true),
            tags: data.tags.unwrap_or_default(),
            features: data.features.unwrap_or_default(),
            rating: data.rating,
            brand: data.brand,
        }
    }

    /// Shallow merge: every field present in `data` replaces the stored one.
    /// The id is never touched.
    pub fn apply_update(&mut self, data: ProductUpdate) {
        if let Some(v) = data.title {
            self.title = v;
        }
        if let Some(v) = data.description {
            self.description = v;
        }
        if let Some(v) = data.image {
            self.image = v;
        }
        if let Some(v) = data.icon {
            self.icon = v;
        }
        if let Some(v) = data.price {
            self.price = v;
        }
        if let Some(v) = data.category {
            self.category = v;
        }
        if let Some(v) = data.featured {
            self.featured = v;
        }
        if let Some(v) = data.in_stock {
            self.in_stock = v;
        }
        if let Some(v) = data.tags {
            self.tags = v;
        }
        if let Some(v) = data.features {
            self.features = v;
        }
        if data.rating.is_some() {
            self.rating = data.rating;
        }
        if data.brand.is_some() {
            self.brand = data.brand;
        }
    }

    /// Rating used for sorting and rating filters; unrated products count as 0
    pub fn rating_or_zero(&self) -> f32 {
        self.rating.unwrap_or(0.0)
    }
}

/// Create product payload (Product minus id)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub icon: Option<String>,
    pub price: Price,
    pub category: String,
    pub featured: Option<bool>,
    pub in_stock: Option<bool>,
    pub tags: Option<Vec<String>>,
    pub features: Option<Vec<String>>,
    pub rating: Option<f32>,
    pub brand: Option<String>,
}

/// Update product payload (partial)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
}
