//! Product filter/sort engine
//!
//! The single implementation used by the HTTP route and by the in-process
//! mock client, so both paths agree on case rules, sort order and tie-breaks.
//!
//! Pipeline: category → search → price range → ratings → brands → sort.
//! The input slice is never mutated; matching products are cloned into the
//! returned page.

use crate::models::Product;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Category value that disables category filtering
pub const ALL_CATEGORIES: &str = "all";

/// Sort order for a product listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    /// Featured products first
    #[default]
    Featured,
    /// Ascending by price
    PriceLow,
    /// Descending by price
    PriceHigh,
    /// Descending by id
    Newest,
    /// Descending by rating, unrated counts as 0
    Rating,
}

impl SortKey {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Newest => "newest",
            Self::Rating => "rating",
        }
    }

    /// Unknown keys fall back to [`SortKey::Featured`]
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "price-low" => Self::PriceLow,
            "price-high" => Self::PriceHigh,
            "newest" => Self::Newest,
            "rating" => Self::Rating,
            _ => Self::Featured,
        }
    }

    fn compare(&self, a: &Product, b: &Product) -> std::cmp::Ordering {
        match self {
            Self::PriceLow => a.price.cmp(&b.price),
            Self::PriceHigh => b.price.cmp(&a.price),
            Self::Newest => b.id.cmp(&a.id),
            Self::Rating => b.rating_or_zero().total_cmp(&a.rating_or_zero()),
            Self::Featured => b.featured.cmp(&a.featured),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SortKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SortKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse_lenient(&raw))
    }
}

/// Inclusive price window expressed in thousands of rupees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, rupees: u64) -> bool {
        let value = rupees as f64;
        value >= self.min * 1000.0 && value <= self.max * 1000.0
    }
}

/// Raised when a `"min,max"` string does not hold two finite numbers
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("priceRange must be two numbers separated by a comma, got {0:?}")]
pub struct InvalidPriceRange(pub String);

impl FromStr for PriceRange {
    type Err = InvalidPriceRange;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || InvalidPriceRange(s.to_string());
        let (min, max) = s.split_once(',').ok_or_else(err)?;
        let min: f64 = min.trim().parse().map_err(|_| err())?;
        let max: f64 = max.trim().parse().map_err(|_| err())?;
        if !min.is_finite() || !max.is_finite() {
            return Err(err());
        }
        Ok(Self { min, max })
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.min, self.max)
    }
}

/// Filter criteria for a product listing. Every axis is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<PriceRange>,
    /// Selected star buckets; a product passes when its rating reaches the
    /// smallest selected bucket
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ratings: Vec<u8>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub brands: Vec<String>,
    #[serde(default)]
    pub sort_by: SortKey,
}

impl ProductFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_price_range(mut self, min: f64, max: f64) -> Self {
        self.price_range = Some(PriceRange::new(min, max));
        self
    }

    pub fn with_ratings(mut self, ratings: impl IntoIterator<Item = u8>) -> Self {
        self.ratings = ratings.into_iter().collect();
        self
    }

    pub fn with_brands<S: Into<String>>(mut self, brands: impl IntoIterator<Item = S>) -> Self {
        self.brands = brands.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_sort(mut self, sort_by: SortKey) -> Self {
        self.sort_by = sort_by;
        self
    }

    /// Canonical form used for matching and as the cache key.
    ///
    /// Category and search are lowercased but otherwise kept verbatim, since
    /// surrounding whitespace is part of the substring being matched. Empty
    /// values and the `"all"` category are dropped. Ratings (1-5) and brands
    /// are sorted and deduplicated.
    pub fn normalized(&self) -> Self {
        let category = self
            .category
            .as_deref()
            .map(str::to_lowercase)
            .filter(|c| !c.is_empty() && c != ALL_CATEGORIES);

        let search = self
            .search
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let mut ratings: Vec<u8> = self
            .ratings
            .iter()
            .copied()
            .filter(|r| (1..=5).contains(r))
            .collect();
        ratings.sort_unstable();
        ratings.dedup();

        let mut brands: Vec<String> = self
            .brands
            .iter()
            .map(|b| b.trim().to_lowercase())
            .filter(|b| !b.is_empty())
            .collect();
        brands.sort();
        brands.dedup();

        Self {
            category,
            search,
            price_range: self.price_range,
            ratings,
            brands,
            sort_by: self.sort_by,
        }
    }

    /// Stable key identifying the result set this filter selects
    pub fn cache_key(&self) -> String {
        serde_json::to_string(&self.normalized()).unwrap_or_default()
    }

    /// Query-string pairs understood by `GET /api/products`
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let f = self.normalized();
        let mut pairs = Vec::new();
        if let Some(category) = f.category {
            pairs.push(("category", category));
        }
        if let Some(search) = f.search {
            pairs.push(("search", search));
        }
        if let Some(range) = f.price_range {
            pairs.push(("priceRange", range.to_string()));
        }
        if !f.ratings.is_empty() {
            let joined: Vec<String> = f.ratings.iter().map(u8::to_string).collect();
            pairs.push(("ratings", joined.join(",")));
        }
        if !f.brands.is_empty() {
            pairs.push(("brands", f.brands.join(",")));
        }
        pairs.push(("sortBy", f.sort_by.as_str().to_string()));
        pairs
    }

    fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category
            && product.category.to_lowercase() != *category
        {
            return false;
        }

        if let Some(term) = &self.search {
            let hit = product.title.to_lowercase().contains(term.as_str())
                || product.description.to_lowercase().contains(term.as_str())
                || product
                    .tags
                    .iter()
                    .any(|tag| tag.to_lowercase().contains(term.as_str()));
            if !hit {
                return false;
            }
        }

        if let Some(range) = &self.price_range
            && !range.contains(product.price.rupees())
        {
            return false;
        }

        if let Some(min_stars) = self.ratings.first()
            && product.rating_or_zero() < f32::from(*min_stars)
        {
            return false;
        }

        if !self.brands.is_empty() {
            let Some(brand) = product.brand.as_deref() else {
                return false;
            };
            let brand = brand.to_lowercase();
            if !self.brands.iter().any(|b| *b == brand) {
                return false;
            }
        }

        true
    }
}

/// A filtered, sorted listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub total: usize,
}

impl ProductPage {
    pub fn new(products: Vec<Product>) -> Self {
        let total = products.len();
        Self { products, total }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}

/// Filter and sort `products` according to `filter`
pub fn apply(products: &[Product], filter: &ProductFilter) -> ProductPage {
    let filter = filter.normalized();
    let mut selected: Vec<Product> = products
        .iter()
        .filter(|p| filter.matches(p))
        .cloned()
        .collect();

    // sort_by is stable: equal keys keep dataset order
    selected.sort_by(|a, b| filter.sort_by.compare(a, b));

    ProductPage::new(selected)
}
