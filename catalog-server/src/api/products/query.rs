//! Listing query string

use serde::Deserialize;
use shared::catalog::{PriceRange, ProductFilter, SortKey};
use shared::error::AppError;

/// `GET /api/products` parameters. Lists are comma-separated.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ListQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    /// `"min,max"` in thousands of rupees
    pub price_range: Option<String>,
    /// e.g. `"4,5"`
    pub ratings: Option<String>,
    /// e.g. `"Dell,HP"`
    pub brands: Option<String>,
}

fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty())
}

impl ListQuery {
    pub fn into_filter(self) -> Result<ProductFilter, AppError> {
        let price_range = match self.price_range.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(raw.parse::<PriceRange>().map_err(|e| {
                AppError::validation(e.to_string()).with_detail("field", "priceRange")
            })?),
        };

        let ratings = match self.ratings.as_deref() {
            None => Vec::new(),
            Some(raw) => split_list(raw)
                .map(|r| {
                    r.parse::<u8>().map_err(|_| {
                        AppError::validation(format!("ratings must be whole numbers, got {r:?}"))
                            .with_detail("field", "ratings")
                    })
                })
                .collect::<Result<_, _>>()?,
        };

        let brands = self
            .brands
            .as_deref()
            .map(|raw| split_list(raw).map(str::to_string).collect())
            .unwrap_or_default();

        Ok(ProductFilter {
            category: self.category,
            search: self.search,
            price_range,
            ratings,
            brands,
            sort_by: self
                .sort_by
                .as_deref()
                .map(SortKey::parse_lenient)
                .unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;

    #[test]
    fn parses_every_parameter() {
        let query = ListQuery {
            category: Some("networking".into()),
            search: Some("router".into()),
            sort_by: Some("price-high".into()),
            price_range: Some("10,40".into()),
            ratings: Some("4, 5".into()),
            brands: Some("Cisco,,HP".into()),
        };
        let filter = query.into_filter().unwrap();

        assert_eq!(filter.category.as_deref(), Some("networking"));
        assert_eq!(filter.price_range, Some(PriceRange::new(10.0, 40.0)));
        assert_eq!(filter.ratings, vec![4, 5]);
        assert_eq!(filter.brands, vec!["Cisco".to_string(), "HP".to_string()]);
        assert_eq!(filter.sort_by, SortKey::PriceHigh);
    }

    #[test]
    fn empty_query_is_the_default_filter() {
        let filter = ListQuery::default().into_filter().unwrap();
        assert_eq!(filter, ProductFilter::default());
    }

    #[test]
    fn unknown_sort_falls_back_to_featured() {
        let query = ListQuery {
            sort_by: Some("popular".into()),
            ..Default::default()
        };
        assert_eq!(query.into_filter().unwrap().sort_by, SortKey::Featured);
    }

    #[test]
    fn malformed_price_range_is_rejected() {
        let query = ListQuery {
            price_range: Some("cheap".into()),
            ..Default::default()
        };
        let err = query.into_filter().unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn malformed_ratings_are_rejected() {
        let query = ListQuery {
            ratings: Some("four".into()),
            ..Default::default()
        };
        assert!(query.into_filter().is_err());
    }
}
