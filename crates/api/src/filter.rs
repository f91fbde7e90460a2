//! Product listing filters.
//!
//! Filters narrow a product listing without reordering it. Every criterion
//! that is present must hold (AND); absent criteria match everything.

use catalog_core::Product;

use crate::store::AverageRatings;

/// Optional criteria for product listings.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ProductFilter {
    /// Keep only products whose `on_sale` flag equals this value.
    pub on_sale: Option<bool>,
    /// Keep only products whose mean review rating is at least this value.
    /// Products without reviews have no mean and never match.
    pub avg_rating: Option<i32>,
}

impl ProductFilter {
    /// Whether no criterion is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.on_sale.is_none() && self.avg_rating.is_none()
    }

    /// Whether the filter needs review averages to be evaluated.
    #[must_use]
    pub const fn needs_ratings(&self) -> bool {
        self.avg_rating.is_some()
    }

    /// Check one product against every present criterion.
    #[must_use]
    pub fn matches(&self, product: &Product, ratings: &AverageRatings) -> bool {
        if let Some(on_sale) = self.on_sale
            && product.on_sale != on_sale
        {
            return false;
        }

        if let Some(threshold) = self.avg_rating {
            return ratings
                .get(&product.id)
                .is_some_and(|avg| *avg >= f64::from(threshold));
        }

        true
    }
}

/// Apply an optional filter to a listing, preserving order.
///
/// With no filter, or an empty one, the listing is returned unchanged.
#[must_use]
pub fn apply(
    products: Vec<Product>,
    filter: Option<&ProductFilter>,
    ratings: &AverageRatings,
) -> Vec<Product> {
    match filter {
        Some(filter) if !filter.is_empty() => products
            .into_iter()
            .filter(|product| filter.matches(product, ratings))
            .collect(),
        _ => products,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::store::Store;

    use super::*;

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    fn seeded() -> (Vec<Product>, AverageRatings) {
        let store = Store::seeded();
        let products = store.products().list().unwrap();
        let ratings = store.products().average_ratings().unwrap();
        (products, ratings)
    }

    #[test]
    fn test_no_filter_is_identity() {
        let (products, ratings) = seeded();
        let filtered = apply(products.clone(), None, &ratings);
        assert_eq!(filtered, products);
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let (products, ratings) = seeded();
        let filtered = apply(products.clone(), Some(&ProductFilter::default()), &ratings);
        assert_eq!(filtered, products);
    }

    #[test]
    fn test_on_sale_true() {
        let (products, ratings) = seeded();
        let filter = ProductFilter {
            on_sale: Some(true),
            ..ProductFilter::default()
        };
        let filtered = apply(products, Some(&filter), &ratings);
        assert_eq!(
            names(&filtered),
            ["Spoon", "Fertilizer", "Baseball Gloves", "Soccer Ball"]
        );
    }

    #[test]
    fn test_on_sale_false() {
        let (products, ratings) = seeded();
        let filter = ProductFilter {
            on_sale: Some(false),
            ..ProductFilter::default()
        };
        let filtered = apply(products, Some(&filter), &ratings);
        assert!(filtered.iter().all(|p| !p.on_sale));
        assert_eq!(filtered.len(), 5);
    }

    #[test]
    fn test_avg_rating_threshold_is_inclusive() {
        let (products, ratings) = seeded();
        let filter = ProductFilter {
            avg_rating: Some(4),
            ..ProductFilter::default()
        };
        let filtered = apply(products, Some(&filter), &ratings);
        assert_eq!(
            names(&filtered),
            ["Spoon", "Fertilizer", "Golf Clubs", "Soccer Ball"]
        );
    }

    #[test]
    fn test_unreviewed_product_never_matches_rating() {
        let (products, ratings) = seeded();
        let filter = ProductFilter {
            avg_rating: Some(0),
            ..ProductFilter::default()
        };
        let filtered = apply(products, Some(&filter), &ratings);
        assert_eq!(filtered.len(), 8);
        assert!(!names(&filtered).contains(&"Basketball"));
    }

    #[test]
    fn test_criteria_compose_with_and() {
        let (products, ratings) = seeded();
        let filter = ProductFilter {
            on_sale: Some(true),
            avg_rating: Some(4),
        };
        let filtered = apply(products, Some(&filter), &ratings);
        assert_eq!(names(&filtered), ["Spoon", "Fertilizer", "Soccer Ball"]);
    }
}
