use super::errors::ProductError;
use super::model::Product;

/// Upper bound applied to any requested page size.
pub const MAX_PAGE_LIMIT: u32 = 100;

/// Largest price a `NUMERIC(12, 2)` column holds, in cents.
pub const MAX_PRICE_CENTS: i64 = 999_999_999_999;

/// Largest stock an `INTEGER` column holds.
pub const MAX_STOCK: u32 = i32::MAX as u32;

/// A price in cents, between 0 and `MAX_PRICE_CENTS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Price(i64);

impl Price {
    pub fn from_cents(cents: i64) -> Result<Self, ProductError> {
        if !(0..=MAX_PRICE_CENTS).contains(&cents) {
            return Err(ProductError::InvalidPrice);
        }
        Ok(Self(cents))
    }

    pub fn cents(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Catalog filters and pagination as received from the query string.
///
/// Every field is optional; an empty query matches every active product and
/// returns them all on a single page.
#[derive(Debug, Clone, Default)]
pub struct ProductQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub category: Option<String>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub search: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ProductPage {
    pub items: Vec<Product>,
    /// Number of products matching the filters, across all pages.
    pub total: u64,
    pub page: u32,
    pub limit: Option<u32>,
}

impl ProductQuery {
    pub fn validate(&self) -> Result<(), ProductError> {
        if self.page == Some(0) || self.limit == Some(0) {
            return Err(ProductError::InvalidPagination);
        }
        if let (Some(min), Some(max)) = (self.min_price, self.max_price)
            && min > max
        {
            return Err(ProductError::InvalidPriceRange);
        }
        Ok(())
    }

    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category
            && !product.category.eq_ignore_ascii_case(category.trim())
        {
            return false;
        }
        if let Some(min) = self.min_price
            && product.price.cents() < min
        {
            return false;
        }
        if let Some(max) = self.max_price
            && product.price.cents() > max
        {
            return false;
        }
        if let Some(search) = &self.search {
            let needle = search.trim().to_lowercase();
            if !needle.is_empty()
                && !product.name.to_lowercase().contains(&needle)
                && !product.description.to_lowercase().contains(&needle)
            {
                return false;
            }
        }
        true
    }

    /// Filters `products` and cuts out the requested page. Input order is kept.
    pub fn apply(&self, products: Vec<Product>) -> ProductPage {
        let matching: Vec<Product> = products.into_iter().filter(|p| self.matches(p)).collect();
        let total = matching.len() as u64;
        let page = self.page.unwrap_or(1).max(1);

        let Some(limit) = self.limit.map(|l| l.clamp(1, MAX_PAGE_LIMIT)) else {
            return ProductPage {
                items: matching,
                total,
                page: 1,
                limit: None,
            };
        };

        let offset = (page as usize - 1).saturating_mul(limit as usize);
        let items = matching
            .into_iter()
            .skip(offset)
            .take(limit as usize)
            .collect();

        ProductPage {
            items,
            total,
            page,
            limit: Some(limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::NewProductProps;
    use proptest::prelude::*;

    fn product(name: &str, category: &str, price_cents: i64) -> Product {
        Product::new(NewProductProps {
            name: name.to_string(),
            description: format!("{name} description"),
            price_cents,
            image_url: None,
            images: vec![],
            category: category.to_string(),
            stock: 1,
            features: vec![],
            is_active: true,
        })
        .unwrap()
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("Desk Lamp", "home", 2_500),
            product("Espresso Machine", "kitchen", 24_900),
            product("Chef Knife", "kitchen", 8_000),
            product("Floor Lamp", "home", 6_000),
        ]
    }

    #[test]
    fn should_format_price_with_two_decimals() {
        assert_eq!(Price::from_cents(1_905).unwrap().to_string(), "19.05");
    }

    #[test]
    fn should_accept_largest_storable_price() {
        assert!(Price::from_cents(MAX_PRICE_CENTS).is_ok());
    }

    #[test]
    fn should_reject_price_above_storable_range() {
        assert!(matches!(
            Price::from_cents(MAX_PRICE_CENTS + 1).unwrap_err(),
            ProductError::InvalidPrice
        ));
    }

    #[test]
    fn should_return_everything_when_query_empty() {
        let page = ProductQuery::default().apply(catalog());

        assert_eq!(page.items.len(), 4);
        assert_eq!(page.total, 4);
        assert_eq!(page.limit, None);
    }

    #[test]
    fn should_filter_by_category_ignoring_case() {
        let query = ProductQuery {
            category: Some("Kitchen".to_string()),
            ..Default::default()
        };

        let page = query.apply(catalog());

        assert_eq!(page.total, 2);
        assert!(page.items.iter().all(|p| p.category == "kitchen"));
    }

    #[test]
    fn should_filter_by_inclusive_price_range() {
        let query = ProductQuery {
            min_price: Some(2_500),
            max_price: Some(8_000),
            ..Default::default()
        };

        let names: Vec<String> = query.apply(catalog()).items.into_iter().map(|p| p.name).collect();

        assert_eq!(names, vec!["Desk Lamp", "Chef Knife", "Floor Lamp"]);
    }

    #[test]
    fn should_search_name_and_description() {
        let query = ProductQuery {
            search: Some("LAMP".to_string()),
            ..Default::default()
        };

        assert_eq!(query.apply(catalog()).total, 2);
    }

    #[test]
    fn should_return_requested_page() {
        let query = ProductQuery {
            page: Some(2),
            limit: Some(3),
            ..Default::default()
        };

        let page = query.apply(catalog());

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].name, "Floor Lamp");
        assert_eq!(page.total, 4);
    }

    #[test]
    fn should_cap_limit() {
        let query = ProductQuery {
            limit: Some(10_000),
            ..Default::default()
        };

        assert_eq!(query.apply(catalog()).limit, Some(MAX_PAGE_LIMIT));
    }

    #[test]
    fn should_reject_inverted_price_range() {
        let query = ProductQuery {
            min_price: Some(500),
            max_price: Some(100),
            ..Default::default()
        };

        assert!(matches!(
            query.validate().unwrap_err(),
            ProductError::InvalidPriceRange
        ));
    }

    #[test]
    fn should_reject_zero_page() {
        let query = ProductQuery {
            page: Some(0),
            ..Default::default()
        };

        assert!(matches!(
            query.validate().unwrap_err(),
            ProductError::InvalidPagination
        ));
    }

    proptest! {
        #[test]
        fn page_never_exceeds_limit_and_total_counts_all(
            count in 0usize..60,
            page in 1u32..10,
            limit in 1u32..25,
        ) {
            let products: Vec<Product> = (0..count)
                .map(|i| product(&format!("Item {i}"), "misc", 100))
                .collect();
            let query = ProductQuery { page: Some(page), limit: Some(limit), ..Default::default() };

            let result = query.apply(products);

            prop_assert!(result.items.len() <= limit as usize);
            prop_assert_eq!(result.total, count as u64);
        }
    }
}
