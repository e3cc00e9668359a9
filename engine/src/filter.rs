//! Composable query filter.
//!
//! [`FilterCriteria`] is a set of optional predicates. Each present
//! predicate narrows the result independently and all of them are combined
//! with AND, so the order they are checked in never changes the outcome.
//! A record missing the field a present predicate looks at does not match.

use crate::{error::Result, Error, Record};

/// Field compared against [`FilterCriteria::category`].
pub const CATEGORY_FIELD: &str = "category";
/// Field compared against the price bounds.
pub const PRICE_FIELD: &str = "price";
/// Field searched by [`FilterCriteria::name`].
pub const NAME_FIELD: &str = "name";

/// Optional, independently specifiable predicates over a record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Exact match on `category`
    pub category: Option<String>,
    /// Inclusive lower bound on `price`
    pub min_price: Option<f64>,
    /// Inclusive upper bound on `price`
    pub max_price: Option<f64>,
    /// Case-insensitive substring of `name`
    pub name: Option<String>,
}

impl FilterCriteria {
    /// Criteria with no constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build criteria from raw query-string values.
    ///
    /// Empty values count as absent. Price bounds must parse as finite
    /// numbers, otherwise [`Error::InvalidFilter`] is returned.
    pub fn from_params(
        category: Option<&str>,
        min_price: Option<&str>,
        max_price: Option<&str>,
        name: Option<&str>,
    ) -> Result<Self> {
        Ok(Self {
            category: non_empty(category).map(str::to_string),
            min_price: parse_bound("min_price", min_price)?,
            max_price: parse_bound("max_price", max_price)?,
            name: non_empty(name).map(str::to_string),
        })
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_min_price(mut self, min_price: f64) -> Self {
        self.min_price = Some(min_price);
        self
    }

    pub fn with_max_price(mut self, max_price: f64) -> Self {
        self.max_price = Some(max_price);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// True when no predicate is present.
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.name.is_none()
    }

    /// Union of two criteria sets.
    ///
    /// Price bounds set on both sides keep the tighter one. For the string
    /// predicates `other` wins when both sides set them.
    pub fn merge(self, other: FilterCriteria) -> Self {
        Self {
            category: other.category.or(self.category),
            min_price: tighter(self.min_price, other.min_price, f64::max),
            max_price: tighter(self.max_price, other.max_price, f64::min),
            name: other.name.or(self.name),
        }
    }

    /// Check a single record against every present predicate.
    pub fn matches(&self, record: &Record) -> bool {
        let needle = self.name.as_deref().map(str::to_lowercase);
        self.matches_with(record, needle.as_deref())
    }

    fn matches_with(&self, record: &Record, name_needle: Option<&str>) -> bool {
        if let Some(category) = &self.category {
            if record.get_str(CATEGORY_FIELD) != Some(category.as_str()) {
                return false;
            }
        }

        if self.min_price.is_some() || self.max_price.is_some() {
            let Some(price) = record.get_f64(PRICE_FIELD) else {
                return false;
            };
            if self.min_price.is_some_and(|min| price < min) {
                return false;
            }
            if self.max_price.is_some_and(|max| price > max) {
                return false;
            }
        }

        if let Some(needle) = name_needle {
            match record.get_str(NAME_FIELD) {
                Some(name) if name.to_lowercase().contains(needle) => {}
                _ => return false,
            }
        }

        true
    }
}

/// Narrow `records` to those satisfying every predicate in `criteria`.
///
/// Order is preserved and the input is left untouched. With no predicates the
/// result equals the input.
pub fn apply(records: &[Record], criteria: &FilterCriteria) -> Vec<Record> {
    if criteria.is_empty() {
        return records.to_vec();
    }

    let needle = criteria.name.as_deref().map(str::to_lowercase);
    records
        .iter()
        .filter(|r| criteria.matches_with(r, needle.as_deref()))
        .cloned()
        .collect()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn parse_bound(param: &str, raw: Option<&str>) -> Result<Option<f64>> {
    let Some(raw) = non_empty(raw) else {
        return Ok(None);
    };

    let invalid = || Error::InvalidFilter {
        param: param.to_string(),
        value: raw.to_string(),
    };

    let value: f64 = raw.trim().parse().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }

    Ok(Some(value))
}

fn tighter(a: Option<f64>, b: Option<f64>, pick: fn(f64, f64) -> f64) -> Option<f64> {
    match (a, b) {
        (Some(a), Some(b)) => Some(pick(a, b)),
        (a, b) => a.or(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn names(records: &[Record]) -> Vec<&str> {
        records.iter().filter_map(|r| r.get_str(NAME_FIELD)).collect()
    }

    #[test]
    fn empty_criteria_is_identity() {
        let products = catalog::products();
        let result = apply(&products, &FilterCriteria::new());
        assert_eq!(result, products);
    }

    #[test]
    fn filter_by_category() {
        let products = catalog::products();

        let result = apply(&products, &FilterCriteria::new().with_category("electronics"));
        assert_eq!(
            names(&result),
            vec!["Laptop Pro", "Smartphone X", "Tablet Mini", "Wireless Headphones"]
        );

        let result = apply(&products, &FilterCriteria::new().with_category("furniture"));
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn category_is_exact() {
        let products = catalog::products();
        let result = apply(&products, &FilterCriteria::new().with_category("Electronics"));
        assert!(result.is_empty());
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let products = catalog::products();

        let criteria = FilterCriteria::new()
            .with_min_price(500.0)
            .with_max_price(1000.0);
        assert_eq!(names(&apply(&products, &criteria)), vec!["Laptop Pro", "Smartphone X"]);

        let exact = FilterCriteria::new()
            .with_min_price(249.99)
            .with_max_price(249.99);
        assert_eq!(names(&apply(&products, &exact)), vec!["Office Desk"]);
    }

    #[test]
    fn price_ranges() {
        let products = catalog::products();

        assert_eq!(apply(&products, &FilterCriteria::new().with_min_price(500.0)).len(), 2);
        assert_eq!(apply(&products, &FilterCriteria::new().with_max_price(200.0)).len(), 4);

        let between = FilterCriteria::new()
            .with_min_price(200.0)
            .with_max_price(700.0);
        assert_eq!(apply(&products, &between).len(), 3);

        assert!(apply(&products, &FilterCriteria::new().with_min_price(2000.0)).is_empty());
    }

    #[test]
    fn name_is_case_insensitive_substring() {
        let products = catalog::products();

        let result = apply(&products, &FilterCriteria::new().with_name("pro"));
        assert_eq!(names(&result), vec!["Laptop Pro", "Coffee Maker Pro"]);

        let result = apply(&products, &FilterCriteria::new().with_name("PRO"));
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn combined_filters() {
        let products = catalog::products();

        let criteria = FilterCriteria::new()
            .with_category("electronics")
            .with_min_price(500.0);
        assert_eq!(apply(&products, &criteria).len(), 2);

        let criteria = FilterCriteria::new().with_name("Pro").with_max_price(100.0);
        assert_eq!(names(&apply(&products, &criteria)), vec!["Coffee Maker Pro"]);
    }

    #[test]
    fn missing_field_never_matches() {
        let record = Record::new(1, serde_json::Map::new());

        assert!(FilterCriteria::new().matches(&record));
        assert!(!FilterCriteria::new().with_category("x").matches(&record));
        assert!(!FilterCriteria::new().with_min_price(0.0).matches(&record));
        assert!(!FilterCriteria::new().with_name("").matches(&record));
    }

    #[test]
    fn apply_does_not_mutate_input() {
        let products = catalog::products();
        let before = products.clone();

        let _ = apply(&products, &FilterCriteria::new().with_category("furniture"));
        assert_eq!(products, before);
    }

    #[test]
    fn from_params_parses() {
        let criteria =
            FilterCriteria::from_params(Some("electronics"), Some("500"), Some(" 1000.5 "), Some("pro"))
                .unwrap();

        assert_eq!(criteria.category.as_deref(), Some("electronics"));
        assert_eq!(criteria.min_price, Some(500.0));
        assert_eq!(criteria.max_price, Some(1000.5));
        assert_eq!(criteria.name.as_deref(), Some("pro"));
    }

    #[test]
    fn from_params_treats_empty_as_absent() {
        let criteria = FilterCriteria::from_params(Some(""), Some(""), None, Some("")).unwrap();
        assert!(criteria.is_empty());
    }

    #[test]
    fn from_params_rejects_non_numeric_bounds() {
        let result = FilterCriteria::from_params(None, Some("cheap"), None, None);
        assert!(matches!(
            result,
            Err(Error::InvalidFilter { ref param, .. }) if param == "min_price"
        ));

        for raw in ["NaN", "inf", "-infinity", "1e999"] {
            let result = FilterCriteria::from_params(None, None, Some(raw), None);
            assert!(result.is_err(), "accepted {raw}");
        }
    }

    #[test]
    fn merge_keeps_tighter_bounds() {
        let a = FilterCriteria::new().with_min_price(100.0).with_max_price(900.0);
        let b = FilterCriteria::new().with_min_price(200.0).with_max_price(1000.0);

        let merged = a.merge(b);
        assert_eq!(merged.min_price, Some(200.0));
        assert_eq!(merged.max_price, Some(900.0));
    }

    #[test]
    fn nested_apply_equals_merged_apply() {
        let products = catalog::products();
        let a = FilterCriteria::new().with_category("electronics");
        let b = FilterCriteria::new().with_max_price(700.0);

        let nested = apply(&apply(&products, &a), &b);
        let merged = apply(&products, &a.merge(b));
        assert_eq!(nested, merged);
        assert_eq!(names(&nested), vec!["Smartphone X", "Tablet Mini", "Wireless Headphones"]);
    }
}
