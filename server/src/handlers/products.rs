//! Product handlers - catalog lookup and filtering.

use crate::error::Result;
use serde_json::Value;
use shelf_engine::{Error, FilterCriteria, Record, RecordId, SharedStore};

/// Query parameters for product filtering.
///
/// Values are kept as raw strings so a malformed price bound is reported as
/// a filter error rather than a generic query rejection.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    pub category: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub name: Option<String>,
}

impl ProductQuery {
    /// Collect the filter parameters from decoded query pairs.
    ///
    /// The first occurrence of a repeated parameter wins; unrelated
    /// parameters are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "category" => &mut query.category,
                "min_price" => &mut query.min_price,
                "max_price" => &mut query.max_price,
                "name" => &mut query.name,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        query
    }

    /// Turn raw parameters into filter criteria.
    pub fn criteria(&self) -> Result<FilterCriteria> {
        Ok(FilterCriteria::from_params(
            self.category.as_deref(),
            self.min_price.as_deref(),
            self.max_price.as_deref(),
            self.name.as_deref(),
        )?)
    }
}

/// Return the products matching every supplied filter.
///
/// No parameters returns the whole catalog; no matches is an empty list.
pub fn handle_filter_products(products: &SharedStore, query: &ProductQuery) -> Result<Vec<Record>> {
    let criteria = query.criteria()?;
    let matched = products.filter(&criteria)?;

    tracing::debug!(?criteria, matched = matched.len(), "Filtered products");

    Ok(matched)
}

/// Fetch a single product.
pub fn handle_get_product(products: &SharedStore, id: RecordId) -> Result<Record> {
    products
        .find(id)?
        .ok_or_else(|| Error::RecordNotFound(id).into())
}

/// Add a product to the catalog.
pub fn handle_create_product(products: &SharedStore, payload: Value) -> Result<Record> {
    let product = products.create(payload)?;
    tracing::info!(product_id = product.id, "Product created");
    Ok(product)
}

/// Remove a product from the catalog.
pub fn handle_delete_product(products: &SharedStore, id: RecordId) -> Result<Record> {
    let product = products.delete(id)?;
    tracing::info!(product_id = id, "Product deleted");
    Ok(product)
}
