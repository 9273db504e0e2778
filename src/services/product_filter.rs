// Catalog admin product list filter
// Applies a products tab's filters, sort and page selection to a loaded catalog.

use std::cmp::Ordering;

use tracing::debug;

use crate::types::catalog::{Catalog, Product, ProductPage, ProductRow};
use crate::types::errors::FilterError;
use crate::types::tab::{Pagination, ProductFilters, ProductTabState, SortModel, SortOrder};

/// Columns the product grid can be sorted by.
pub const SORTABLE_FIELDS: &[&str] = &[
    "name",
    "price",
    "stock",
    "sku",
    "description",
    "brandName",
    "categoryName",
    "subcategoryName",
];

/// Whether a product passes every active filter.
pub fn matches(product: &Product, filters: &ProductFilters, catalog: &Catalog) -> bool {
    let needle = filters.search.trim().to_lowercase();
    if !needle.is_empty() && !product.name.to_lowercase().contains(&needle) {
        return false;
    }
    if filters.brand_id.is_some_and(|id| product.brand_id != id) {
        return false;
    }
    if let Some(super_id) = filters.supercategory_id {
        // Resolved through the product's category, not its own supercategory field.
        match catalog.category(product.category_id) {
            Some(c) if c.supercategory_id == super_id => {}
            _ => return false,
        }
    }
    if filters.category_id.is_some_and(|id| product.category_id != id) {
        return false;
    }
    if filters.subcategory_id.is_some_and(|id| product.subcategory_id != id) {
        return false;
    }
    true
}

fn to_row(product: &Product, catalog: &Catalog) -> ProductRow {
    ProductRow {
        product: product.clone(),
        brand_name: catalog
            .brand(product.brand_id)
            .map(|b| b.name.clone())
            .unwrap_or_default(),
        category_name: catalog
            .category(product.category_id)
            .map(|c| c.name.clone())
            .unwrap_or_default(),
        subcategory_name: catalog
            .subcategory(product.subcategory_id)
            .map(|s| s.name.clone())
            .unwrap_or_default(),
    }
}

fn compare(a: &ProductRow, b: &ProductRow, field: &str) -> Ordering {
    match field {
        "name" => a.product.name.cmp(&b.product.name),
        "price" => a.product.price.total_cmp(&b.product.price),
        "stock" => a.product.stock.cmp(&b.product.stock),
        "sku" => a.product.sku.cmp(&b.product.sku),
        "description" => a.product.description.cmp(&b.product.description),
        "brandName" => a.brand_name.cmp(&b.brand_name),
        "categoryName" => a.category_name.cmp(&b.category_name),
        "subcategoryName" => a.subcategory_name.cmp(&b.subcategory_name),
        _ => Ordering::Equal,
    }
}

/// Sort rows in place. The sort is stable, so equal keys keep catalog order.
pub fn sort_rows(rows: &mut [ProductRow], sort: &SortModel) -> Result<(), FilterError> {
    if !SORTABLE_FIELDS.contains(&sort.field.as_str()) {
        return Err(FilterError::InvalidSortField(sort.field.clone()));
    }
    rows.sort_by(|a, b| {
        let ord = compare(a, b, &sort.field);
        match sort.order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });
    Ok(())
}

/// Filter, join, sort and page the catalog's products.
pub fn filter_products(
    catalog: &Catalog,
    filters: &ProductFilters,
    sort: Option<&SortModel>,
    pagination: Pagination,
) -> Result<ProductPage, FilterError> {
    if pagination.page_size == 0 {
        return Err(FilterError::InvalidPageSize(0));
    }

    let mut rows: Vec<ProductRow> = catalog
        .products
        .iter()
        .filter(|p| matches(p, filters, catalog))
        .map(|p| to_row(p, catalog))
        .collect();

    if let Some(sort) = sort {
        sort_rows(&mut rows, sort)?;
    }

    let total = rows.len();
    let rows: Vec<ProductRow> = rows
        .into_iter()
        .skip(pagination.page.saturating_mul(pagination.page_size))
        .take(pagination.page_size)
        .collect();

    debug!(total, returned = rows.len(), page = pagination.page, "filtered products");
    Ok(ProductPage { rows, total })
}

/// Run the list query described by a products tab's saved state.
pub fn query_for_tab(catalog: &Catalog, state: &ProductTabState) -> Result<ProductPage, FilterError> {
    filter_products(catalog, &state.filters, state.sort.as_ref(), state.pagination)
}

/// Reset the brand and category selections and go back to the first page.
/// The search text and page size are kept; search has its own clear control.
pub fn clear_filters(state: &mut ProductTabState) {
    state.filters = ProductFilters {
        search: std::mem::take(&mut state.filters.search),
        ..ProductFilters::default()
    };
    state.pagination.page = 0;
}
