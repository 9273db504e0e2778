use serde::{Deserialize, Serialize};

/// An open workspace tab, one per navigation target.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tab {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub state: Option<TabState>,
}

/// Per-tab UI state, keyed by the kind of view that owns the tab.
///
/// The tab manager never looks inside; feature views read their own variant
/// back on mount and ignore anything else.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum TabState {
    Home,
    Products(ProductTabState),
    ProductForm(ProductDraft),
    Custom(serde_json::Value),
}

impl TabState {
    pub fn as_products(&self) -> Option<&ProductTabState> {
        match self {
            TabState::Products(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_product_form(&self) -> Option<&ProductDraft> {
        match self {
            TabState::ProductForm(d) => Some(d),
            _ => None,
        }
    }
}

/// Restorable state of the product list view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ProductTabState {
    pub filters: ProductFilters,
    pub pagination: Pagination,
    pub sort: Option<SortModel>,
}

/// Filter selections of the product list. Empty / `None` means "no filter".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ProductFilters {
    pub search: String,
    pub brand_id: Option<u32>,
    pub supercategory_id: Option<u32>,
    pub category_id: Option<u32>,
    pub subcategory_id: Option<u32>,
}

impl ProductFilters {
    /// Selecting a supercategory invalidates the narrower selections.
    pub fn select_supercategory(&mut self, id: Option<u32>) {
        self.supercategory_id = id;
        self.category_id = None;
        self.subcategory_id = None;
    }

    pub fn select_category(&mut self, id: Option<u32>) {
        self.category_id = id;
        self.subcategory_id = None;
    }

    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty()
            && self.brand_id.is_none()
            && self.supercategory_id.is_none()
            && self.category_id.is_none()
            && self.subcategory_id.is_none()
    }
}

/// Zero-based page selection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SortModel {
    pub field: String,
    #[serde(default)]
    pub order: SortOrder,
}

/// Product create/edit form values. Ids are kept as strings, `""` meaning unselected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
    pub stock: i64,
    pub brand_id: String,
    pub supercategory_id: String,
    pub category_id: String,
    pub subcategory_id: String,
}
