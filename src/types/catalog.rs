use serde::{Deserialize, Serialize};

/// A catalog product as served by the REST collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub stock: i64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub img_url: String,
    pub brand_id: u32,
    pub subcategory_id: u32,
    pub category_id: u32,
    pub supercategory_id: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Brand {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Supercategory {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: u32,
    pub name: String,
    pub supercategory_id: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Subcategory {
    pub id: u32,
    pub name: String,
    pub category_id: u32,
}

/// Everything the product views load up front.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Catalog {
    pub products: Vec<Product>,
    pub brands: Vec<Brand>,
    pub supercategories: Vec<Supercategory>,
    pub categories: Vec<Category>,
    pub subcategories: Vec<Subcategory>,
}

impl Catalog {
    pub fn brand(&self, id: u32) -> Option<&Brand> {
        self.brands.iter().find(|b| b.id == id)
    }

    pub fn category(&self, id: u32) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn subcategory(&self, id: u32) -> Option<&Subcategory> {
        self.subcategories.iter().find(|s| s.id == id)
    }

    /// Categories selectable under a supercategory.
    pub fn categories_of(&self, supercategory_id: u32) -> Vec<&Category> {
        self.categories
            .iter()
            .filter(|c| c.supercategory_id == supercategory_id)
            .collect()
    }

    /// Subcategories selectable under a category.
    pub fn subcategories_of(&self, category_id: u32) -> Vec<&Subcategory> {
        self.subcategories
            .iter()
            .filter(|s| s.category_id == category_id)
            .collect()
    }
}

/// A product list row with the joined display names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductRow {
    #[serde(flatten)]
    pub product: Product,
    pub brand_name: String,
    pub category_name: String,
    pub subcategory_name: String,
}

/// One page of filtered rows; `total` counts every row that passed the filters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductPage {
    pub rows: Vec<ProductRow>,
    pub total: usize,
}
