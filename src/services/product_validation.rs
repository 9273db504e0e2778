// Catalog admin product form validation
// Checks a product draft before it is submitted and converts it to a product.

use crate::types::catalog::{Catalog, Product};
use crate::types::errors::ValidationErrors;
use crate::types::tab::ProductDraft;

/// Field rules that need no catalog lookup.
pub fn validate(draft: &ProductDraft) -> Result<(), ValidationErrors> {
    let errors = field_errors(draft);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn field_errors(draft: &ProductDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if draft.name.trim().is_empty() {
        errors.push("name", "Name is required");
    }
    if !draft.price.is_finite() || draft.price < 0.0 {
        errors.push("price", "Price must be zero or positive");
    }
    if draft.stock < 0 {
        errors.push("stock", "Stock must be zero or positive");
    }

    let required = [
        ("brand_id", &draft.brand_id, "Brand is required"),
        ("supercategory_id", &draft.supercategory_id, "Supercategory is required"),
        ("category_id", &draft.category_id, "Category is required"),
        ("subcategory_id", &draft.subcategory_id, "Subcategory is required"),
    ];
    for (field, value, message) in required {
        if value.trim().is_empty() {
            errors.push(field, message);
        }
    }

    errors
}

fn parse_id(errors: &mut ValidationErrors, field: &'static str, value: &str) -> Option<u32> {
    if value.trim().is_empty() {
        return None;
    }
    match value.trim().parse::<u32>() {
        Ok(id) => Some(id),
        Err(_) => {
            errors.push(field, "Must be a valid id");
            None
        }
    }
}

/// Field rules plus the selection hierarchy: the category must sit under the
/// chosen supercategory and the subcategory under the chosen category.
pub fn validate_with_catalog(draft: &ProductDraft, catalog: &Catalog) -> Result<(), ValidationErrors> {
    let mut errors = field_errors(draft);

    let brand_id = parse_id(&mut errors, "brand_id", &draft.brand_id);
    let super_id = parse_id(&mut errors, "supercategory_id", &draft.supercategory_id);
    let category_id = parse_id(&mut errors, "category_id", &draft.category_id);
    let subcategory_id = parse_id(&mut errors, "subcategory_id", &draft.subcategory_id);

    if let Some(id) = brand_id {
        if catalog.brand(id).is_none() {
            errors.push("brand_id", "Unknown brand");
        }
    }
    if let Some(id) = super_id {
        if !catalog.supercategories.iter().any(|s| s.id == id) {
            errors.push("supercategory_id", "Unknown supercategory");
        }
    }
    if let Some(id) = category_id {
        match catalog.category(id) {
            None => errors.push("category_id", "Unknown category"),
            Some(c) if super_id.is_some_and(|s| c.supercategory_id != s) => {
                errors.push("category_id", "Category does not belong to the selected supercategory")
            }
            Some(_) => {}
        }
    }
    if let Some(id) = subcategory_id {
        match catalog.subcategory(id) {
            None => errors.push("subcategory_id", "Unknown subcategory"),
            Some(s) if category_id.is_some_and(|c| s.category_id != c) => {
                errors.push("subcategory_id", "Subcategory does not belong to the selected category")
            }
            Some(_) => {}
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Pre-fill a draft for editing an existing product.
///
/// A product saved without a supercategory (id 0) gets it from its category.
pub fn draft_from_product(product: &Product, catalog: &Catalog) -> ProductDraft {
    let supercategory_id = if product.supercategory_id != 0 {
        product.supercategory_id.to_string()
    } else {
        catalog
            .category(product.category_id)
            .map(|c| c.supercategory_id.to_string())
            .unwrap_or_default()
    };

    ProductDraft {
        name: product.name.clone(),
        price: product.price,
        stock: product.stock,
        brand_id: product.brand_id.to_string(),
        supercategory_id,
        category_id: product.category_id.to_string(),
        subcategory_id: product.subcategory_id.to_string(),
    }
}

/// Turn a valid draft into a product. Fields the form does not edit
/// (description, sku, image) are carried over from `base` when given.
pub fn build_product(
    draft: &ProductDraft,
    id: &str,
    base: Option<&Product>,
) -> Result<Product, ValidationErrors> {
    let mut errors = field_errors(draft);
    let brand_id = parse_id(&mut errors, "brand_id", &draft.brand_id);
    let supercategory_id = parse_id(&mut errors, "supercategory_id", &draft.supercategory_id);
    let category_id = parse_id(&mut errors, "category_id", &draft.category_id);
    let subcategory_id = parse_id(&mut errors, "subcategory_id", &draft.subcategory_id);

    match (brand_id, supercategory_id, category_id, subcategory_id) {
        (Some(brand_id), Some(supercategory_id), Some(category_id), Some(subcategory_id))
            if errors.is_empty() =>
        {
            Ok(Product {
                id: id.to_string(),
                name: draft.name.trim().to_string(),
                price: draft.price,
                stock: draft.stock,
                description: base.map(|p| p.description.clone()).unwrap_or_default(),
                sku: base.map(|p| p.sku.clone()).unwrap_or_default(),
                img_url: base.map(|p| p.img_url.clone()).unwrap_or_default(),
                brand_id,
                subcategory_id,
                category_id,
                supercategory_id,
            })
        }
        _ => Err(errors),
    }
}
