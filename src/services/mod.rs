// Catalog admin services
// Stateless feature-view logic plus the settings engine.

pub mod navigation;
pub mod product_filter;
pub mod product_validation;
pub mod settings_engine;
