use serde::{Deserialize, Serialize};

use super::tab::SortOrder;

/// Top-level admin panel settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AdminSettings {
    pub tabs: TabSettings,
    pub products: ProductSettings,
    pub logging: LoggingSettings,
}

/// Tab session settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TabSettings {
    /// Delay after the last edit before a view's state is written to its tab.
    pub state_debounce_ms: u64,
}

impl Default for TabSettings {
    fn default() -> Self {
        Self {
            state_debounce_ms: 300,
        }
    }
}

/// Product list defaults applied to a fresh products tab.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductSettings {
    pub default_page_size: usize,
    pub default_sort_field: String,
    pub default_sort_order: SortOrder,
}

impl Default for ProductSettings {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            default_sort_field: "name".to_string(),
            default_sort_order: SortOrder::Asc,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingSettings {
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
