// Catalog admin navigation
// The sidebar registry: each entry opens (or re-activates) the tab with its id.

use tracing::{info, warn};

use crate::managers::tab_manager::TabManagerTrait;
use crate::types::errors::NavigationError;
use crate::types::navigation::{NavItem, ViewKind};
use crate::types::settings::ProductSettings;
use crate::types::tab::{Pagination, ProductTabState, SortModel, TabState};

/// Sidebar registry and tab opener.
pub struct Navigator {
    items: Vec<NavItem>,
    product_defaults: ProductSettings,
}

impl Navigator {
    /// Creates a navigator with the standard sidebar entries.
    pub fn new() -> Self {
        Self::with_items(Self::default_items())
    }

    pub fn with_items(items: Vec<NavItem>) -> Self {
        Self {
            items,
            product_defaults: ProductSettings::default(),
        }
    }

    /// Use configured page size and sort for freshly opened product tabs.
    pub fn with_product_defaults(mut self, defaults: ProductSettings) -> Self {
        self.product_defaults = defaults;
        self
    }

    pub fn default_items() -> Vec<NavItem> {
        vec![
            NavItem {
                id: "home".to_string(),
                label: "Inicio".to_string(),
                kind: ViewKind::Home,
            },
            NavItem {
                id: "products".to_string(),
                label: "Productos".to_string(),
                kind: ViewKind::Products,
            },
            NavItem {
                id: "categories".to_string(),
                label: "Categorías".to_string(),
                kind: ViewKind::Categories,
            },
        ]
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    pub fn find(&self, id: &str) -> Option<&NavItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// State a view starts from when its tab has none yet.
    pub fn initial_state(&self, kind: ViewKind) -> Option<TabState> {
        match kind {
            ViewKind::Home => Some(TabState::Home),
            ViewKind::Products => Some(TabState::Products(ProductTabState {
                pagination: Pagination {
                    page: 0,
                    page_size: self.product_defaults.default_page_size,
                },
                sort: Some(SortModel {
                    field: self.product_defaults.default_sort_field.clone(),
                    order: self.product_defaults.default_sort_order,
                }),
                ..ProductTabState::default()
            })),
            ViewKind::Categories => None,
        }
    }

    /// Open the tab for a sidebar entry and make it active.
    ///
    /// A tab that is already open keeps whatever state its view saved.
    pub fn navigate<M: TabManagerTrait>(
        &self,
        id: &str,
        manager: &mut M,
    ) -> Result<&NavItem, NavigationError> {
        let Some(item) = self.find(id) else {
            warn!(target_id = id, "navigation to unknown target");
            return Err(NavigationError::UnknownTarget(id.to_string()));
        };

        let fresh = manager.get_tab(&item.id).is_none();
        manager.open_tab(&item.id, &item.label);
        if fresh {
            if let Some(state) = self.initial_state(item.kind) {
                manager.update_state(&item.id, Some(state));
            }
            info!(tab_id = %item.id, "opened tab");
        }
        Ok(item)
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
