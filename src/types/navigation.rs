use serde::{Deserialize, Serialize};

/// Which feature view renders a tab.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ViewKind {
    Home,
    Products,
    Categories,
}

/// A sidebar entry. Its `id` doubles as the tab id it opens.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavItem {
    pub id: String,
    pub label: String,
    pub kind: ViewKind,
}
