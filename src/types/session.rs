use serde::{Deserialize, Serialize};

use super::tab::{Tab, TabState};

/// The set of open tabs plus the active pointer.
///
/// `active_tab_id` is `None` when nothing is active. After any sequence of
/// opens and closes it names a tab in `tabs`; `SetActive` alone may point it
/// at an id that is not open.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Session {
    pub tabs: Vec<Tab>,
    pub active_tab_id: Option<String>,
}

/// A transition over a [`Session`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TabAction {
    Open { id: String, title: String },
    SetActive { id: String },
    Close { id: String },
    UpdateState { id: String, state: Option<TabState> },
}
