//! Tab session manager.
//!
//! `Session::reduce` is the transition function: it takes a session by value
//! and returns the next one. `TabManager` owns the current session and exposes
//! the same transitions as methods for the views that drive it.

use tracing::debug;

use crate::types::session::{Session, TabAction};
use crate::types::tab::{Tab, TabState};

impl Session {
    /// Apply one action and return the resulting session.
    pub fn reduce(self, action: TabAction) -> Session {
        match action {
            TabAction::Open { id, title } => self.open(id, title),
            TabAction::SetActive { id } => self.set_active(id),
            TabAction::Close { id } => self.close(&id),
            TabAction::UpdateState { id, state } => self.update_state(&id, state),
        }
    }

    fn position(&self, tab_id: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == tab_id)
    }

    fn open(mut self, id: String, title: String) -> Session {
        if self.position(&id).is_none() {
            self.tabs.push(Tab {
                id: id.clone(),
                title,
                state: None,
            });
        }
        self.active_tab_id = Some(id);
        self
    }

    fn set_active(mut self, id: String) -> Session {
        self.active_tab_id = Some(id);
        self
    }

    fn close(mut self, tab_id: &str) -> Session {
        let Some(idx) = self.position(tab_id) else {
            return self;
        };
        self.tabs.remove(idx);

        // Reactivate the last tab in sequence order, not the most recently used one.
        if self.active_tab_id.as_deref() == Some(tab_id) {
            self.active_tab_id = self.tabs.last().map(|t| t.id.clone());
        }
        self
    }

    fn update_state(mut self, tab_id: &str, state: Option<TabState>) -> Session {
        if let Some(tab) = self.tabs.iter_mut().find(|t| t.id == tab_id) {
            tab.state = state;
        }
        self
    }
}

/// Trait defining the tab session interface used by the tab strip and feature views.
pub trait TabManagerTrait {
    fn open_tab(&mut self, id: &str, title: &str);
    fn set_active(&mut self, id: &str);
    fn close_tab(&mut self, id: &str);
    fn update_state(&mut self, id: &str, state: Option<TabState>);
    fn get_tab(&self, id: &str) -> Option<&Tab>;
    fn tabs(&self) -> &[Tab];
    fn active_tab_id(&self) -> Option<&str>;
    fn active_tab(&self) -> Option<&Tab>;
    fn tab_count(&self) -> usize;
}

/// In-memory owner of the open-tab session.
#[derive(Debug, Default)]
pub struct TabManager {
    session: Session,
}

impl TabManager {
    pub fn new() -> Self {
        Self {
            session: Session::default(),
        }
    }

    /// Start from an existing session value.
    pub fn with_session(session: Session) -> Self {
        Self { session }
    }

    /// Run an action through the reducer and keep the result.
    pub fn dispatch(&mut self, action: TabAction) {
        debug!(?action, "tab action");
        let current = std::mem::take(&mut self.session);
        self.session = current.reduce(action);
        debug!(
            tabs = self.session.tabs.len(),
            active = self.session.active_tab_id.as_deref().unwrap_or(""),
            "tab session updated"
        );
    }

    /// Current session snapshot.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// State stored on the active tab, read by a view when it mounts.
    pub fn active_state(&self) -> Option<&TabState> {
        self.active_tab().and_then(|t| t.state.as_ref())
    }
}

impl TabManagerTrait for TabManager {
    /// Open a tab, or just activate it if the id is already open.
    fn open_tab(&mut self, id: &str, title: &str) {
        self.dispatch(TabAction::Open {
            id: id.to_string(),
            title: title.to_string(),
        });
    }

    /// Point the active tab at `id`. Existence is not checked.
    fn set_active(&mut self, id: &str) {
        self.dispatch(TabAction::SetActive { id: id.to_string() });
    }

    fn close_tab(&mut self, id: &str) {
        self.dispatch(TabAction::Close { id: id.to_string() });
    }

    /// Replace the state blob of an open tab. Unknown ids are ignored.
    fn update_state(&mut self, id: &str, state: Option<TabState>) {
        self.dispatch(TabAction::UpdateState {
            id: id.to_string(),
            state,
        });
    }

    fn get_tab(&self, id: &str) -> Option<&Tab> {
        self.session.tabs.iter().find(|t| t.id == id)
    }

    fn tabs(&self) -> &[Tab] {
        &self.session.tabs
    }

    fn active_tab_id(&self) -> Option<&str> {
        self.session.active_tab_id.as_deref()
    }

    fn active_tab(&self) -> Option<&Tab> {
        self.active_tab_id().and_then(|id| self.get_tab(id))
    }

    fn tab_count(&self) -> usize {
        self.session.tabs.len()
    }
}
