//! App core for the catalog admin panel.
//!
//! Owns the tab session and everything that feeds it; the UI root holds one `App`.

use std::time::Instant;

use tracing::info;

use crate::managers::state_debouncer::StateDebouncer;
use crate::managers::tab_manager::TabManager;
use crate::services::navigation::Navigator;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::types::errors::SettingsError;

/// Central application struct holding the session and its collaborators.
pub struct App {
    pub tab_manager: TabManager,
    pub debouncer: StateDebouncer,
    pub navigator: Navigator,
    pub settings_engine: SettingsEngine,
}

impl App {
    /// Loads settings from `settings_path` (or the platform default) and
    /// builds an empty session.
    pub fn new(settings_path: Option<String>) -> Result<Self, SettingsError> {
        let mut settings_engine = SettingsEngine::new(settings_path);
        let settings = settings_engine.load()?;

        let debouncer = StateDebouncer::from_millis(settings.tabs.state_debounce_ms);
        let navigator = Navigator::new().with_product_defaults(settings.products.clone());

        info!(
            config = settings_engine.get_config_path(),
            debounce_ms = settings.tabs.state_debounce_ms,
            "app initialised"
        );

        Ok(Self {
            tab_manager: TabManager::new(),
            debouncer,
            navigator,
            settings_engine,
        })
    }

    /// Apply pending state writes whose delay has elapsed.
    pub fn tick(&mut self, now: Instant) -> usize {
        self.debouncer.flush_due(now, &mut self.tab_manager)
    }

    /// Rebuild the pieces that depend on settings after a change.
    pub fn apply_settings(&mut self) {
        let settings = self.settings_engine.get_settings().clone();
        // Pending edits must not be lost by a settings change.
        self.debouncer.flush_all(&mut self.tab_manager);
        self.debouncer = StateDebouncer::from_millis(settings.tabs.state_debounce_ms);
        self.navigator = Navigator::new().with_product_defaults(settings.products);
    }

    /// Flush everything before the process exits.
    pub fn shutdown(&mut self) {
        let flushed = self.debouncer.flush_all(&mut self.tab_manager);
        info!(flushed, "shutdown");
    }
}
