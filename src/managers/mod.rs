// Catalog admin state managers
// Managers handle stateful operations: the open-tab session and debounced tab state writes.

pub mod state_debouncer;
pub mod tab_manager;
