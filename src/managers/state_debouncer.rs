//! Debounced per-tab state persistence.
//!
//! Feature views schedule a write on every edit; only the last one per tab
//! reaches the session, once the tab has been quiet for the configured delay.
//! Callers pass `now` so the clock stays under their control.

use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::managers::tab_manager::TabManagerTrait;
use crate::types::tab::TabState;

#[derive(Debug, Clone)]
struct PendingWrite {
    tab_id: String,
    state: Option<TabState>,
    due: Instant,
}

/// Collapses bursts of state writes into one write per tab.
#[derive(Debug)]
pub struct StateDebouncer {
    delay: Duration,
    pending: Vec<PendingWrite>,
}

impl StateDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Vec::new(),
        }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Queue `state` for `tab_id`, replacing any earlier pending write and
    /// restarting its delay.
    pub fn schedule(&mut self, tab_id: &str, state: Option<TabState>, now: Instant) {
        let due = now + self.delay;
        match self.pending.iter_mut().find(|p| p.tab_id == tab_id) {
            Some(p) => {
                p.state = state;
                p.due = due;
            }
            None => self.pending.push(PendingWrite {
                tab_id: tab_id.to_string(),
                state,
                due,
            }),
        }
        trace!(tab_id, pending = self.pending.len(), "state write scheduled");
    }

    /// Drop the pending write for a tab, if any.
    pub fn cancel(&mut self, tab_id: &str) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.tab_id != tab_id);
        before != self.pending.len()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn is_pending(&self, tab_id: &str) -> bool {
        self.pending.iter().any(|p| p.tab_id == tab_id)
    }

    /// Earliest deadline among pending writes.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|p| p.due).min()
    }

    /// Apply every write whose deadline is at or before `now`.
    /// Returns how many writes changed a tab.
    pub fn flush_due<M: TabManagerTrait>(&mut self, now: Instant, manager: &mut M) -> usize {
        let (due, waiting): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.pending).into_iter().partition(|p| p.due <= now);
        self.pending = waiting;
        Self::apply(due, manager)
    }

    /// Apply every pending write regardless of deadline.
    pub fn flush_all<M: TabManagerTrait>(&mut self, manager: &mut M) -> usize {
        let all = std::mem::take(&mut self.pending);
        Self::apply(all, manager)
    }

    fn apply<M: TabManagerTrait>(writes: Vec<PendingWrite>, manager: &mut M) -> usize {
        let mut applied = 0;
        for write in writes {
            let Some(tab) = manager.get_tab(&write.tab_id) else {
                debug!(tab_id = %write.tab_id, "dropping state write for closed tab");
                continue;
            };
            if tab.state == write.state {
                trace!(tab_id = %write.tab_id, "state unchanged, skipping write");
                continue;
            }
            manager.update_state(&write.tab_id, write.state);
            applied += 1;
        }
        applied
    }
}
