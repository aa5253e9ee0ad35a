//! Busy/idle state for the user-triggered actions
//!
//! Each control cycles idle -> busy -> idle. A trigger received while busy is
//! refused, not queued. The return to idle happens when the [`BusyGuard`] is
//! dropped, so every exit path of an action resets its control.

use crate::error::FeedError;
use serde::{Deserialize, Serialize};
use std::sync::{Mutex, MutexGuard};

/// Control state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlState {
    Idle,
    Busy,
}

/// A button-like control with an idle and a busy label
#[derive(Debug)]
pub struct ActionControl {
    name: &'static str,
    idle_label: &'static str,
    busy_label: &'static str,
    state: Mutex<ControlState>,
}

impl ActionControl {
    pub fn new(name: &'static str, idle_label: &'static str, busy_label: &'static str) -> Self {
        Self {
            name,
            idle_label,
            busy_label,
            state: Mutex::new(ControlState::Idle),
        }
    }

    /// The simulate-transaction control
    pub fn simulate() -> Self {
        Self::new("simulate", "Simulate Transaction", "Simulating...")
    }

    /// The generate-summary control
    pub fn summary() -> Self {
        Self::new("summary", "Generate Summary (AI)", "Generating summary...")
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn idle_label(&self) -> &'static str {
        self.idle_label
    }

    pub fn busy_label(&self) -> &'static str {
        self.busy_label
    }

    pub fn state(&self) -> ControlState {
        *self.lock()
    }

    pub fn is_enabled(&self) -> bool {
        self.state() == ControlState::Idle
    }

    /// Move to busy, or refuse if an action is already in flight
    pub fn try_begin(&self) -> Result<BusyGuard<'_>, FeedError> {
        let mut state = self.lock();
        if *state == ControlState::Busy {
            log::debug!("{} refused: already busy", self.name);
            return Err(FeedError::Busy {
                action: self.name.to_string(),
            });
        }
        *state = ControlState::Busy;
        log::debug!("{} -> busy", self.name);
        Ok(BusyGuard { control: self })
    }

    fn lock(&self) -> MutexGuard<'_, ControlState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Holds a control busy until dropped
#[derive(Debug)]
pub struct BusyGuard<'a> {
    control: &'a ActionControl,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        *self.control.lock() = ControlState::Idle;
        log::debug!("{} -> idle", self.control.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle() {
        let control = ActionControl::simulate();
        assert!(control.is_enabled());
        assert_eq!(control.idle_label(), "Simulate Transaction");
        assert_eq!(control.busy_label(), "Simulating...");

        {
            let _guard = control.try_begin().unwrap();
            assert_eq!(control.state(), ControlState::Busy);
            assert!(!control.is_enabled());
        }

        assert_eq!(control.state(), ControlState::Idle);
    }

    #[test]
    fn test_busy_refuses_second_trigger() {
        let control = ActionControl::summary();
        let guard = control.try_begin().unwrap();
        let err = control.try_begin().unwrap_err();
        assert!(err.is_busy());
        drop(guard);
        assert!(control.try_begin().is_ok());
    }

    #[test]
    fn test_controls_are_independent() {
        let simulate = ActionControl::simulate();
        let summary = ActionControl::summary();
        let _a = simulate.try_begin().unwrap();
        let _b = summary.try_begin().unwrap();
        assert!(!simulate.is_enabled());
        assert!(!summary.is_enabled());
    }

    #[test]
    fn test_guard_resets_on_early_return() {
        fn failing(control: &ActionControl) -> Result<(), String> {
            let _guard = control.try_begin().map_err(|e| e.to_string())?;
            Err("remote failed".to_string())
        }

        let control = ActionControl::summary();
        assert!(failing(&control).is_err());
        assert_eq!(control.state(), ControlState::Idle);
    }
}
