use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::filters::FilterState;
use crate::store::SessionStore;

/// Report the current filter configuration.
pub fn show<S: SessionStore>(state: &FilterState<S>) -> Result<CmdResult> {
    let config = state.get().clone();
    let mut result = CmdResult::default();
    if config.has_active() {
        result.add_message(CmdMessage::info(format!(
            "{} active filter(s): {}",
            config.active_count(),
            config.active_description().join("; ")
        )));
    } else {
        result.add_message(CmdMessage::info("No filters active."));
    }
    Ok(result.with_config(config))
}

/// Apply `key=value` assignments in order. Persists after each assignment,
/// so earlier keys stick even if a later key is rejected.
pub fn set<S: SessionStore>(
    state: &mut FilterState<S>,
    assignments: &[(String, String)],
) -> Result<CmdResult> {
    let mut config = state.get().clone();
    for (key, value) in assignments {
        config = state.set(key, value)?;
    }
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Updated {} filter(s)",
        assignments.len()
    )));
    Ok(result.with_config(config))
}

/// Clear all filters back to defaults.
pub fn reset<S: SessionStore>(state: &mut FilterState<S>) -> Result<CmdResult> {
    let config = state.reset()?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Filters reset to defaults"));
    Ok(result.with_config(config))
}
