use std::collections::HashMap;

use parking_lot::Mutex;

use super::action::ActionKey;
use super::state::ActionState;
use crate::error::Error;
use crate::event;

/// Actions currently in flight, owned by one orchestrator
#[derive(Debug, Default)]
pub struct InFlightTable {
    actions: Mutex<HashMap<ActionKey, ActionState>>,
}

impl InFlightTable {
    /// Claims `key` in `Validating` state, fails with `Busy` if it is already claimed
    pub fn acquire(&self, key: ActionKey) -> Result<InFlightGuard<'_>, Error> {
        let mut actions = self.actions.lock();
        if actions.contains_key(&key) {
            event::busy(&key);
            return Err(Error::Busy);
        }

        actions.insert(key.clone(), ActionState::Validating);
        drop(actions);
        event::state_changed(&key, ActionState::Idle, ActionState::Validating);

        Ok(InFlightGuard {
            table: self,
            key,
            state: ActionState::Validating,
        })
    }

    pub fn state(&self, key: &ActionKey) -> Option<ActionState> {
        self.actions.lock().get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.actions.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.lock().is_empty()
    }
}

/// Claim on one key. Releases the key on drop, whatever path the flow left by.
#[derive(Debug)]
pub struct InFlightGuard<'a> {
    table: &'a InFlightTable,
    key: ActionKey,
    state: ActionState,
}

impl InFlightGuard<'_> {
    pub fn key(&self) -> &ActionKey {
        &self.key
    }

    pub fn state(&self) -> ActionState {
        self.state
    }

    pub fn transition(&mut self, to: ActionState) {
        let from = self.state;
        if from == to {
            return;
        }

        if let Some(state) = self.table.actions.lock().get_mut(&self.key) {
            *state = to;
        }
        self.state = to;
        event::state_changed(&self.key, from, to);
    }

    /// Moves to a terminal state and releases the key
    pub fn finish(mut self, to: ActionState) {
        self.transition(to);
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if !self.state.is_terminal() {
            self.transition(ActionState::Failed);
        }
        self.table.actions.lock().remove(&self.key);
    }
}
