//! Hand-off of one button press from the UI thread to the simulation thread.

use bevy::prelude::*;
use std::sync::{Arc, Condvar, Mutex, PoisonError};

#[derive(Debug, Default)]
struct SlotState {
    /// Menu the slot currently accepts clicks for
    generation: u64,
    token: Option<usize>,
}

/// Single-value slot the simulation blocks on until a command button fires.
///
/// States are empty and filled(token). Publishing over a filled slot
/// replaces the value, so the last click before the read wins. Every
/// `reset` opens a new generation, and clicks carrying an older one are
/// dropped, so a button left over from a previous menu can never answer
/// the current one.
#[derive(Debug, Default)]
pub struct SelectionSlot {
    state: Mutex<SlotState>,
    filled: Condvar,
}

impl SelectionSlot {
    /// Empty the slot and start accepting clicks for a new menu.
    /// Returns the generation the new menu's buttons must carry.
    pub fn reset(&self) -> u64 {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.generation += 1;
        state.token = None;
        state.generation
    }

    /// Fill the slot and wake the waiting reader.
    /// Returns false when the click belongs to a stale menu and was dropped.
    pub fn publish(&self, generation: u64, token: usize) -> bool {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if state.generation != generation {
            return false;
        }
        state.token = Some(token);
        self.filled.notify_all();
        true
    }

    /// Block until the slot is filled, then take the token, leaving the slot empty
    pub fn await_selection(&self) -> usize {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let mut state = self
            .filled
            .wait_while(state, |state| state.token.is_none())
            .unwrap_or_else(PoisonError::into_inner);
        // wait_while only returns once the slot holds a value
        state.token.take().unwrap_or_default()
    }

    #[cfg(test)]
    pub fn peek(&self) -> Option<usize> {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .token
    }
}

/// The process-wide selection slot, shared by the command buttons and the renderer
#[derive(Resource, Clone, Debug, Default, Deref)]
pub struct SelectionCoordinator(pub Arc<SelectionSlot>);

impl SelectionCoordinator {
    pub fn slot(&self) -> Arc<SelectionSlot> {
        Arc::clone(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_publish_then_await() {
        let slot = SelectionSlot::default();
        let generation = slot.reset();
        assert!(slot.publish(generation, 3));
        assert_eq!(slot.await_selection(), 3);
        assert_eq!(slot.peek(), None);
    }

    #[test]
    fn test_last_click_wins() {
        let slot = SelectionSlot::default();
        let generation = slot.reset();
        slot.publish(generation, 1);
        slot.publish(generation, 4);
        assert_eq!(slot.await_selection(), 4);
    }

    #[test]
    fn test_reset_discards_late_click() {
        let slot = SelectionSlot::default();
        let generation = slot.reset();
        slot.publish(generation, 2);
        slot.reset();
        assert_eq!(slot.peek(), None);
    }

    #[test]
    fn test_click_from_previous_menu_is_dropped() {
        let slot = SelectionSlot::default();
        let old = slot.reset();
        let current = slot.reset();
        assert_ne!(old, current);

        assert!(!slot.publish(old, 3));
        assert_eq!(slot.peek(), None);

        assert!(slot.publish(current, 1));
        assert_eq!(slot.await_selection(), 1);
    }

    #[test]
    fn test_await_blocks_until_other_thread_publishes() {
        let coordinator = SelectionCoordinator::default();
        let slot = coordinator.slot();
        let generation = slot.reset();

        let clicker = thread::spawn(move || {
            thread::sleep(Duration::from_millis(50));
            slot.publish(generation, 7);
        });

        assert_eq!(coordinator.await_selection(), 7);
        clicker.join().expect("clicker thread");
        assert_eq!(coordinator.peek(), None);
    }
}
