use bevy::prelude::*;

use crate::engine::loading::tracker::LoadTracker;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum RevealState {
    #[default]
    Loading,
    Live,
}

// Swap to the live scene once both tracked assets have finished loading.
// Scheduled only while Loading, so the transition cannot fire twice.
pub fn transition_to_live(
    mut tracker: ResMut<LoadTracker>,
    mut next_state: ResMut<NextState<RevealState>>,
) {
    if tracker.take_ready() {
        println!("→ Transitioning to Live state");
        next_state.set(RevealState::Live);
    }
}
