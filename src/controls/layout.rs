//! Ordering and placement of the active actor's commands.
//!
//! Moves go into a 3x3 pad laid out like a compass rose, everything else into
//! a list sorted by description. A button's selection token is its index in
//! `moves ++ others`.

use crate::model::{Action, ActionKind};
use bevy::log::warn;

/// Bearings in reading order over the 3x3 pad: NW, N, NE, W, centre, E, SW, S, SE.
/// The centre entry never matches a move.
pub const DEFINED_ORDER: [i32; 9] = [315, 0, 45, 270, -1, 90, 225, 180, 135];

/// Pad slot that always stays empty
pub const CENTER_SLOT: usize = 4;

/// One clickable command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandButton {
    pub label: String,
    /// Index in the combined ordered list, published when the button is pressed
    pub token: usize,
}

/// What the command panel shows for one selection
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandMenu {
    /// Directional pad in reading order. `None` is an empty filler.
    pub pad: [Option<CommandButton>; 9],
    /// Non-move commands, top to bottom
    pub others: Vec<CommandButton>,
    /// Selection generation the buttons publish under
    pub generation: u64,
}

impl CommandMenu {
    /// Every button on the panel, pad first
    pub fn buttons(&self) -> impl Iterator<Item = &CommandButton> {
        self.pad.iter().flatten().chain(self.others.iter())
    }
}

/// A laid out command list plus the mapping from selection tokens back to
/// positions in the caller's action list.
#[derive(Debug, Clone)]
pub struct CommandLayout {
    pub menu: CommandMenu,
    /// `order[token]` is the index of that action in the input list
    order: Vec<usize>,
}

impl CommandLayout {
    pub fn build<A: Action>(actions: &[A]) -> Self {
        let (mut moves, mut others): (Vec<usize>, Vec<usize>) =
            (0..actions.len()).partition(|&i| actions[i].is_move());

        // Sort keys are computed once so a bad bearing is reported once
        let keys: Vec<usize> = actions.iter().map(move_sort_key).collect();

        // Both sorts are stable: moves sharing a bearing keep their input order
        moves.sort_by_key(|&i| keys[i]);
        others.sort_by(|&a, &b| actions[a].description().cmp(actions[b].description()));

        let mut menu = CommandMenu::default();
        let mut cursor = 0;

        for slot in 0..DEFINED_ORDER.len() {
            if slot == CENTER_SLOT {
                continue;
            }

            // A move whose slot has already been passed lost it to an earlier move
            while cursor < moves.len() && keys[moves[cursor]] < slot {
                drop_move(actions, moves[cursor]);
                cursor += 1;
            }

            if cursor < moves.len() && keys[moves[cursor]] == slot {
                menu.pad[slot] = Some(CommandButton {
                    label: actions[moves[cursor]].description().to_string(),
                    token: cursor,
                });
                cursor += 1;
            }
        }

        for &index in &moves[cursor..] {
            drop_move(actions, index);
        }

        menu.others = others
            .iter()
            .enumerate()
            .map(|(position, &index)| CommandButton {
                label: actions[index].description().to_string(),
                token: moves.len() + position,
            })
            .collect();

        let order = moves.into_iter().chain(others).collect();

        Self { menu, order }
    }

    /// Position in the caller's action list selected by `token`
    pub fn action_index(&self, token: usize) -> Option<usize> {
        self.order.get(token).copied()
    }

    /// Number of selection tokens (always the number of input actions)
    pub fn len(&self) -> usize {
        self.order.len()
    }
}

/// Pad slot of a move. Moves without a compass bearing are treated as north-west.
fn move_sort_key<A: Action>(action: &A) -> usize {
    match action.kind() {
        ActionKind::Move { bearing: Some(bearing) } => DEFINED_ORDER
            .iter()
            .position(|&angle| angle == bearing.degrees())
            .unwrap_or(0),
        ActionKind::Move { bearing: None } => {
            warn!(
                "Move '{}' has no compass bearing, placing it north-west",
                action.description()
            );
            0
        }
        ActionKind::Other => 0,
    }
}

fn drop_move<A: Action>(actions: &[A], index: usize) {
    warn!(
        "No free pad slot for move '{}', it gets no button",
        actions[index].description()
    );
}
