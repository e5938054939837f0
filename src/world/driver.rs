use super::{SampleAction, SampleWorld};
use crate::model::Location;
use crate::renderer::{GridRenderer, SelectionError};
use bevy::log::{error, info};
use std::sync::{Arc, RwLock};

/// Runs the simulation loop until the renderer gives up.
///
/// Each tick redraws the map, reports what happened, then blocks on the
/// player's choice and applies it to the world.
pub fn run<R: GridRenderer>(world: &Arc<RwLock<SampleWorld>>, renderer: &mut R) -> SelectionError {
    let mut report = vec!["Biblo wakes up in Bag End.".to_string()];

    loop {
        renderer.display_map();

        let actions = {
            let Ok(world) = world.read() else {
                error!("World lock poisoned, stopping the simulation");
                return SelectionError::RendererClosed;
            };
            report.extend(describe_surroundings(&world));
            available_actions(&world)
        };

        for line in report.drain(..) {
            renderer.display_message(&line);
        }

        let chosen = match renderer.get_selection(actions) {
            Ok(action) => action,
            Err(err) => {
                error!("Simulation stopped: {}", err);
                return err;
            }
        };

        let Ok(mut world) = world.write() else {
            error!("World lock poisoned, stopping the simulation");
            return SelectionError::RendererClosed;
        };
        report.push(apply(&mut world, &chosen));
    }
}

/// Every action open to the hero right now. Waiting is always possible.
pub fn available_actions(world: &SampleWorld) -> Vec<SampleAction> {
    let mut actions: Vec<SampleAction> = world
        .open_bearings()
        .into_iter()
        .map(SampleAction::go)
        .collect();

    for item in world.items_at_hero() {
        if let Some(thing) = world.thing(item) {
            actions.push(SampleAction::take(item, &thing.description));
        }
    }

    actions.push(SampleAction::Wait);
    actions
}

fn describe_surroundings(world: &SampleWorld) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(place) = world.hero_place() {
        lines.push(format!("You are in {}.", place.long_description()));
    }

    let items: Vec<_> = world
        .items_at_hero()
        .into_iter()
        .filter_map(|item| world.thing(item))
        .map(|thing| thing.description.as_str())
        .collect();
    if !items.is_empty() {
        lines.push(format!("You see {}.", items.join(", ")));
    }
    lines
}

/// Apply the chosen action and describe the outcome
fn apply(world: &mut SampleWorld, action: &SampleAction) -> String {
    let outcome = match action {
        SampleAction::Move { bearing, .. } => {
            if world.move_hero(*bearing) {
                format!("Biblo walks {}.", bearing.name())
            } else {
                format!("Biblo cannot go {}.", bearing.name())
            }
        }
        SampleAction::Take { item, .. } => match world.take(*item) {
            Some(thing) => format!("Biblo takes {}.", thing.description),
            None => "There is nothing to take.".to_string(),
        },
        SampleAction::Wait => "Time passes.".to_string(),
    };

    info!("{}", outcome);
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Action, CompassBearing};
    use std::collections::VecDeque;

    /// Renderer that answers from a script of descriptions
    #[derive(Default)]
    struct ScriptedRenderer {
        script: VecDeque<&'static str>,
        maps: usize,
        log: Vec<String>,
        menus: Vec<Vec<String>>,
    }

    impl GridRenderer for ScriptedRenderer {
        fn display_map(&mut self) {
            self.maps += 1;
        }

        fn display_message(&mut self, text: &str) {
            self.log.push(text.to_string());
        }

        fn get_selection<A: Action>(&mut self, mut actions: Vec<A>) -> Result<A, SelectionError> {
            self.menus
                .push(actions.iter().map(|a| a.description().to_string()).collect());
            let wanted = self.script.pop_front().ok_or(SelectionError::RendererClosed)?;
            let index = actions
                .iter()
                .position(|a| a.description() == wanted)
                .ok_or(SelectionError::RendererClosed)?;
            Ok(actions.swap_remove(index))
        }
    }

    #[test]
    fn test_driver_applies_choices_in_order() {
        let world = Arc::new(RwLock::new(SampleWorld::new()));
        let mut renderer = ScriptedRenderer {
            script: VecDeque::from(["Take a golden ring", "Move South", "Wait"]),
            ..Default::default()
        };

        let stopped = run(&world, &mut renderer);

        assert_eq!(stopped, SelectionError::RendererClosed);
        assert_eq!(renderer.maps, 4);
        assert_eq!(renderer.menus.len(), 4);
        assert!(renderer.menus[0].contains(&"Take a golden ring".to_string()));
        assert!(renderer.log.contains(&"Biblo takes a golden ring.".to_string()));
        assert!(renderer.log.contains(&"Biblo walks South.".to_string()));
        assert!(renderer.log.contains(&"Time passes.".to_string()));

        let world = world.read().expect("world");
        assert_eq!(world.hero().map(|h| h.position), Some((4, 1)));
        assert_eq!(world.inventory.len(), 1);
    }

    #[test]
    fn test_wait_is_always_offered() {
        let mut world = SampleWorld::from_rows(&["R.R"]);
        world.place_hero("Biblo", (1, 0));
        world.place("$", "gold", (1, 0));

        let labels: Vec<_> = available_actions(&world)
            .iter()
            .map(|a| a.description().to_string())
            .collect();
        assert_eq!(labels, vec!["Take gold", "Wait"]);
    }

    #[test]
    fn test_moves_carry_their_bearing() {
        let action = SampleAction::go(CompassBearing::NorthWest);
        assert!(action.is_move());
        assert_eq!(action.description(), "Move North-West");
        assert!(!SampleAction::Wait.is_move());
    }
}
