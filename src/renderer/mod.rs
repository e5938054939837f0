//! The simulation-facing side of the GUI.
//!
//! [`GuiRenderer`] lives on the simulation thread and never touches a widget.
//! Every operation is turned into a [`RenderCommand`] and queued for the UI
//! thread, where [`drain_render_commands`] replays them as Bevy messages.

use crate::controls::{CommandLayout, CommandMenu, LogUpdate, ShowMenu};
use crate::map::RedrawMap;
use crate::model::{Action, GridModel, MapSnapshot};
use crate::selection::SelectionSlot;
use bevy::prelude::*;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex, RwLock};
use thiserror::Error;

/// Plugin that feeds queued render commands into the UI each frame
pub struct RendererPlugin;

impl Plugin for RendererPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreUpdate, drain_render_commands);
    }
}

/// Something the simulation asked the UI to do
#[derive(Debug, Clone)]
pub enum RenderCommand {
    Map(MapSnapshot),
    Message(String),
    ClearMessages,
    Menu(CommandMenu),
}

/// Errors returned by [`GridRenderer::get_selection`]
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SelectionError {
    #[error("get_selection called with an empty command list")]
    EmptyCommandList,

    #[error("the UI side of the renderer has shut down")]
    RendererClosed,
}

/// What the simulation loop needs from a renderer
pub trait GridRenderer {
    /// Redraw the whole map from the current world state
    fn display_map(&mut self);

    /// Append a line to this tick's message log
    fn display_message(&mut self, text: &str);

    /// Show the commands and block until the user picks one
    fn get_selection<A: Action>(&mut self, actions: Vec<A>) -> Result<A, SelectionError>;
}

/// Renderer handle owned by the simulation thread.
///
/// There is one per window. The world is shared with the simulation, which
/// only mutates it between calls.
pub struct GuiRenderer<G> {
    world: Arc<RwLock<G>>,
    commands: Sender<RenderCommand>,
    selection: Arc<SelectionSlot>,
}

impl<G: GridModel> GuiRenderer<G> {
    /// Create the renderer and the UI-side end of its command queue
    pub fn connect(world: Arc<RwLock<G>>, selection: Arc<SelectionSlot>) -> (Self, RenderBridge) {
        let (commands, receiver) = mpsc::channel();
        let renderer = Self {
            world,
            commands,
            selection,
        };
        (renderer, RenderBridge(Mutex::new(receiver)))
    }

    fn send(&self, command: RenderCommand) -> Result<(), SelectionError> {
        self.commands
            .send(command)
            .map_err(|_| SelectionError::RendererClosed)
    }
}

impl<G: GridModel> GridRenderer for GuiRenderer<G> {
    fn display_map(&mut self) {
        let snapshot = match self.world.read() {
            Ok(world) => MapSnapshot::capture(&*world),
            Err(_) => {
                error!("World lock poisoned, skipping map redraw");
                return;
            }
        };

        if self.send(RenderCommand::Map(snapshot)).is_err() {
            warn!("Map redraw dropped, UI has shut down");
        }
    }

    fn display_message(&mut self, text: &str) {
        if self.send(RenderCommand::Message(text.to_string())).is_err() {
            warn!("Message dropped, UI has shut down: {}", text);
        }
    }

    fn get_selection<A: Action>(&mut self, mut actions: Vec<A>) -> Result<A, SelectionError> {
        self.send(RenderCommand::ClearMessages)?;

        if actions.is_empty() {
            return Err(SelectionError::EmptyCommandList);
        }

        let mut layout = CommandLayout::build(&actions);
        let mut menu = std::mem::take(&mut layout.menu);
        menu.generation = self.selection.reset();
        self.send(RenderCommand::Menu(menu))?;

        // Stale clicks are filtered by generation; an unknown token is skipped
        let index = loop {
            let token = self.selection.await_selection();
            match layout.action_index(token) {
                Some(index) => break index,
                None => warn!(
                    "Ignoring selection token {} outside {} commands",
                    token,
                    layout.len()
                ),
            }
        };

        info!("Selected '{}'", actions[index].description());
        Ok(actions.swap_remove(index))
    }
}

/// UI-side end of the render command queue
#[derive(Resource)]
pub struct RenderBridge(Mutex<Receiver<RenderCommand>>);

/// Replays every queued render command, oldest first
pub fn drain_render_commands(
    bridge: Res<RenderBridge>,
    mut redraws: MessageWriter<RedrawMap>,
    mut log: MessageWriter<LogUpdate>,
    mut menus: MessageWriter<ShowMenu>,
) {
    let Ok(receiver) = bridge.0.lock() else {
        error!("Render command queue poisoned");
        return;
    };

    for command in receiver.try_iter() {
        match command {
            RenderCommand::Map(snapshot) => {
                redraws.write(RedrawMap(snapshot));
            }
            RenderCommand::Message(text) => {
                log.write(LogUpdate::Append(text));
            }
            RenderCommand::ClearMessages => {
                log.write(LogUpdate::Clear);
            }
            RenderCommand::Menu(menu) => {
                debug!("Showing {} commands", menu.buttons().count());
                menus.write(ShowMenu(menu));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::layout::tests::TestAction;
    use crate::world::SampleWorld;
    use std::thread;
    use std::time::Duration;

    fn renderer() -> (GuiRenderer<SampleWorld>, Receiver<RenderCommand>, Arc<SelectionSlot>) {
        let world = Arc::new(RwLock::new(SampleWorld::from_rows(&["."])));
        let slot = Arc::new(SelectionSlot::default());
        let (renderer, RenderBridge(receiver)) = GuiRenderer::connect(world, Arc::clone(&slot));
        (renderer, receiver.into_inner().expect("receiver"), slot)
    }

    /// Skip ahead to the next menu, as the UI thread would
    fn next_menu(receiver: &Receiver<RenderCommand>) -> CommandMenu {
        loop {
            if let RenderCommand::Menu(menu) = receiver.recv().expect("command") {
                return menu;
            }
        }
    }

    #[test]
    fn test_selection_round_trip() {
        let (mut renderer, receiver, slot) = renderer();

        let simulation = thread::spawn(move || {
            renderer.display_message("a");
            renderer.get_selection(vec![
                TestAction::other("Wait"),
                TestAction::go(180),
                TestAction::other("Take"),
                TestAction::go(0),
            ])
        });

        // Play the UI thread: read commands until the menu shows up, then click "Take"
        let mut seen = Vec::new();
        let menu = loop {
            match receiver.recv().expect("command") {
                RenderCommand::Menu(menu) => break menu,
                RenderCommand::Message(text) => seen.push(text),
                RenderCommand::ClearMessages => seen.push("<clear>".to_string()),
                RenderCommand::Map(_) => {}
            }
        };
        assert_eq!(seen, vec!["a", "<clear>"]);

        let take = menu
            .buttons()
            .find(|button| button.label == "Take")
            .expect("Take button");
        assert!(slot.publish(menu.generation, take.token));

        let chosen = simulation.join().expect("simulation thread");
        assert_eq!(chosen, Ok(TestAction::other("Take")));
    }

    #[test]
    fn test_every_button_returns_its_own_action() {
        let actions = vec![
            TestAction::other("Wait"),
            TestAction::go(90),
            TestAction::other("Attack"),
            TestAction::go(315),
        ];
        let menu = CommandLayout::build(&actions).menu;
        let buttons: Vec<_> = menu.buttons().cloned().collect();
        assert_eq!(buttons.len(), actions.len());

        for button in buttons {
            let (mut renderer, receiver, slot) = renderer();
            let token = button.token;
            let ui = thread::spawn(move || {
                let generation = next_menu(&receiver).generation;
                slot.publish(generation, token);
            });

            let chosen = renderer.get_selection(actions.clone()).expect("selection");
            ui.join().expect("ui thread");
            assert_eq!(chosen.description, button.label);
        }
    }

    #[test]
    fn test_click_on_previous_menu_is_ignored() {
        let (mut renderer, receiver, slot) = renderer();

        let simulation = thread::spawn(move || {
            let first = renderer.get_selection(vec![
                TestAction::other("Attack"),
                TestAction::other("Leave"),
                TestAction::other("Take"),
                TestAction::other("Wait"),
            ]);
            let second = renderer.get_selection(vec![TestAction::go(0), TestAction::other("Wait")]);
            (first, second)
        });

        let first = next_menu(&receiver);
        let wait = first.others[3].clone();
        assert_eq!(wait.label, "Wait");
        assert!(slot.publish(first.generation, wait.token));

        // Double click: the second press reaches the old button after the next menu went out
        let second = next_menu(&receiver);
        assert_ne!(second.generation, first.generation);
        assert!(!slot.publish(first.generation, wait.token));
        assert!(!slot.publish(first.generation, 0));

        thread::sleep(Duration::from_millis(50));
        assert!(!simulation.is_finished());

        let north = second.pad[1].clone().expect("north button");
        assert!(slot.publish(second.generation, north.token));

        let (first_choice, second_choice) = simulation.join().expect("simulation thread");
        assert_eq!(first_choice, Ok(TestAction::other("Wait")));
        assert_eq!(second_choice, Ok(TestAction::go(0)));
    }

    #[test]
    fn test_out_of_range_token_keeps_waiting() {
        let (mut renderer, receiver, slot) = renderer();

        let simulation =
            thread::spawn(move || renderer.get_selection(vec![TestAction::other("Wait")]));

        let menu = next_menu(&receiver);
        assert!(slot.publish(menu.generation, 5));
        thread::sleep(Duration::from_millis(50));
        assert!(!simulation.is_finished());

        assert!(slot.publish(menu.generation, 0));
        let chosen = simulation.join().expect("simulation thread");
        assert_eq!(chosen, Ok(TestAction::other("Wait")));
    }

    #[test]
    fn test_empty_command_list_does_not_block() {
        let (mut renderer, receiver, _slot) = renderer();

        let result = renderer.get_selection(Vec::<TestAction>::new());

        assert_eq!(result, Err(SelectionError::EmptyCommandList));
        assert!(matches!(receiver.try_recv(), Ok(RenderCommand::ClearMessages)));
    }

    #[test]
    fn test_closed_ui_does_not_block() {
        let (mut renderer, receiver, _slot) = renderer();
        drop(receiver);

        let result = renderer.get_selection(vec![TestAction::other("Wait")]);

        assert_eq!(result, Err(SelectionError::RendererClosed));
    }

    #[test]
    fn test_display_map_sends_snapshot() {
        let (mut renderer, receiver, _slot) = renderer();

        renderer.display_map();

        match receiver.try_recv() {
            Ok(RenderCommand::Map(snapshot)) => {
                assert_eq!((snapshot.width, snapshot.height), (1, 1));
                assert_eq!(snapshot.cells[0].symbol, '.');
            }
            other => panic!("expected a map snapshot, got {other:?}"),
        }
    }
}
